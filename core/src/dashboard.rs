//! Pipeline orchestrator — one render cycle, end to end.
//!
//! Data flows one direction:
//!   source -> cache -> extract -> normalize -> filter -> {metrics, charts}
//!
//! Any data-shape error aborts the whole render; nothing partially
//! valid ever crosses the presentation boundary. The caller keeps its
//! previous snapshot if it wants one.

use crate::{
    aggregate::ChartAggregates,
    config::DashboardConfig,
    error::DashResult,
    filter::{state_options, StateFilter},
    metrics::ComplaintMetrics,
    normalize::{normalize, ComplaintRecord},
    record::extract_all,
    source::{CachedSource, RecordSource},
};
use serde::{Deserialize, Serialize};

/// Everything that crosses the presentation boundary for one render:
/// the active filter label, the four scalars (the timely rate also
/// pre-formatted as a percentage string), and the four chart inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub filter_label: String,
    pub metrics: ComplaintMetrics,
    pub timely_label: String,
    pub charts: ChartAggregates,
}

/// The data-access object that replaces the original dashboard's
/// module-level spreadsheet client and cached frame: explicitly
/// constructed, explicitly passed, owning its cache lifecycle.
pub struct Dashboard<S: RecordSource> {
    cache: CachedSource<S>,
}

impl<S: RecordSource> Dashboard<S> {
    pub fn new(source: S, config: &DashboardConfig) -> Self {
        Self {
            cache: CachedSource::new(source, config.cache_ttl()),
        }
    }

    /// Fetch-or-reuse-cache, extract, normalize.
    fn ledger(&self) -> DashResult<Vec<ComplaintRecord>> {
        let rows = self.cache.rows()?;
        let raw = extract_all(&rows)?;
        normalize(raw)
    }

    /// The enumerated filter choices to surface to the user, sentinel
    /// first. The caller must present this set unmodified.
    pub fn state_options(&self) -> DashResult<Vec<String>> {
        Ok(state_options(&self.ledger()?))
    }

    /// Run one full synchronous render cycle for the given selection.
    pub fn render(&self, selected: &str) -> DashResult<RenderSnapshot> {
        let ledger = self.ledger()?;
        let options = state_options(&ledger);
        let filter = StateFilter::from_selection(selected, &options)?;
        let visible = filter.apply(&ledger);

        let metrics = ComplaintMetrics::compute(&visible);
        let charts = ChartAggregates::compute(&visible);

        log::info!(
            "render: state={} rows={} total={}",
            filter.label(),
            visible.len(),
            metrics.total,
        );

        Ok(RenderSnapshot {
            filter_label: filter.label().to_string(),
            timely_label: metrics.timely.display(),
            metrics,
            charts,
        })
    }

    /// Drop the cached fetch; the next render re-reads the source.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate();
    }
}
