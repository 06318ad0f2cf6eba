//! Metric engine — the four headline scalars.
//!
//! Recomputed in full on every filter change; the ledger is
//! reporting-scale, so there is no incremental update path.

use crate::normalize::ComplaintRecord;
use serde::{Deserialize, Serialize};

/// Timely-response rate. A ledger slice with zero timeliness-tagged
/// rows has no defined rate; that is a normal outcome the caller must
/// render itself (e.g. "N/A"), not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum TimelyRate {
    Percent(f64),
    Undefined,
}

impl TimelyRate {
    /// Two-decimal percentage string for the presentation boundary.
    pub fn display(&self) -> String {
        match self {
            TimelyRate::Percent(rate) => format!("{rate:.2}%"),
            TimelyRate::Undefined => "N/A".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintMetrics {
    /// Sum of the complaint-count field over all records.
    pub total: u64,
    /// Records whose response text fuzzy-matches "close".
    pub closed: u64,
    /// Records whose response text is exactly "In progress".
    pub in_progress: u64,
    pub timely: TimelyRate,
}

impl ComplaintMetrics {
    pub fn compute(records: &[ComplaintRecord]) -> Self {
        let total = records.iter().map(|record| record.count).sum();

        // Substring match on purpose: company_response is free text, and
        // "Closed", "Closed with explanation", "Closed with monetary
        // relief" must all count.
        let closed = records
            .iter()
            .filter(|r| r.company_response.to_ascii_lowercase().contains("close"))
            .count() as u64;

        // Exact match on purpose, asymmetric with the closed match above.
        // Changing either side changes the reported figures.
        let in_progress = records
            .iter()
            .filter(|r| r.company_response == "In progress")
            .count() as u64;

        let tagged = records.iter().filter(|r| r.timely.is_some()).count();
        let yes = records
            .iter()
            .filter(|r| r.timely.as_deref() == Some("Yes"))
            .count();
        let timely = if tagged == 0 {
            TimelyRate::Undefined
        } else {
            let percent = yes as f64 / tagged as f64 * 100.0;
            TimelyRate::Percent((percent * 100.0).round() / 100.0)
        };

        Self {
            total,
            closed,
            in_progress,
            timely,
        }
    }
}
