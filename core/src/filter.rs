//! Filter stage — one categorical partition over the normalized ledger.

use crate::error::{DashResult, DashboardError};
use crate::normalize::ComplaintRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sentinel meaning "no restriction". Always first in the option list.
pub const ALL_STATES: &str = "All";

/// The enumerated filter choices the caller must surface unmodified:
/// the sentinel, then the distinct state values in first-seen order
/// over the (date-sorted) ledger.
pub fn state_options(ledger: &[ComplaintRecord]) -> Vec<String> {
    let mut options = vec![ALL_STATES.to_string()];
    let mut seen = HashSet::new();
    for record in ledger {
        if seen.insert(record.state.as_str()) {
            options.push(record.state.clone());
        }
    }
    options
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "state")]
pub enum StateFilter {
    All,
    State(String),
}

impl StateFilter {
    /// Validate a caller selection against the enumerated option set.
    /// A selection outside the set is a configuration error reported to
    /// the caller, never a silent fall-back to the sentinel.
    pub fn from_selection(selected: &str, options: &[String]) -> DashResult<Self> {
        if selected == ALL_STATES {
            return Ok(StateFilter::All);
        }
        if options.iter().any(|option| option == selected) {
            Ok(StateFilter::State(selected.to_string()))
        } else {
            Err(DashboardError::InvalidFilter {
                selected: selected.to_string(),
            })
        }
    }

    /// Label shown by the presentation layer.
    pub fn label(&self) -> &str {
        match self {
            StateFilter::All => ALL_STATES,
            StateFilter::State(state) => state,
        }
    }

    /// Restrict the ledger to the selected state. Never reorders; the
    /// sentinel passes the ledger through unchanged.
    pub fn apply(&self, ledger: &[ComplaintRecord]) -> Vec<ComplaintRecord> {
        match self {
            StateFilter::All => ledger.to_vec(),
            StateFilter::State(state) => ledger
                .iter()
                .filter(|record| &record.state == state)
                .cloned()
                .collect(),
        }
    }
}
