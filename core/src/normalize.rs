//! Ledger normalizer — date parsing, calendar derivation, chronological
//! order.
//!
//! RULE: a partially normalized ledger is never exposed. One bad date
//! rejects the whole fetch.

use crate::error::{DashResult, DashboardError};
use crate::record::RawComplaint;
use crate::types::{Month, Year};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date formats the ledger is known to carry. ISO first, so a ledger
/// that already went through normalization parses on the first try.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y"];

/// The normalized complaint entity. Immutable after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintRecord {
    pub date: NaiveDate,
    pub year: Year,
    pub month: Month,
    pub state: String,
    pub product: String,
    pub issue: String,
    pub sub_issue: String,
    pub submitted_via: String,
    pub company_response: String,
    pub timely: Option<String>,
    pub count: u64,
}

impl ComplaintRecord {
    /// Render back to the raw shape (ISO date). Lets a caller feed an
    /// already-normalized ledger through `normalize` again.
    pub fn to_raw(&self) -> RawComplaint {
        RawComplaint {
            date: self.date.format("%Y-%m-%d").to_string(),
            state: self.state.clone(),
            product: self.product.clone(),
            issue: self.issue.clone(),
            sub_issue: self.sub_issue.clone(),
            submitted_via: self.submitted_via.clone(),
            company_response: self.company_response.clone(),
            timely: self.timely.clone(),
            count: self.count,
        }
    }
}

fn parse_date(value: &str, row: usize) -> DashResult<NaiveDate> {
    let trimmed = value.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    Err(DashboardError::MalformedDate {
        value: value.to_string(),
        row,
    })
}

/// Normalize the raw ledger: parse every date, derive calendar year and
/// month, and stable-sort ascending by date (ties keep input order).
///
/// Pure and idempotent: one pass plus one sort, input consumed, nothing
/// mutated in place from the caller's perspective.
pub fn normalize(rows: Vec<RawComplaint>) -> DashResult<Vec<ComplaintRecord>> {
    let mut ledger = Vec::with_capacity(rows.len());
    for (row, raw) in rows.into_iter().enumerate() {
        let date = parse_date(&raw.date, row)?;
        ledger.push(ComplaintRecord {
            date,
            year: date.year(),
            month: date.month(),
            state: raw.state,
            product: raw.product,
            issue: raw.issue,
            sub_issue: raw.sub_issue,
            submitted_via: raw.submitted_via,
            company_response: raw.company_response,
            timely: raw.timely,
            count: raw.count,
        });
    }
    // Vec::sort_by_key is stable, which is what keeps ties in input order.
    ledger.sort_by_key(|record| record.date);
    Ok(ledger)
}
