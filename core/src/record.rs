//! Record-source boundary: required columns and raw-row extraction.
//!
//! RULE: only this module touches raw column names. Everything past
//! extraction works with typed records.

use crate::error::{DashResult, DashboardError};
use serde_json::{Map, Value};

/// One row as returned by the record source: column name -> value.
/// Column names are exact and case-sensitive at this boundary.
pub type RawRow = Map<String, Value>;

pub mod columns {
    pub const DATE: &str = "Date";
    pub const STATE: &str = "state";
    pub const PRODUCT: &str = "product";
    pub const ISSUE: &str = "issue";
    pub const SUB_ISSUE: &str = "sub_issue";
    pub const SUBMITTED_VIA: &str = "submitted_via";
    pub const COMPANY_RESPONSE: &str = "company_response";
    pub const TIMELY: &str = "timely";
    pub const COUNT: &str = "Count of Complaints";
}

/// Every column the source must supply.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    columns::DATE,
    columns::STATE,
    columns::PRODUCT,
    columns::ISSUE,
    columns::SUB_ISSUE,
    columns::SUBMITTED_VIA,
    columns::COMPANY_RESPONSE,
    columns::TIMELY,
    columns::COUNT,
];

/// A complaint row pulled off the source, date still unparsed.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RawComplaint {
    pub date: String,
    pub state: String,
    pub product: String,
    pub issue: String,
    pub sub_issue: String,
    pub submitted_via: String,
    pub company_response: String,
    /// None when the cell is empty: a missing value in a present column.
    pub timely: Option<String>,
    pub count: u64,
}

/// Spreadsheet clients hand numeric-looking cells back as numbers, so a
/// text column is coerced rather than required to be a JSON string.
fn text_field(raw: &RawRow, column: &'static str, row: usize) -> DashResult<String> {
    let value = raw
        .get(column)
        .ok_or(DashboardError::MissingColumn { column, row })?;
    Ok(match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn count_field(raw: &RawRow, row: usize) -> DashResult<u64> {
    let value = raw
        .get(columns::COUNT)
        .ok_or(DashboardError::MissingColumn {
            column: columns::COUNT,
            row,
        })?;
    let malformed = || DashboardError::MalformedCount {
        value: value.to_string(),
        row,
    };
    match value {
        Value::Number(n) => n.as_u64().ok_or_else(malformed),
        Value::String(s) => s.trim().parse::<u64>().map_err(|_| malformed()),
        _ => Err(malformed()),
    }
}

impl RawComplaint {
    /// Extract one row. `row` is the zero-based source row index,
    /// carried into every error for operator diagnostics.
    pub fn from_row(raw: &RawRow, row: usize) -> DashResult<Self> {
        let timely = text_field(raw, columns::TIMELY, row)?;
        Ok(Self {
            date: text_field(raw, columns::DATE, row)?,
            state: text_field(raw, columns::STATE, row)?,
            product: text_field(raw, columns::PRODUCT, row)?,
            issue: text_field(raw, columns::ISSUE, row)?,
            sub_issue: text_field(raw, columns::SUB_ISSUE, row)?,
            submitted_via: text_field(raw, columns::SUBMITTED_VIA, row)?,
            company_response: text_field(raw, columns::COMPANY_RESPONSE, row)?,
            timely: if timely.is_empty() { None } else { Some(timely) },
            count: count_field(raw, row)?,
        })
    }
}

/// Extract the whole fetch. The first bad row rejects the fetch; no
/// partial ledger ever reaches the normalizer.
pub fn extract_all(rows: &[RawRow]) -> DashResult<Vec<RawComplaint>> {
    rows.iter()
        .enumerate()
        .map(|(row, raw)| RawComplaint::from_row(raw, row))
        .collect()
}
