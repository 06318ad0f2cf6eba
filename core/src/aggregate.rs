//! Aggregation engine — the four chart-ready projections.
//!
//! Ordering direction is part of each contract:
//!   by_product       descending by total (ranked bar chart)
//!   time_series      ascending by date (line chart)
//!   by_channel       ascending by total (pie layout wants smallest first)
//!   issue_breakdown  descending by total (treemap rows)

use crate::normalize::ComplaintRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatePoint {
    pub date: NaiveDate,
    pub total: u64,
}

/// One (issue, sub-issue) pair flattened for a hierarchical chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueBreakdownRow {
    pub issue: String,
    pub sub_issue: String,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAggregates {
    pub by_product: Vec<CategoryTotal>,
    pub time_series: Vec<DatePoint>,
    pub by_channel: Vec<CategoryTotal>,
    pub issue_breakdown: Vec<IssueBreakdownRow>,
}

/// Group and sum complaint counts, preserving first-seen key order.
/// Stable sorts downstream then keep that order among equal totals.
fn grouped_totals<K, F>(records: &[ComplaintRecord], key: F) -> Vec<(K, u64)>
where
    K: Eq + Hash + Clone,
    F: Fn(&ComplaintRecord) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, u64)> = Vec::new();
    for record in records {
        let k = key(record);
        match index.get(&k) {
            Some(&at) => groups[at].1 += record.count,
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, record.count));
            }
        }
    }
    groups
}

impl ChartAggregates {
    /// Pure function of the filtered ledger slice; retains no reference
    /// to the source records.
    pub fn compute(records: &[ComplaintRecord]) -> Self {
        let mut by_product: Vec<CategoryTotal> =
            grouped_totals(records, |r| r.product.clone())
                .into_iter()
                .map(|(category, total)| CategoryTotal { category, total })
                .collect();
        by_product.sort_by(|a, b| b.total.cmp(&a.total));

        // The ledger is date-sorted, so first-seen group order is
        // already chronological.
        let time_series: Vec<DatePoint> = grouped_totals(records, |r| r.date)
            .into_iter()
            .map(|(date, total)| DatePoint { date, total })
            .collect();

        let mut by_channel: Vec<CategoryTotal> =
            grouped_totals(records, |r| r.submitted_via.clone())
                .into_iter()
                .map(|(category, total)| CategoryTotal { category, total })
                .collect();
        by_channel.sort_by(|a, b| a.total.cmp(&b.total));

        let mut issue_breakdown: Vec<IssueBreakdownRow> =
            grouped_totals(records, |r| (r.issue.clone(), r.sub_issue.clone()))
                .into_iter()
                .map(|((issue, sub_issue), total)| IssueBreakdownRow {
                    issue,
                    sub_issue,
                    total,
                })
                .collect();
        issue_breakdown.sort_by(|a, b| b.total.cmp(&a.total));

        Self {
            by_product,
            time_series,
            by_channel,
            issue_breakdown,
        }
    }
}
