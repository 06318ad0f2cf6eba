//! complaints-core — the data pipeline behind the consumer complaints
//! dashboard.
//!
//! The pipeline runs one direction, synchronously:
//!   1. A `RecordSource` supplies raw rows; `CachedSource` memoizes the
//!      fetch for a fixed validity window.
//!   2. The normalizer parses dates, derives calendar fields, and sorts
//!      the ledger chronologically.
//!   3. One state filter restricts the ledger (or passes it through).
//!   4. The metric and aggregation engines derive the four headline
//!      scalars and the four chart-ready projections.
//!
//! Charting, widgets, and spreadsheet connectivity live outside this
//! crate; `dashboard::RenderSnapshot` is the entire presentation
//! boundary.

pub mod aggregate;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod normalize;
pub mod record;
pub mod source;
pub mod types;
