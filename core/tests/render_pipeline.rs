use complaints_core::config::DashboardConfig;
use complaints_core::dashboard::Dashboard;
use complaints_core::error::{DashResult, DashboardError};
use complaints_core::filter::ALL_STATES;
use complaints_core::record::RawRow;
use complaints_core::source::RecordSource;
use serde_json::json;

// ── Helpers ──────────────────────────────────────────────────────────────────

struct VecSource(Vec<RawRow>);

impl RecordSource for VecSource {
    fn fetch(&self) -> DashResult<Vec<RawRow>> {
        Ok(self.0.clone())
    }
}

fn row(
    date: &str,
    state: &str,
    product: &str,
    via: &str,
    response: &str,
    timely: &str,
    count: u64,
) -> RawRow {
    let mut raw = RawRow::new();
    raw.insert("Date".into(), json!(date));
    raw.insert("state".into(), json!(state));
    raw.insert("product".into(), json!(product));
    raw.insert("issue".into(), json!("Billing"));
    raw.insert("sub_issue".into(), json!("Late fee"));
    raw.insert("submitted_via".into(), json!(via));
    raw.insert("company_response".into(), json!(response));
    raw.insert("timely".into(), json!(timely));
    raw.insert("Count of Complaints".into(), json!(count));
    raw
}

fn sample_rows() -> Vec<RawRow> {
    vec![
        row("2023-02-01", "TX", "Loan", "Web", "Closed", "Yes", 5),
        row("2023-01-15", "CA", "Card", "Phone", "In progress", "No", 2),
        row("2023-03-10", "TX", "Card", "Web", "Closed with explanation", "Yes", 1),
        row("2023-01-20", "NY", "Loan", "Referral", "Closed", "", 4),
    ]
}

fn make_dashboard(rows: Vec<RawRow>) -> Dashboard<VecSource> {
    let _ = env_logger::builder().is_test(true).try_init();
    Dashboard::new(VecSource(rows), &DashboardConfig::default())
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// One full render over the unfiltered ledger: scalars, labels, and
/// aggregates all come from the same filtered set.
#[test]
fn sentinel_render_covers_the_whole_ledger() {
    let dashboard = make_dashboard(sample_rows());

    let snapshot = dashboard.render(ALL_STATES).unwrap();
    assert_eq!(snapshot.filter_label, ALL_STATES);
    assert_eq!(snapshot.metrics.total, 12);
    assert_eq!(snapshot.metrics.closed, 3);
    assert_eq!(snapshot.metrics.in_progress, 1);
    // 2 of 3 tagged rows are "Yes" (the NY row is untagged).
    assert_eq!(snapshot.timely_label, "66.67%");

    let aggregate_total: u64 = snapshot.charts.by_product.iter().map(|c| c.total).sum();
    assert_eq!(aggregate_total, snapshot.metrics.total);
}

/// The option set is sentinel-first over the date-sorted ledger, and a
/// state render only sees that state's rows.
#[test]
fn state_render_matches_manual_restriction() {
    let dashboard = make_dashboard(sample_rows());

    // Date-sorted first-seen order: CA (Jan 15), NY (Jan 20), TX (Feb 1).
    let options = dashboard.state_options().unwrap();
    assert_eq!(options, [ALL_STATES, "CA", "NY", "TX"]);

    let snapshot = dashboard.render("TX").unwrap();
    assert_eq!(snapshot.filter_label, "TX");
    assert_eq!(snapshot.metrics.total, 6);
    assert_eq!(snapshot.metrics.closed, 2);
    assert_eq!(snapshot.metrics.in_progress, 0);
    assert_eq!(snapshot.timely_label, "100.00%");
    assert_eq!(snapshot.charts.time_series.len(), 2);
}

/// A filter change is just another render; results only depend on the
/// current fetch plus the selection, with no retained state between.
#[test]
fn renders_are_independent_across_filter_changes() {
    let dashboard = make_dashboard(sample_rows());

    let all_before = dashboard.render(ALL_STATES).unwrap();
    let _ca = dashboard.render("CA").unwrap();
    let all_after = dashboard.render(ALL_STATES).unwrap();

    assert_eq!(all_before, all_after);
}

/// An invalid selection aborts the render with a configuration error.
#[test]
fn invalid_selection_aborts_the_render() {
    let dashboard = make_dashboard(sample_rows());

    let err = dashboard.render("Texas").unwrap_err();
    assert!(matches!(err, DashboardError::InvalidFilter { .. }));
}

/// Data-shape errors abort the whole render: no snapshot is produced
/// from a ledger with a missing column or a bad date.
#[test]
fn data_shape_errors_abort_the_render() {
    let mut missing = sample_rows();
    missing[2].remove("timely");
    let err = make_dashboard(missing).render(ALL_STATES).unwrap_err();
    assert!(matches!(err, DashboardError::MissingColumn { .. }));

    let mut bad_date = sample_rows();
    bad_date[0].insert("Date".into(), json!("not a date"));
    let err = make_dashboard(bad_date).render(ALL_STATES).unwrap_err();
    assert!(matches!(err, DashboardError::MalformedDate { .. }));
}

/// A filtered set with zero timeliness-tagged rows renders "N/A".
#[test]
fn untagged_state_renders_na() {
    let dashboard = make_dashboard(vec![
        row("2023-01-20", "NY", "Loan", "Referral", "Closed", "", 4),
        row("2023-02-01", "TX", "Loan", "Web", "Closed", "Yes", 5),
    ]);

    let snapshot = dashboard.render("NY").unwrap();
    assert_eq!(snapshot.timely_label, "N/A");
    assert_eq!(snapshot.metrics.total, 4);
}

/// The snapshot is the serializable presentation boundary: it round
/// trips through JSON with every field intact.
#[test]
fn snapshot_serializes_for_the_presentation_layer() {
    let dashboard = make_dashboard(sample_rows());
    let snapshot = dashboard.render(ALL_STATES).unwrap();

    let text = serde_json::to_string(&snapshot).unwrap();
    let back: complaints_core::dashboard::RenderSnapshot =
        serde_json::from_str(&text).unwrap();
    assert_eq!(snapshot, back);
}
