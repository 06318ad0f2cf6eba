//! dashboard-runner: headless render of the complaints dashboard.
//!
//! Usage:
//!   dashboard-runner --ledger rows.json
//!   dashboard-runner --ledger rows.json --state TX --json

use anyhow::{Context, Result};
use complaints_core::{
    config::DashboardConfig,
    dashboard::Dashboard,
    error::DashResult,
    filter::ALL_STATES,
    record::RawRow,
    source::RecordSource,
};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Reads the ledger fixture: a JSON array of row objects, one per
/// source row, keyed by the exact column names.
struct JsonFileSource {
    path: PathBuf,
}

impl RecordSource for JsonFileSource {
    fn fetch(&self) -> DashResult<Vec<RawRow>> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading ledger {}", self.path.display()))?;
        let rows: Vec<RawRow> = serde_json::from_str(&text)?;
        Ok(rows)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ledger = flag_value(&args, "--ledger").context("--ledger <rows.json> is required")?;
    let state = flag_value(&args, "--state").unwrap_or_else(|| ALL_STATES.to_string());
    let as_json = args.iter().any(|a| a == "--json");
    let config = match flag_value(&args, "--config") {
        Some(path) => DashboardConfig::from_path(&PathBuf::from(path))?,
        None => DashboardConfig::default(),
    };

    let source = JsonFileSource {
        path: PathBuf::from(ledger),
    };
    let dashboard = Dashboard::new(source, &config);

    let states = dashboard.state_options()?;
    log::info!("ledger loaded, {} filter choices", states.len());

    let snapshot = dashboard.render(&state)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("=== COMPLAINTS DASHBOARD ===");
    println!("  state filter:  {}", snapshot.filter_label);
    println!("  total:         {}", snapshot.metrics.total);
    println!("  closed:        {}", snapshot.metrics.closed);
    println!("  timely:        {}", snapshot.timely_label);
    println!("  in progress:   {}", snapshot.metrics.in_progress);

    println!();
    println!("=== PRODUCTS BY COMPLAINTS ===");
    for row in snapshot.charts.by_product.iter().take(5) {
        println!("  {:<40} {}", row.category, row.total);
    }

    println!();
    println!("=== TOP ISSUES ===");
    for row in snapshot.charts.issue_breakdown.iter().take(5) {
        println!("  {} / {} | {}", row.issue, row.sub_issue, row.total);
    }

    Ok(())
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}
