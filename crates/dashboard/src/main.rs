use std::path::PathBuf;

use anyhow::Context;

use stockshift_dashboard::{DashboardConfig, Session};

fn main() -> anyhow::Result<()> {
    stockshift_observability::init();

    let config = DashboardConfig::from_env();
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or(config.snapshot_path)
        .context("no snapshot given: pass a path or set STOCKSHIFT_SNAPSHOT")?;

    let session = Session::load(&path, config.recommender)?;
    let report = session.report();

    tracing::info!(
        suggestions = report.suggestions.len(),
        critical = report.summary.critical_items,
        "dashboard report ready"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
