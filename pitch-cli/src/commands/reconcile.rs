//! Status reconciliation command

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use pitch_core::{JsonFileStore, ReconcileReport, StatusReconciler};
use tracing::debug;

/// Reconcile arguments
#[derive(Args, Debug)]
pub struct ReconcileArgs {
    /// Path to the JSON session store
    #[arg(long)]
    pub store: PathBuf,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Run the reconcile command
pub fn run(args: ReconcileArgs) -> Result<()> {
    debug!(store = %args.store.display(), dry_run = args.dry_run, "Opening session store");
    let store = JsonFileStore::open(&args.store)
        .with_context(|| format!("Failed to open store at {}", args.store.display()))?;
    let reconciler = StatusReconciler::new(Arc::new(store));

    let report = if args.dry_run {
        reconciler.preview()?
    } else {
        reconciler.run()?
    };

    print_report(&report, args.dry_run);
    Ok(())
}

fn print_report(report: &ReconcileReport, dry_run: bool) {
    if dry_run {
        println!("Dry run: no sessions were written");
    }
    println!("Inspected: {}", report.inspected);
    println!("Updated:   {}", report.updated);

    if report.by_status.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("AI Evaluation Status").fg(Color::Cyan),
        Cell::new("Sessions").fg(Color::Cyan),
    ]);
    for (status, count) in &report.by_status {
        table.add_row(vec![Cell::new(status), Cell::new(count)]);
    }
    println!("{table}");
}
