//! # Alerts Subcommand
//!
//! Loads a fleet registry, evaluates the expiry feed, and prints it
//! most urgent first.

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;

use fleetdoc_alert::{evaluate, AlertWindows};

use crate::registry;

/// Arguments for the alerts subcommand.
#[derive(Args, Debug)]
pub struct AlertsArgs {
    /// Path to the fleet registry file (YAML or JSON).
    #[arg(long)]
    pub fleet: PathBuf,

    /// Evaluation date, `YYYY-MM-DD`. Defaults to today.
    #[arg(long)]
    pub today: Option<String>,

    /// Report documents expiring within this many days.
    #[arg(long, default_value_t = 15)]
    pub warning_days: i64,

    /// Keep expired documents in the feed this many days past expiry.
    #[arg(long, default_value_t = 7)]
    pub grace_days: i64,
}

/// Evaluate and print the alert feed.
pub fn run(args: AlertsArgs) -> anyhow::Result<()> {
    let registry = registry::load_registry(&args.fleet)?;
    let base_dir = args.fleet.parent().unwrap_or(std::path::Path::new("."));
    let store = registry::build_store(&registry, base_dir)?;

    let today = match &args.today {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("parsing --today {s:?}"))?,
        None => chrono::Local::now().date_naive(),
    };
    let windows = AlertWindows {
        warning_days: args.warning_days,
        grace_days: args.grace_days,
    };

    let feed = evaluate(store.holders(), today, windows);
    if feed.is_empty() {
        println!("no documents inside the alert window");
        return Ok(());
    }
    for entry in &feed {
        let urgency = if entry.days_left < 0 {
            format!("EXPIRED {}d ago", -entry.days_left)
        } else if entry.days_left == 0 {
            "EXPIRES today".to_string()
        } else {
            format!("{}d left", entry.days_left)
        };
        println!(
            "{urgency:<16} {:<8} {:<20} {:<40} {}",
            entry.holder_kind, entry.holder_name, entry.document_label, entry.expiry_date,
        );
    }
    Ok(())
}
