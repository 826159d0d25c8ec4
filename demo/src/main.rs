//! KOGAKU — out-of-pocket cost projection CLI
//!
//! Compares the monthly cost of a maintenance regimen with a biologic under
//! the high-cost medical expense cap, and shows when the frequent-month
//! discount starts.
//!
//! Usage:
//!   cargo run -p demo -- catalog
//!   cargo run -p demo -- project --tier ウ --biologic テゼスパイア --start 2024-01-01
//!   cargo run -p demo -- project --tier エ --biologic デュピルマブ --start 2024-04-10 \
//!       --pattern front-loaded --drug テリルジー200 --drug ブデホル（60吸入） \
//!       --puffs ブデホル（60吸入）=2 --json

use std::{path::PathBuf, sync::Arc};

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use kogaku_catalog::PricingCatalog;
use kogaku_contracts::{
    catalog::{DrugCategory, IncomeTier},
    config::{EngineConfig, MAX_EVENT_CAP},
    error::{KogakuError, KogakuResult},
    projection::{MaintenanceSelection, ProjectionReport, ProjectionRequest},
    schedule::DosingPattern,
};
use kogaku_core::{traits::DrugCatalog, CostProjector};
use kogaku_schedule::PlanScheduler;

// ── CLI definition ────────────────────────────────────────────────────────────

/// KOGAKU — high-cost medical expense projection.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Project monthly out-of-pocket cost of switching to a biologic",
    long_about = "Compares a maintenance regimen's 30-day cost with a biologic's capped\n\
                  monthly payments, including the frequent-month discount from the fourth billed month."
)]
struct Cli {
    /// Catalog TOML to use instead of the built-in price list.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List income tiers, drugs, and dosing patterns.
    Catalog,
    /// Run one cost projection.
    Project(ProjectArgs),
}

#[derive(Args)]
struct ProjectArgs {
    /// Income tier (a cap table key, e.g. ウ).
    #[arg(long)]
    tier: String,

    /// Biologic to start.
    #[arg(long)]
    biologic: String,

    /// First administration date, YYYY-MM-DD.
    #[arg(long)]
    start: String,

    /// Dosing pattern name or form label. Unknown names use the family default.
    #[arg(long, default_value = "standard")]
    pattern: String,

    /// Current maintenance drug (repeatable).
    #[arg(long = "drug")]
    drugs: Vec<String>,

    /// Puffs per use for a variable-puff inhaler, as NAME=COUNT (repeatable).
    #[arg(long = "puffs")]
    puffs: Vec<String>,

    /// Include selected add-on inhalants.
    #[arg(long)]
    addon: bool,

    /// Use the simple preset: 6 events, family default patterns only.
    #[arg(long, conflicts_with = "event_cap")]
    simple: bool,

    /// Override the number of projected administrations (1 to 10).
    #[arg(long)]
    event_cap: Option<usize>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug for the calculation trace.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = load_catalog(cli.catalog.as_deref()).and_then(|catalog| match cli.command {
        Command::Catalog => {
            print_catalog(&catalog);
            Ok(())
        }
        Command::Project(args) => run_projection(catalog, args),
    });

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn load_catalog(path: Option<&std::path::Path>) -> KogakuResult<PricingCatalog> {
    match path {
        Some(path) => PricingCatalog::from_file(path),
        None => PricingCatalog::builtin(),
    }
}

// ── Projection ────────────────────────────────────────────────────────────────

fn run_projection(catalog: PricingCatalog, args: ProjectArgs) -> KogakuResult<()> {
    let mut config = if args.simple {
        EngineConfig::simple()
    } else {
        catalog.engine_config()
    };
    if let Some(event_cap) = args.event_cap {
        config.event_cap = event_cap;
        if !config.has_valid_event_cap() {
            return Err(KogakuError::InvalidRequest {
                reason: format!("--event-cap {} is outside 1..={}", event_cap, MAX_EVENT_CAP),
            });
        }
    }
    debug!(?config, "engine configuration");

    let request = build_request(&args)?;

    let catalog = Arc::new(catalog);
    let projector = CostProjector::new(catalog.clone(), catalog, Box::new(PlanScheduler::new()), config);
    let report = projector.project(&request)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| KogakuError::RenderFailed {
            reason: e.to_string(),
        })?;
        println!("{}", json);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn build_request(args: &ProjectArgs) -> KogakuResult<ProjectionRequest> {
    let start_date = NaiveDate::parse_from_str(args.start.trim(), "%Y-%m-%d").map_err(|e| {
        KogakuError::InvalidRequest {
            reason: format!("start date '{}' is not YYYY-MM-DD: {}", args.start, e),
        }
    })?;

    let mut maintenance = args
        .drugs
        .iter()
        .fold(MaintenanceSelection::default(), |sel, name| sel.select(name.as_str()))
        .with_addon(args.addon);

    for entry in &args.puffs {
        let (name, count) = entry.split_once('=').ok_or_else(|| KogakuError::InvalidRequest {
            reason: format!("--puffs expects NAME=COUNT, got '{}'", entry),
        })?;
        // The count stays raw text; the calculator decides what it means.
        maintenance = maintenance.with_puffs(name, count);
    }

    Ok(ProjectionRequest {
        income_tier: IncomeTier::new(args.tier.as_str()),
        maintenance,
        biologic: args.biologic.clone(),
        start_date,
        pattern: args.pattern.clone(),
    })
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_catalog(catalog: &PricingCatalog) {
    println!("Income tiers (normal cap / from 4th month):");
    for tier in catalog.cap_tiers() {
        println!("  {:<8} {:>8} / {:>8}", tier.income_tier.0, tier.normal_cap, tier.frequent_cap);
    }

    for category in DrugCategory::ORDER {
        println!();
        println!("Maintenance, {}:", category.label());
        for entry in catalog.entries(category) {
            println!("  {} ({} yen)", entry.name, entry.unit_price);
        }
    }

    println!();
    println!("Biologics:");
    for drug in catalog.biologics() {
        println!("  {} ({} yen/unit)", drug.name, drug.unit_price);
        for pattern in DosingPattern::ALL.iter().filter(|p| p.family() == drug.family) {
            println!("      {:<20} {}", pattern.name(), pattern.form_label());
        }
    }
}

fn print_report(report: &ProjectionReport) {
    println!();
    println!(
        "Income tier {} · {} · pattern {}",
        report.income_tier, report.biologic, report.pattern
    );
    println!();

    println!("Current maintenance (30-day):");
    for item in &report.maintenance.line_items {
        println!("  {:<40} {:>9}", item.label, item.normalized_monthly_cost);
    }
    println!("  {:<40} {:>9}", "total", report.maintenance.total);
    println!();

    println!("Biologic by month:");
    println!("  {:<8} {:>4} {:>10} {:>8} {:>8}", "month", "#", "raw", "cap", "paid");
    for m in &report.monthly {
        println!(
            "  {:<8} {:>4} {:>10} {:>8} {:>8}{}",
            m.month.to_string(),
            m.sequence_index,
            m.raw_cost,
            m.cap_applied,
            m.paid_cost,
            if m.is_frequent_tier { "  (frequent)" } else { "" }
        );
    }
    println!();

    println!("First month vs. maintenance: {:+}", report.diff);
    match &report.first_frequent {
        Some(f) => println!(
            "Frequent-month cap from {}: pay {} (cap {})",
            f.month, f.paid_cost, f.cap_applied
        ),
        None => println!("Frequent-month cap not reached within the projected schedule"),
    }
    println!();
}
