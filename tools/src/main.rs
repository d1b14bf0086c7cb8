//! dash-runner: headless runner for the sales analytics pipeline.
//!
//! Usage:
//!   dash-runner --seed 12345
//!   dash-runner --db sales.db
//!   dash-runner --seed 42 --export-db sales.db
//!   dash-runner --periods 2024-01,2024-02 --cities Lisboa --sellers Maria --json

use anyhow::Result;
use salesdash_core::{
    filter::FilterSpec,
    pipeline::{Dashboard, DashboardSummary, QueryOutcome},
    source::{DataSource, MockSource, SqliteSource},
    store::SalesStore,
};
use std::collections::BTreeSet;
use std::env;

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    source: String,
    #[serde(flatten)]
    result: &'a QueryOutcome,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let db = arg_value(&args, "--db");
    let export_db = arg_value(&args, "--export-db");
    let json = args.iter().any(|a| a == "--json");

    let source: Box<dyn DataSource> = match db {
        Some(path) => Box::new(SqliteSource::new(path)),
        None => Box::new(MockSource::new(seed)),
    };

    if let Some(path) = export_db {
        let dataset = source.load()?;
        let mut store = SalesStore::open(path)?;
        store.init_schema()?;
        store.insert_dataset(&dataset)?;
        log::info!("exported dataset to {path}");
    }

    let dashboard = Dashboard::load(source.as_ref())?;

    // Default selection is the full universe; each flag narrows one dimension.
    let mut spec = dashboard.available_filters();
    if let Some(periods) = arg_value(&args, "--periods") {
        spec.periods = parse_set(periods);
    }
    if let Some(cities) = arg_value(&args, "--cities") {
        spec.cities = parse_set(cities);
    }
    if let Some(sellers) = arg_value(&args, "--sellers") {
        spec.sellers = parse_set(sellers);
    }

    let outcome = dashboard.query(&spec);
    if json {
        let report = JsonReport {
            source: source.describe(),
            result: &outcome,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match outcome {
        QueryOutcome::NoMatchingData => {
            println!("No data matches the selected filters. Adjust the selection.");
        }
        QueryOutcome::Summary(summary) => print_summary(&spec, &summary),
    }

    Ok(())
}

fn print_summary(spec: &FilterSpec, summary: &DashboardSummary) {
    println!("=== SALES DASHBOARD ===");
    println!("  generated:      {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!(
        "  filters:        {} periods, {} cities, {} sellers",
        spec.periods.len(),
        spec.cities.len(),
        spec.sellers.len()
    );
    println!("  total revenue:  {:.2}", summary.totals.revenue);
    println!("  total profit:   {:.2}", summary.totals.profit);
    println!("  units sold:     {}", summary.totals.units);

    println!();
    println!("=== MONTHLY REVENUE ===");
    for row in &summary.monthly_revenue {
        println!("  {} | {:>12.2}", row.label, row.revenue);
    }

    println!();
    println!("=== TOP 5 PRODUCTS BY REVENUE ===");
    for row in &summary.top_products_by_revenue {
        println!("  {:<24} | {:>12.2}", row.label, row.revenue);
    }

    println!();
    println!("=== REVENUE SHARE BY SELLER (TOP 5) ===");
    let seller_total: f64 = summary
        .top_sellers_by_revenue
        .iter()
        .map(|r| r.revenue)
        .sum();
    for row in &summary.top_sellers_by_revenue {
        let share = if seller_total > 0.0 {
            row.revenue / seller_total * 100.0
        } else {
            0.0
        };
        println!("  {:<24} | {:>12.2} | {share:>5.1}%", row.label, row.revenue);
    }

    println!();
    println!("=== TOP 5 CLIENTS BY UNITS PURCHASED ===");
    for row in &summary.top_clients_by_quantity {
        println!("  {:<24} | {:>6}", row.label, row.quantity);
    }

    println!();
    println!("=== PURCHASES BY CITY ===");
    for row in &summary.purchases_by_city {
        println!("  {:<24} | {:>6}", row.label, row.count);
    }
}

fn parse_set(csv: &str) -> BTreeSet<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    arg_value(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
