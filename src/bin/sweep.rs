//! Evaluate a grid of SIP scenarios in parallel and write one CSV row per point
//!
//! ```bash
//! sweep --amounts 5000,10000,25000 --returns 8,10,12,14 --years 5,10,15,20,25 --output sweep.csv
//! ```

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;

use springpad_calculators::{PlannerConfig, ScenarioRunner, SipGrid, SweepRow};

#[derive(Parser)]
#[command(name = "sweep")]
#[command(author, version, about = "Parallel SIP scenario sweep", long_about = None)]
struct Args {
    /// Monthly SIP amounts
    #[arg(short, long, value_delimiter = ',', default_values_t = [5_000.0, 10_000.0, 25_000.0])]
    amounts: Vec<f64>,

    /// Expected annual returns, percent; defaults to the configured return
    #[arg(short, long, value_delimiter = ',')]
    returns: Vec<f64>,

    /// Horizons in years
    #[arg(short, long, value_delimiter = ',', default_values_t = [5, 10, 15, 20, 25])]
    years: Vec<u32>,

    /// Write CSV here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Planner defaults as JSON
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn write_rows<W: Write>(writer: W, rows: &[SweepRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => PlannerConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => PlannerConfig::from_env().context("Invalid SPRINGPAD_* environment override")?,
    };

    let returns = if args.returns.is_empty() {
        vec![config.expected_return]
    } else {
        args.returns
    };
    let grid = SipGrid {
        monthly_investments: args.amounts,
        returns,
        years: args.years,
    };
    if grid.is_empty() {
        bail!("Sweep grid is empty");
    }

    let start = Instant::now();
    let runner = ScenarioRunner::new(config);
    let rows = runner.sip_grid(&grid).context("Sweep scenario failed")?;
    log::info!("Evaluated {} scenarios in {:?}", rows.len(), start.elapsed());

    match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
            write_rows(file, &rows)?;
            eprintln!("Wrote {} rows to {}", rows.len(), path.display());
        }
        None => write_rows(io::stdout().lock(), &rows)?,
    }

    if let Some(best) = rows.iter().max_by(|a, b| a.multiplier.total_cmp(&b.multiplier)) {
        log::info!(
            "Best multiplier {:.2}x: {} a month at {}% for {} years",
            best.multiplier,
            best.monthly_investment,
            best.expected_return,
            best.years
        );
    }

    Ok(())
}
