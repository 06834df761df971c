//! Springpad CLI
//!
//! Runs any planner calculator from the command line.
//!
//! ```bash
//! springpad sip --monthly 5000 --rate 12 --years 15
//! springpad emi --amount 1000000 --rate 9.5 --years 20 --schedule --format csv
//! springpad composite --goals goals.csv --savings 100000 --format json
//! RUST_LOG=debug springpad --config planner.json retirement --current-age 30
//! ```

use anyhow::{Context, Result};
use clap::Parser;

use springpad_calculators::calculators::{
    allocation, composite, compounding, crorepati, education, emi, epf, goals, hlv, lumpsum, networth, ppf,
    retirement, returns, sip, spending_less, step_up, swp, wealth,
};
use springpad_calculators::PlannerConfig;

mod cli;
mod output;

use cli::{Cli, Commands};
use output::{print_result, print_rows};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let format = cli.format;

    let config = match &cli.config {
        Some(path) => PlannerConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => PlannerConfig::from_env().context("Invalid SPRINGPAD_* environment override")?,
    };
    log::debug!("Planner config: {:?}", config);

    match cli.command {
        Commands::Sip(args) => print_result(&sip::calculate(&args.input(&config)?)?, format)?,
        Commands::Lumpsum(args) => print_result(&lumpsum::calculate(&args.input(&config)?)?, format)?,
        Commands::LumpsumTarget(args) => {
            print_result(&lumpsum::calculate_target(&args.input(&config)?)?, format)?
        }
        Commands::GoalSip(args) => print_result(&sip::calculate_goal(&args.input(&config)?)?, format)?,
        Commands::Crorepati(args) => print_result(&crorepati::calculate(&args.input(&config)?)?, format)?,
        Commands::StepUp(args) => {
            let result = step_up::calculate(&args.input(&config)?)?;
            print_result(&result, format)?;
            print_rows("Year by year", &result.yearly, format)?;
        }
        Commands::Emi(args) => {
            let result = emi::calculate(&args.input()?)?;
            print_result(&result, format)?;
            if let Some(schedule) = &result.schedule {
                print_rows("Amortization schedule", schedule, format)?;
            }
        }
        Commands::Retirement(args) => {
            print_result(&retirement::calculate(&args.input(&config)?, &config)?, format)?
        }
        Commands::Wedding(args) => print_result(&goals::calculate_wedding(&args.input(&config)?)?, format)?,
        Commands::DreamHome(args) => {
            print_result(&goals::calculate_dream_home(&args.input(&config)?)?, format)?
        }
        Commands::Emergency(args) => print_result(&goals::calculate_emergency(&args.input()?)?, format)?,
        Commands::Education(args) => {
            let result = education::calculate(&args.input(&config)?, &config)?;
            print_result(&result, format)?;
            print_rows("Per child", &result.children, format)?;
        }
        Commands::Composite(args) => {
            let result = composite::calculate(&args.input(&config)?, &config)?;
            print_result(&result, format)?;
            print_rows("Per goal", &result.goals, format)?;
        }
        Commands::Wealth(args) => print_result(&wealth::calculate(&args.input()?)?, format)?,
        Commands::Hlv(args) => print_result(&hlv::calculate(&args.input()?)?, format)?,
        Commands::Allocation(args) => print_result(&allocation::calculate(&args.input()?)?, format)?,
        Commands::Swp(args) => print_result(&swp::calculate(&args.input(&config)?)?, format)?,
        Commands::Compounding(args) => {
            let result = compounding::calculate(&args.input()?)?;
            print_result(&result, format)?;
            print_rows("Year by year", &result.yearly, format)?;
        }
        Commands::Ppf(args) => {
            let result = ppf::calculate(&args.input()?, &config)?;
            print_result(&result, format)?;
            print_rows("Year by year", &result.yearly, format)?;
        }
        Commands::SipReturn(args) => print_result(&returns::calculate(&args.input()?)?, format)?,
        Commands::Epf(args) => {
            let result = epf::calculate(&args.input()?, &config)?;
            print_result(&result, format)?;
            print_rows("Year by year", &result.yearly, format)?;
        }
        Commands::Networth(args) => {
            let result = networth::calculate(&args.input()?)?;
            print_result(&result, format)?;
            print_rows("Assets by category", &result.assets_by_category, format)?;
            print_rows("Liabilities by category", &result.liabilities_by_category, format)?;
        }
        Commands::SpendingLess(args) => {
            let result = spending_less::calculate(&args.input(&config)?)?;
            print_result(&result, format)?;
            print_rows("Per expense", &result.items, format)?;
        }
    }

    Ok(())
}
