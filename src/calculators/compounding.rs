//! Compound interest with monthly top-ups under monthly, quarterly or annual compounding

use serde::{Deserialize, Serialize};

use super::{ensure_years, line, Summary, SummaryLine};
use crate::error::{ensure_amount, CalcResult};
use crate::format::{format_inr, format_percent};
use crate::tvm::{AnnualRate, Frequency};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompoundingInput {
    pub principal: f64,
    pub monthly_contribution: f64,
    pub annual_rate: f64,
    pub years: u32,
    pub frequency: Frequency,
}

impl Default for CompoundingInput {
    fn default() -> Self {
        Self {
            principal: 100_000.0,
            monthly_contribution: 5_000.0,
            annual_rate: 12.0,
            years: 10,
            frequency: Frequency::Monthly,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundingYear {
    pub year: u32,
    pub starting_amount: f64,
    pub contribution: f64,
    pub interest: f64,
    pub ending_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundingResult {
    pub final_amount: f64,
    pub total_contributions: f64,
    pub total_interest: f64,
    /// Effective annual yield, whole percent
    pub effective_rate: f64,
    pub yearly: Vec<CompoundingYear>,
}

pub fn calculate(input: &CompoundingInput) -> CalcResult<CompoundingResult> {
    ensure_amount("principal", input.principal)?;
    ensure_amount("monthly_contribution", input.monthly_contribution)?;
    let rate = AnnualRate::from_percent(input.annual_rate)?;
    let years = ensure_years("years", input.years)?;

    let periodic_rate = rate.periodic(input.frequency);
    // Months between compounding events
    let months_per_period = 12 / input.frequency.periods_per_year();

    let mut amount = input.principal;
    let mut total_contributions = input.principal;
    let mut yearly = Vec::with_capacity(years as usize);

    for year in 1..=years {
        let starting_amount = amount;
        let mut contribution = 0.0;

        for _ in 0..input.frequency.periods_per_year() {
            match input.frequency {
                // Interest first, then that month's top-up
                Frequency::Monthly => {
                    amount *= 1.0 + periodic_rate;
                    amount += input.monthly_contribution;
                    contribution += input.monthly_contribution;
                }
                // Top-ups accumulate through the period, then the period compounds
                Frequency::Quarterly | Frequency::Annual => {
                    for _ in 0..months_per_period {
                        amount += input.monthly_contribution;
                        contribution += input.monthly_contribution;
                    }
                    amount *= 1.0 + periodic_rate;
                }
            }
        }

        total_contributions += contribution;
        yearly.push(CompoundingYear {
            year,
            starting_amount,
            contribution,
            interest: amount - starting_amount - contribution,
            ending_amount: amount,
        });
    }

    Ok(CompoundingResult {
        final_amount: amount,
        total_contributions,
        total_interest: amount - total_contributions,
        effective_rate: rate.effective_annual(input.frequency) * 100.0,
        yearly,
    })
}

impl Summary for CompoundingResult {
    fn summary(&self) -> Vec<SummaryLine> {
        vec![
            line("Final amount", format_inr(self.final_amount)),
            line("Total contributions", format_inr(self.total_contributions)),
            line("Total interest", format_inr(self.total_interest)),
            line("Effective annual rate", format_percent(self.effective_rate, 2)),
        ]
    }
}
