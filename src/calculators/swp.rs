//! Systematic withdrawal plan: monthly payouts drawn from an invested corpus

use serde::{Deserialize, Serialize};

use super::{horizon_months, line, Summary, SummaryLine};
use crate::error::{ensure_amount, ensure_positive, CalcResult};
use crate::format::format_inr;
use crate::tvm::{loan_payment, AnnualRate};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwpInput {
    pub initial_investment: f64,
    pub monthly_withdrawal: f64,
    pub expected_return: f64,
    pub years: u32,
}

impl Default for SwpInput {
    fn default() -> Self {
        Self {
            initial_investment: 1_000_000.0,
            monthly_withdrawal: 10_000.0,
            expected_return: 12.0,
            years: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwpResult {
    pub total_withdrawn: f64,
    pub remaining_balance: f64,
    /// Last month the plan ran, either the horizon or the month the corpus ran dry
    pub months_sustained: u32,
    /// Corpus lasted the full horizon with money left over
    pub sustainable: bool,
    /// Largest level withdrawal that exhausts the corpus exactly at the horizon
    pub max_sustainable_withdrawal: f64,
}

pub fn calculate(input: &SwpInput) -> CalcResult<SwpResult> {
    ensure_positive("initial_investment", input.initial_investment)?;
    ensure_amount("monthly_withdrawal", input.monthly_withdrawal)?;
    let rate = AnnualRate::from_percent(input.expected_return)?;
    let months = horizon_months(input.years)?;
    let monthly_rate = rate.monthly();

    let mut balance = input.initial_investment;
    let mut total_withdrawn = 0.0;
    let mut months_sustained = 0;

    // Returns accrue first, then the month's withdrawal comes out
    for month in 1..=months {
        balance *= 1.0 + monthly_rate;
        months_sustained = month;

        if balance >= input.monthly_withdrawal {
            balance -= input.monthly_withdrawal;
            total_withdrawn += input.monthly_withdrawal;
        } else {
            total_withdrawn += balance;
            balance = 0.0;
            log::debug!("Corpus exhausted in month {}", month);
            break;
        }
    }

    // Drawing a corpus down to zero is a loan in reverse
    let max_sustainable_withdrawal = loan_payment(input.initial_investment, monthly_rate, months)?;

    Ok(SwpResult {
        total_withdrawn,
        remaining_balance: balance,
        months_sustained,
        sustainable: balance > 0.0 && months_sustained == months,
        max_sustainable_withdrawal,
    })
}

impl Summary for SwpResult {
    fn summary(&self) -> Vec<SummaryLine> {
        let status = if self.sustainable {
            "Sustainable".to_string()
        } else {
            format!("Runs out after {} years", self.months_sustained / 12)
        };
        vec![
            line("Total withdrawn", format_inr(self.total_withdrawn)),
            line("Remaining balance", format_inr(self.remaining_balance)),
            line("Status", status),
            line("Max sustainable withdrawal", format_inr(self.max_sustainable_withdrawal)),
        ]
    }
}
