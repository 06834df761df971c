//! One-time investment compounded annually, forward and backward

use serde::{Deserialize, Serialize};

use super::{ensure_years, line, Summary, SummaryLine};
use crate::error::{ensure_amount, CalcResult};
use crate::format::format_inr;
use crate::tvm::{compound_growth, present_value, AnnualRate};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LumpsumInput {
    pub investment_amount: f64,
    pub expected_return: f64,
    pub years: u32,
}

impl Default for LumpsumInput {
    fn default() -> Self {
        Self {
            investment_amount: 100_000.0,
            expected_return: 12.0,
            years: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LumpsumResult {
    pub future_value: f64,
    pub total_investment: f64,
    pub total_returns: f64,
}

pub fn calculate(input: &LumpsumInput) -> CalcResult<LumpsumResult> {
    ensure_amount("investment_amount", input.investment_amount)?;
    let rate = AnnualRate::from_percent(input.expected_return)?;
    let years = ensure_years("years", input.years)?;

    let future_value = compound_growth(input.investment_amount, rate.decimal(), years);
    Ok(LumpsumResult {
        future_value,
        total_investment: input.investment_amount,
        total_returns: future_value - input.investment_amount,
    })
}

impl Summary for LumpsumResult {
    fn summary(&self) -> Vec<SummaryLine> {
        vec![
            line("Invested amount", format_inr(self.total_investment)),
            line("Estimated returns", format_inr(self.total_returns)),
            line("Total value", format_inr(self.future_value)),
        ]
    }
}

/// Lump sum to invest today so it grows into a target
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LumpsumTargetInput {
    pub target_amount: f64,
    pub years: u32,
    pub expected_return: f64,
}

impl Default for LumpsumTargetInput {
    fn default() -> Self {
        Self {
            target_amount: 1_000_000.0,
            years: 10,
            expected_return: 12.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LumpsumTargetResult {
    pub required_investment: f64,
    pub target_amount: f64,
    pub total_returns: f64,
}

pub fn calculate_target(input: &LumpsumTargetInput) -> CalcResult<LumpsumTargetResult> {
    ensure_amount("target_amount", input.target_amount)?;
    let rate = AnnualRate::from_percent(input.expected_return)?;
    let years = ensure_years("years", input.years)?;

    let required_investment = present_value(input.target_amount, rate.decimal(), years);
    Ok(LumpsumTargetResult {
        required_investment,
        target_amount: input.target_amount,
        total_returns: input.target_amount - required_investment,
    })
}

impl Summary for LumpsumTargetResult {
    fn summary(&self) -> Vec<SummaryLine> {
        vec![
            line("Target amount", format_inr(self.target_amount)),
            line("Invest today", format_inr(self.required_investment)),
            line("Estimated returns", format_inr(self.total_returns)),
        ]
    }
}
