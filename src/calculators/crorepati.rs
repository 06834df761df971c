//! How long a monthly SIP takes to reach a target corpus (one crore by default)

use serde::{Deserialize, Serialize};

use super::{line, Summary, SummaryLine};
use crate::error::{ensure_positive, CalcResult};
use crate::format::{format_inr, CRORE};
use crate::tvm::{annuity_periods_to_target, AnnualRate, AnnuityTiming};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrorepatiInput {
    pub monthly_investment: f64,
    pub expected_return: f64,
    pub target_amount: f64,
}

impl Default for CrorepatiInput {
    fn default() -> Self {
        Self {
            monthly_investment: 5_000.0,
            expected_return: 12.0,
            target_amount: CRORE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrorepatiResult {
    /// Unrounded duration in years
    pub years: f64,
    /// Duration rounded up to whole months
    pub months: u32,
    pub total_investment: f64,
    pub total_returns: f64,
}

pub fn calculate(input: &CrorepatiInput) -> CalcResult<CrorepatiResult> {
    ensure_positive("monthly_investment", input.monthly_investment)?;
    ensure_positive("target_amount", input.target_amount)?;
    let rate = AnnualRate::from_percent(input.expected_return)?;

    // Closed form uses end-of-month contributions
    let fractional_months = annuity_periods_to_target(
        input.monthly_investment,
        rate.monthly(),
        input.target_amount,
        AnnuityTiming::Ordinary,
    )?;
    let total_investment = input.monthly_investment * fractional_months;

    log::debug!(
        "{} per month reaches {} in {:.2} months",
        input.monthly_investment,
        input.target_amount,
        fractional_months
    );

    Ok(CrorepatiResult {
        years: fractional_months / 12.0,
        months: fractional_months.ceil() as u32,
        total_investment,
        total_returns: input.target_amount - total_investment,
    })
}

impl Summary for CrorepatiResult {
    fn summary(&self) -> Vec<SummaryLine> {
        vec![
            line("Time to target", format!("{:.1} years ({} months)", self.years, self.months)),
            line("Total investment", format_inr(self.total_investment)),
            line("Estimated returns", format_inr(self.total_returns)),
        ]
    }
}
