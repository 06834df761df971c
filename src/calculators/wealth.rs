//! Wealth creation: project a lump sum plus SIP, and the SIP a target needs

use serde::{Deserialize, Serialize};

use super::{horizon_months, line, Summary, SummaryLine};
use crate::error::{ensure_amount, CalcResult};
use crate::format::{format_inr, format_inr_compact};
use crate::tvm::{annuity_future_value, compound_growth, contribution_for_gap, AnnualRate, AnnuityTiming};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WealthInput {
    pub target_wealth: f64,
    pub years: u32,
    pub expected_return: f64,
    /// Lump sum already invested
    pub current_investment: f64,
    pub monthly_investment: f64,
}

impl Default for WealthInput {
    fn default() -> Self {
        Self {
            target_wealth: 10_000_000.0,
            years: 15,
            expected_return: 14.0,
            current_investment: 0.0,
            monthly_investment: 10_000.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WealthResult {
    pub future_value: f64,
    pub total_investment: f64,
    pub total_returns: f64,
    /// Future value per rupee invested; zero when nothing is invested
    pub wealth_multiplier: f64,
    pub required_monthly_for_target: f64,
    pub meets_target: bool,
}

pub fn calculate(input: &WealthInput) -> CalcResult<WealthResult> {
    ensure_amount("target_wealth", input.target_wealth)?;
    ensure_amount("current_investment", input.current_investment)?;
    ensure_amount("monthly_investment", input.monthly_investment)?;
    let rate = AnnualRate::from_percent(input.expected_return)?;
    let months = horizon_months(input.years)?;
    let monthly_rate = rate.monthly();

    let lumpsum_value = compound_growth(input.current_investment, monthly_rate, months);
    let sip_value = annuity_future_value(input.monthly_investment, monthly_rate, months, AnnuityTiming::Ordinary);
    let future_value = lumpsum_value + sip_value;
    let total_investment = input.current_investment + input.monthly_investment * months as f64;

    let wealth_multiplier = if total_investment > 0.0 {
        future_value / total_investment
    } else {
        0.0
    };

    let required_monthly_for_target = contribution_for_gap(
        input.target_wealth - lumpsum_value,
        monthly_rate,
        months,
        AnnuityTiming::Ordinary,
    )?;

    Ok(WealthResult {
        future_value,
        total_investment,
        total_returns: future_value - total_investment,
        wealth_multiplier,
        required_monthly_for_target,
        meets_target: future_value >= input.target_wealth,
    })
}

impl Summary for WealthResult {
    fn summary(&self) -> Vec<SummaryLine> {
        vec![
            line("Projected wealth", format_inr_compact(self.future_value)),
            line("Total investment", format_inr(self.total_investment)),
            line("Estimated returns", format_inr(self.total_returns)),
            line("Wealth multiplier", format!("{:.2}x", self.wealth_multiplier)),
            line("Monthly SIP for target", format_inr(self.required_monthly_for_target)),
        ]
    }
}
