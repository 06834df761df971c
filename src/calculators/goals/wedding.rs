//! Wedding fund: inflate today's cost to the wedding date and save toward it

use serde::{Deserialize, Serialize};

use super::SavingsGoalPlan;
use crate::calculators::{line, years_between, Summary, SummaryLine};
use crate::error::{ensure_amount, CalcResult};
use crate::format::format_inr;
use crate::tvm::{inflate, AnnualRate};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeddingInput {
    /// Wedding cost in today's rupees
    pub wedding_cost: f64,
    pub child_age: u32,
    pub wedding_age: u32,
    pub expected_return: f64,
    pub current_savings: f64,
    pub inflation_rate: f64,
}

impl Default for WeddingInput {
    fn default() -> Self {
        Self {
            wedding_cost: 2_000_000.0,
            child_age: 5,
            wedding_age: 25,
            expected_return: 12.0,
            current_savings: 0.0,
            inflation_rate: 6.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeddingResult {
    pub time_horizon: u32,
    pub future_wedding_cost: f64,
    pub plan: SavingsGoalPlan,
}

pub fn calculate(input: &WeddingInput) -> CalcResult<WeddingResult> {
    let years = years_between(input.child_age, input.wedding_age)?;
    ensure_amount("wedding_cost", input.wedding_cost)?;
    let inflation = AnnualRate::from_percent(input.inflation_rate)?;
    let rate = AnnualRate::from_percent(input.expected_return)?;

    let future_wedding_cost = inflate(input.wedding_cost, inflation, years);
    let plan = SavingsGoalPlan::solve(future_wedding_cost, input.current_savings, rate, years)?;

    Ok(WeddingResult {
        time_horizon: years,
        future_wedding_cost,
        plan,
    })
}

impl Summary for WeddingResult {
    fn summary(&self) -> Vec<SummaryLine> {
        let mut lines = vec![
            line("Years to wedding", self.time_horizon.to_string()),
            line("Future wedding cost", format_inr(self.future_wedding_cost)),
        ];
        lines.extend(self.plan.summary_lines());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_wedding() {
        let result = calculate(&WeddingInput::default()).unwrap();
        assert_eq!(result.time_horizon, 20);
        assert_relative_eq!(result.future_wedding_cost, 6_414_271.0, epsilon = 1.0);
        assert_relative_eq!(result.plan.shortfall, result.future_wedding_cost);
        assert!(result.plan.monthly_investment > 0.0);
    }

    #[test]
    fn test_wedding_age_must_exceed_child_age() {
        let input = WeddingInput {
            child_age: 25,
            wedding_age: 25,
            ..Default::default()
        };
        assert!(matches!(calculate(&input), Err(CalcError::InvalidHorizon { .. })));
    }
}
