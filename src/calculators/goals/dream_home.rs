//! Dream home down payment saved over a chosen number of years

use serde::{Deserialize, Serialize};

use super::SavingsGoalPlan;
use crate::calculators::{line, Summary, SummaryLine};
use crate::error::{ensure_amount, ensure_percent, CalcResult};
use crate::format::format_inr;
use crate::tvm::AnnualRate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DreamHomeInput {
    pub home_price: f64,
    /// Down payment as a percentage of the price
    pub down_payment_percent: f64,
    pub years: u32,
    pub expected_return: f64,
    pub current_savings: f64,
}

impl Default for DreamHomeInput {
    fn default() -> Self {
        Self {
            home_price: 5_000_000.0,
            down_payment_percent: 20.0,
            years: 5,
            expected_return: 12.0,
            current_savings: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DreamHomeResult {
    pub down_payment_amount: f64,
    pub plan: SavingsGoalPlan,
}

pub fn calculate(input: &DreamHomeInput) -> CalcResult<DreamHomeResult> {
    ensure_amount("home_price", input.home_price)?;
    ensure_percent("down_payment_percent", input.down_payment_percent)?;
    let rate = AnnualRate::from_percent(input.expected_return)?;

    let down_payment_amount = input.home_price * input.down_payment_percent / 100.0;
    let plan = SavingsGoalPlan::solve(down_payment_amount, input.current_savings, rate, input.years)?;

    Ok(DreamHomeResult {
        down_payment_amount,
        plan,
    })
}

impl Summary for DreamHomeResult {
    fn summary(&self) -> Vec<SummaryLine> {
        let mut lines = vec![line("Down payment needed", format_inr(self.down_payment_amount))];
        lines.extend(self.plan.summary_lines());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_home() {
        let result = calculate(&DreamHomeInput::default()).unwrap();
        assert_eq!(result.down_payment_amount, 1_000_000.0);

        let factor = (1.01_f64.powi(60) - 1.0) / 0.01;
        assert_relative_eq!(result.plan.monthly_investment, 1_000_000.0 / factor, max_relative = 1e-12);
    }

    #[test]
    fn test_down_payment_over_100_rejected() {
        let input = DreamHomeInput {
            down_payment_percent: 120.0,
            ..Default::default()
        };
        assert!(calculate(&input).is_err());
    }
}
