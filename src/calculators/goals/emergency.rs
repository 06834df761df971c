//! Emergency fund sized as months of expenses

use serde::{Deserialize, Serialize};

use super::SavingsGoalPlan;
use crate::calculators::{line, Summary, SummaryLine};
use crate::error::{ensure_amount, CalcResult};
use crate::format::{format_inr, format_percent};
use crate::tvm::AnnualRate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmergencyFundInput {
    pub monthly_expenses: f64,
    /// Months of expenses the fund should cover
    pub coverage_months: u32,
    /// Years allowed to build the fund
    pub years_to_save: u32,
    pub expected_return: f64,
    pub current_savings: f64,
}

impl Default for EmergencyFundInput {
    fn default() -> Self {
        Self {
            monthly_expenses: 50_000.0,
            coverage_months: 6,
            years_to_save: 2,
            expected_return: 8.0,
            current_savings: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyFundResult {
    pub fund_target: f64,
    /// Projected fund as a percentage of the target
    pub adequacy_ratio: f64,
    pub plan: SavingsGoalPlan,
}

pub fn calculate(input: &EmergencyFundInput) -> CalcResult<EmergencyFundResult> {
    ensure_amount("monthly_expenses", input.monthly_expenses)?;
    let rate = AnnualRate::from_percent(input.expected_return)?;

    let fund_target = input.monthly_expenses * input.coverage_months as f64;
    let plan = SavingsGoalPlan::solve(fund_target, input.current_savings, rate, input.years_to_save)?;

    let adequacy_ratio = if fund_target > 0.0 {
        (plan.future_value_of_savings + plan.shortfall) / fund_target * 100.0
    } else {
        100.0
    };

    Ok(EmergencyFundResult {
        fund_target,
        adequacy_ratio,
        plan,
    })
}

impl Summary for EmergencyFundResult {
    fn summary(&self) -> Vec<SummaryLine> {
        let mut lines = vec![
            line("Emergency fund target", format_inr(self.fund_target)),
            line("Adequacy", format_percent(self.adequacy_ratio, 1)),
        ];
        lines.extend(self.plan.summary_lines());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_fund() {
        let result = calculate(&EmergencyFundInput::default()).unwrap();
        assert_eq!(result.fund_target, 300_000.0);
        assert_relative_eq!(result.adequacy_ratio, 100.0);
        assert!(result.plan.monthly_investment > 0.0);
    }

    #[test]
    fn test_overfunded_adequacy() {
        let result = calculate(&EmergencyFundInput {
            current_savings: 400_000.0,
            ..Default::default()
        })
        .unwrap();
        assert!(result.plan.is_covered_by_savings());
        assert!(result.adequacy_ratio > 100.0);
        assert_relative_eq!(
            result.adequacy_ratio,
            result.plan.future_value_of_savings / 300_000.0 * 100.0,
            max_relative = 1e-12
        );
    }
}
