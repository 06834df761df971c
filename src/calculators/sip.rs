//! Monthly SIP: future value of a fixed installment, and the installment a target needs

use serde::{Deserialize, Serialize};

use super::{horizon_months, line, Summary, SummaryLine};
use crate::error::{ensure_amount, CalcResult};
use crate::format::format_inr;
use crate::tvm::{annuity_future_value, annuity_payment_for_target, AnnualRate, AnnuityTiming};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SipInput {
    pub monthly_investment: f64,
    /// Expected annual return, whole percent
    pub expected_return: f64,
    pub years: u32,
}

impl Default for SipInput {
    fn default() -> Self {
        Self {
            monthly_investment: 5_000.0,
            expected_return: 12.0,
            years: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipResult {
    pub future_value: f64,
    pub total_investment: f64,
    pub total_returns: f64,
}

pub fn calculate(input: &SipInput) -> CalcResult<SipResult> {
    ensure_amount("monthly_investment", input.monthly_investment)?;
    let rate = AnnualRate::from_percent(input.expected_return)?;
    let months = horizon_months(input.years)?;

    let future_value = annuity_future_value(input.monthly_investment, rate.monthly(), months, AnnuityTiming::Due);
    let total_investment = input.monthly_investment * months as f64;

    log::debug!(
        "SIP {} x {} months at {}% -> {:.2}",
        input.monthly_investment,
        months,
        rate.percent(),
        future_value
    );

    Ok(SipResult {
        future_value,
        total_investment,
        total_returns: future_value - total_investment,
    })
}

impl Summary for SipResult {
    fn summary(&self) -> Vec<SummaryLine> {
        vec![
            line("Invested amount", format_inr(self.total_investment)),
            line("Estimated returns", format_inr(self.total_returns)),
            line("Total value", format_inr(self.future_value)),
        ]
    }
}

/// Monthly SIP needed to reach a target corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalSipInput {
    pub target_amount: f64,
    pub years: u32,
    pub expected_return: f64,
}

impl Default for GoalSipInput {
    fn default() -> Self {
        Self {
            target_amount: 1_000_000.0,
            years: 10,
            expected_return: 12.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalSipResult {
    pub required_sip: f64,
    pub total_investment: f64,
    pub target_amount: f64,
    pub total_returns: f64,
}

pub fn calculate_goal(input: &GoalSipInput) -> CalcResult<GoalSipResult> {
    ensure_amount("target_amount", input.target_amount)?;
    let rate = AnnualRate::from_percent(input.expected_return)?;
    let months = horizon_months(input.years)?;

    let required_sip = annuity_payment_for_target(input.target_amount, rate.monthly(), months, AnnuityTiming::Due)?;
    let total_investment = required_sip * months as f64;

    Ok(GoalSipResult {
        required_sip,
        total_investment,
        target_amount: input.target_amount,
        total_returns: input.target_amount - total_investment,
    })
}

impl Summary for GoalSipResult {
    fn summary(&self) -> Vec<SummaryLine> {
        vec![
            line("Target amount", format_inr(self.target_amount)),
            line("Required monthly SIP", format_inr(self.required_sip)),
            line("Total investment", format_inr(self.total_investment)),
            line("Estimated returns", format_inr(self.total_returns)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fifteen_year_sip() {
        let result = calculate(&SipInput {
            monthly_investment: 5_000.0,
            expected_return: 12.0,
            years: 15,
        })
        .unwrap();

        assert_relative_eq!(result.future_value, 2_522_880.0, epsilon = 1.0);
        assert_eq!(result.total_investment, 900_000.0);
        assert_relative_eq!(result.total_returns, 1_622_880.0, epsilon = 1.0);
        assert_eq!(result.summary()[2].1, "₹25,22,880");
    }

    #[test]
    fn test_zero_return_sip() {
        let result = calculate(&SipInput {
            expected_return: 0.0,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(result.future_value, result.total_investment);
        assert_eq!(result.total_returns, 0.0);
    }

    #[test]
    fn test_goal_sip_zero_rate() {
        let result = calculate_goal(&GoalSipInput {
            target_amount: 1_000_000.0,
            years: 10,
            expected_return: 0.0,
        })
        .unwrap();
        assert_relative_eq!(result.required_sip, 8_333.33, epsilon = 0.01);
        assert_relative_eq!(result.total_investment, 1_000_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_goal_sip_inverts_sip() {
        let goal = calculate_goal(&GoalSipInput::default()).unwrap();
        let sip = calculate(&SipInput {
            monthly_investment: goal.required_sip,
            expected_return: 12.0,
            years: 10,
        })
        .unwrap();
        assert_relative_eq!(sip.future_value, 1_000_000.0, max_relative = 1e-10);
    }

    #[test]
    fn test_rejects_zero_years() {
        let input = SipInput {
            years: 0,
            ..Default::default()
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_rejects_overlong_horizon() {
        // 400 million years of months overflows a u32
        let input = SipInput {
            years: 400_000_000,
            ..Default::default()
        };
        assert!(matches!(
            calculate(&input),
            Err(crate::error::CalcError::InvalidInput { field: "years", .. })
        ));
    }
}
