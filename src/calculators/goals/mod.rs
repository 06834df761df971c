//! Single-target savings goals: wedding, dream home, emergency fund
//!
//! All three reduce to the same plan: grow existing savings monthly to the
//! deadline, then solve the SIP that closes whatever gap is left.

mod wedding;
mod dream_home;
mod emergency;

pub use wedding::{calculate as calculate_wedding, WeddingInput, WeddingResult};
pub use dream_home::{calculate as calculate_dream_home, DreamHomeInput, DreamHomeResult};
pub use emergency::{calculate as calculate_emergency, EmergencyFundInput, EmergencyFundResult};

use serde::{Deserialize, Serialize};

use super::{horizon_months, line, SummaryLine};
use crate::error::{ensure_amount, CalcResult};
use crate::format::format_inr;
use crate::tvm::{compound_growth, contribution_for_gap, AnnualRate, AnnuityTiming};

/// How a target is met from current savings plus a monthly SIP
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoalPlan {
    pub target: f64,
    pub future_value_of_savings: f64,
    /// Part of the target left for the SIP; zero when savings already cover it
    pub shortfall: f64,
    pub monthly_investment: f64,
    pub total_investment: f64,
    /// Growth earned on savings plus SIP by the deadline
    pub total_returns: f64,
}

impl SavingsGoalPlan {
    pub fn solve(target: f64, current_savings: f64, rate: AnnualRate, years: u32) -> CalcResult<Self> {
        ensure_amount("target", target)?;
        ensure_amount("current_savings", current_savings)?;
        let months = horizon_months(years)?;
        let monthly_rate = rate.monthly();

        let future_value_of_savings = compound_growth(current_savings, monthly_rate, months);
        let shortfall = (target - future_value_of_savings).max(0.0);
        let savings_growth = future_value_of_savings - current_savings;

        let monthly_investment = contribution_for_gap(shortfall, monthly_rate, months, AnnuityTiming::Ordinary)?;
        let total_investment = monthly_investment * months as f64;

        Ok(Self {
            target,
            future_value_of_savings,
            shortfall,
            monthly_investment,
            total_investment,
            total_returns: shortfall - total_investment + savings_growth,
        })
    }

    pub fn is_covered_by_savings(&self) -> bool {
        self.shortfall == 0.0
    }

    pub(crate) fn summary_lines(&self) -> Vec<SummaryLine> {
        vec![
            line("Savings at deadline", format_inr(self.future_value_of_savings)),
            line("Monthly SIP required", format_inr(self.monthly_investment)),
            line("Total SIP investment", format_inr(self.total_investment)),
            line("Estimated returns", format_inr(self.total_returns)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rate(pct: f64) -> AnnualRate {
        AnnualRate::from_percent(pct).unwrap()
    }

    #[test]
    fn test_plan_without_savings() {
        let plan = SavingsGoalPlan::solve(1_000_000.0, 0.0, rate(12.0), 5).unwrap();
        let factor = (1.01_f64.powi(60) - 1.0) / 0.01;

        assert_relative_eq!(plan.monthly_investment, 1_000_000.0 / factor, max_relative = 1e-12);
        assert_relative_eq!(plan.total_returns, 1_000_000.0 - plan.total_investment, max_relative = 1e-12);
        assert!(!plan.is_covered_by_savings());
    }

    #[test]
    fn test_savings_cover_target() {
        let plan = SavingsGoalPlan::solve(100_000.0, 80_000.0, rate(12.0), 3).unwrap();
        assert!(plan.is_covered_by_savings());
        assert_eq!(plan.monthly_investment, 0.0);
        assert_eq!(plan.total_investment, 0.0);
        assert_relative_eq!(plan.total_returns, plan.future_value_of_savings - 80_000.0);
    }

    #[test]
    fn test_zero_rate_plan() {
        let plan = SavingsGoalPlan::solve(1_200_000.0, 0.0, AnnualRate::ZERO, 10).unwrap();
        assert_relative_eq!(plan.monthly_investment, 10_000.0);
        assert_relative_eq!(plan.total_returns, 0.0);
    }
}
