//! Loan EMI with totals and an optional amortization schedule

use serde::{Deserialize, Serialize};

use super::{horizon_months, line, Summary, SummaryLine};
use crate::error::CalcResult;
use crate::format::{format_inr, format_percent};
use crate::tvm::{amortization_schedule, AmortizationRow, AnnualRate, LoanSummary};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmiInput {
    pub loan_amount: f64,
    /// Annual interest rate, whole percent
    pub interest_rate: f64,
    pub tenure_years: u32,
    /// Include the month-by-month schedule in the result
    pub with_schedule: bool,
}

impl Default for EmiInput {
    fn default() -> Self {
        Self {
            loan_amount: 1_000_000.0,
            interest_rate: 9.5,
            tenure_years: 20,
            with_schedule: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiResult {
    pub emi: f64,
    pub total_amount: f64,
    pub total_interest: f64,
    pub interest_percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<AmortizationRow>>,
}

pub fn calculate(input: &EmiInput) -> CalcResult<EmiResult> {
    let rate = AnnualRate::from_percent(input.interest_rate)?;
    let months = horizon_months(input.tenure_years)?;
    let loan = LoanSummary::new(input.loan_amount, rate.monthly(), months)?;

    let schedule = if input.with_schedule {
        Some(amortization_schedule(input.loan_amount, rate.monthly(), months)?)
    } else {
        None
    };

    Ok(EmiResult {
        emi: loan.payment,
        total_amount: loan.total_paid,
        total_interest: loan.total_interest,
        interest_percentage: loan.interest_pct,
        schedule,
    })
}

impl Summary for EmiResult {
    fn summary(&self) -> Vec<SummaryLine> {
        vec![
            line("Monthly EMI", format_inr(self.emi)),
            line("Total interest", format_inr(self.total_interest)),
            line("Total amount payable", format_inr(self.total_amount)),
            line("Interest vs principal", format_percent(self.interest_percentage, 1)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_home_loan() {
        let result = calculate(&EmiInput::default()).unwrap();
        assert_relative_eq!(result.emi, 9_321.31, epsilon = 0.01);
        assert_relative_eq!(result.total_interest, 1_237_114.85, epsilon = 0.5);
        assert!(result.schedule.is_none());

        let summary = result.summary();
        assert_eq!(summary[0].1, "₹9,321");
        assert_eq!(summary[3].1, "123.7%");
    }

    #[test]
    fn test_schedule_attached() {
        let result = calculate(&EmiInput {
            tenure_years: 5,
            with_schedule: true,
            ..Default::default()
        })
        .unwrap();
        let schedule = result.schedule.unwrap();
        assert_eq!(schedule.len(), 60);
        assert_relative_eq!(schedule[0].payment, result.emi);
    }

    #[test]
    fn test_zero_interest_loan() {
        let result = calculate(&EmiInput {
            loan_amount: 240_000.0,
            interest_rate: 0.0,
            tenure_years: 2,
            with_schedule: false,
        })
        .unwrap();
        assert_eq!(result.emi, 10_000.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_zero_tenure_rejected() {
        let input = EmiInput {
            tenure_years: 0,
            ..Default::default()
        };
        assert!(calculate(&input).is_err());
    }
}
