//! Level-payment loan amortization (EMI)

use serde::{Deserialize, Serialize};

use super::compound::growth_factor;
use crate::error::{ensure_positive, CalcError, CalcResult};

/// Level payment that fully amortizes `principal` over `periods`
pub fn loan_payment(principal: f64, periodic_rate: f64, periods: u32) -> CalcResult<f64> {
    if periods == 0 {
        return Err(CalcError::ZeroPeriods);
    }
    ensure_positive("principal", principal)?;

    if periodic_rate == 0.0 {
        return Ok(principal / periods as f64);
    }
    let factor = growth_factor(periodic_rate, periods);
    Ok(principal * periodic_rate * factor / (factor - 1.0))
}

/// Payment plus the totals derived from it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSummary {
    pub principal: f64,
    pub periods: u32,
    pub payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
    /// Total interest as a percentage of principal
    pub interest_pct: f64,
}

impl LoanSummary {
    pub fn new(principal: f64, periodic_rate: f64, periods: u32) -> CalcResult<Self> {
        let payment = loan_payment(principal, periodic_rate, periods)?;
        let total_paid = payment * periods as f64;
        let total_interest = total_paid - principal;

        Ok(Self {
            principal,
            periods,
            payment,
            total_paid,
            total_interest,
            interest_pct: total_interest / principal * 100.0,
        })
    }
}

/// One period of an amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub period: u32,
    pub opening_balance: f64,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub closing_balance: f64,
}

/// Period-by-period split of each payment into interest and principal
pub fn amortization_schedule(
    principal: f64,
    periodic_rate: f64,
    periods: u32,
) -> CalcResult<Vec<AmortizationRow>> {
    let payment = loan_payment(principal, periodic_rate, periods)?;
    let mut balance = principal;
    let mut rows = Vec::with_capacity(periods as usize);

    for period in 1..=periods {
        let interest = balance * periodic_rate;
        let principal_part = payment - interest;
        let opening_balance = balance;
        balance -= principal_part;

        // Float drift leaves a few paise on the last row
        if period == periods {
            balance = 0.0;
        }

        rows.push(AmortizationRow {
            period,
            opening_balance,
            payment,
            interest,
            principal: principal_part,
            closing_balance: balance,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_home_loan_emi() {
        // 10 lakh at 9.5% for 20 years
        let summary = LoanSummary::new(1_000_000.0, 0.095 / 12.0, 240).unwrap();
        assert_relative_eq!(summary.payment, 9_321.31, epsilon = 0.01);
        assert_relative_eq!(summary.total_interest, 1_237_114.85, epsilon = 0.5);
        assert_relative_eq!(summary.interest_pct, 123.71, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_loan() {
        let summary = LoanSummary::new(120_000.0, 0.0, 12).unwrap();
        assert_eq!(summary.payment, 10_000.0);
        assert_eq!(summary.total_interest, 0.0);

        let near_zero = loan_payment(120_000.0, 1e-10, 12).unwrap();
        assert_relative_eq!(near_zero, 10_000.0, max_relative = 1e-6);
    }

    #[test]
    fn test_interest_never_negative() {
        for &principal in &[10_000.0, 500_000.0, 7_500_000.0] {
            for &rate in &[0.0, 0.001, 0.0075, 0.02] {
                for &n in &[1, 12, 84, 360] {
                    let summary = LoanSummary::new(principal, rate, n).unwrap();
                    assert!(summary.total_paid >= principal - 1e-6);
                    assert!(summary.total_interest >= -1e-6);
                }
            }
        }
    }

    #[test]
    fn test_guards() {
        assert!(matches!(loan_payment(100_000.0, 0.01, 0), Err(CalcError::ZeroPeriods)));
        assert!(loan_payment(0.0, 0.01, 12).is_err());
    }

    #[test]
    fn test_schedule_pays_off_loan() {
        let rows = amortization_schedule(500_000.0, 0.01, 60).unwrap();
        assert_eq!(rows.len(), 60);
        assert_eq!(rows.last().unwrap().closing_balance, 0.0);

        let principal_repaid: f64 = rows.iter().map(|r| r.principal).sum();
        assert_relative_eq!(principal_repaid, 500_000.0, epsilon = 1e-4);

        // Interest share shrinks as the balance falls
        assert!(rows[0].interest > rows[59].interest);
        assert_relative_eq!(rows[0].interest, 5_000.0, epsilon = 1e-9);
    }
}
