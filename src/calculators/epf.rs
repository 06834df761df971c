//! Employees' Provident Fund: year-by-year EPF and pension (EPS) accumulation to retirement
//!
//! Both sides contribute a share of salary capped at the statutory wage ceiling.
//! The employee's share and 3.67% from the employer go to the EPF account; the
//! remaining 8.33% of the employer's 12% goes to the pension fund.

use serde::{Deserialize, Serialize};

use super::{line, years_between, Summary, SummaryLine};
use crate::config::PlannerConfig;
use crate::error::{ensure_amount, ensure_percent, CalcResult};
use crate::format::{format_inr, format_inr_compact};
use crate::tvm::AnnualRate;

/// Employer share credited to EPF, percent of capped salary
const EMPLOYER_EPF_PERCENT: f64 = 3.67;
/// Employer share diverted to the pension scheme, percent of capped salary
const EMPLOYER_PENSION_PERCENT: f64 = 8.33;
/// Divisor in the pension formula: salary × service / 70
const PENSION_DIVISOR: f64 = 70.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EpfInput {
    /// Basic salary per year
    pub annual_salary: f64,
    pub current_age: u32,
    pub retirement_age: u32,
    /// Yearly salary raise, whole percent
    pub salary_increase: f64,
    /// Employee share of salary, whole percent
    pub employee_contribution: f64,
    pub current_balance: f64,
    pub epf_rate: f64,
    pub pension_rate: f64,
}

impl Default for EpfInput {
    fn default() -> Self {
        Self {
            annual_salary: 600_000.0,
            current_age: 25,
            retirement_age: 58,
            salary_increase: 8.0,
            employee_contribution: 12.0,
            current_balance: 0.0,
            epf_rate: 8.15,
            pension_rate: 8.15,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpfYear {
    /// Age at the end of the year
    pub age: u32,
    /// Salary counted for contributions, after the ceiling
    pub salary: f64,
    pub employee_contribution: f64,
    pub employer_contribution: f64,
    pub pension_contribution: f64,
    /// Interest on both accounts' opening balances
    pub interest: f64,
    pub total_balance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpfResult {
    pub working_years: u32,
    pub epf_maturity: f64,
    pub pension_corpus: f64,
    pub total_employee_contribution: f64,
    /// Employer EPF and pension shares together
    pub total_employer_contribution: f64,
    pub total_interest: f64,
    /// Rough monthly pension from the average salary over the career
    pub monthly_pension: f64,
    pub yearly: Vec<EpfYear>,
}

pub fn calculate(input: &EpfInput, config: &PlannerConfig) -> CalcResult<EpfResult> {
    let years = years_between(input.current_age, input.retirement_age)?;
    ensure_amount("annual_salary", input.annual_salary)?;
    ensure_amount("current_balance", input.current_balance)?;
    ensure_percent("employee_contribution", input.employee_contribution)?;
    let raise = AnnualRate::from_percent(input.salary_increase)?.decimal();
    let epf_rate = AnnualRate::from_percent(input.epf_rate)?.decimal();
    let pension_rate = AnnualRate::from_percent(input.pension_rate)?.decimal();
    let ceiling = config.epf_wage_ceiling;

    let mut salary = input.annual_salary;
    let mut epf_balance = input.current_balance;
    let mut pension_balance = 0.0;
    let mut total_employee = 0.0;
    let mut total_employer = 0.0;
    let mut yearly = Vec::with_capacity(years as usize);

    // Interest accrues on the opening balance; the year's contributions earn from next year
    for year in 1..=years {
        let capped = salary.min(ceiling);
        let employee = capped * input.employee_contribution / 100.0;
        let employer = capped * EMPLOYER_EPF_PERCENT / 100.0;
        let pension = capped * EMPLOYER_PENSION_PERCENT / 100.0;

        let epf_interest = epf_balance * epf_rate;
        let pension_interest = pension_balance * pension_rate;

        epf_balance += employee + employer + epf_interest;
        pension_balance += pension + pension_interest;
        total_employee += employee;
        total_employer += employer + pension;

        yearly.push(EpfYear {
            age: input.current_age + year,
            salary: capped,
            employee_contribution: employee,
            employer_contribution: employer,
            pension_contribution: pension,
            interest: epf_interest + pension_interest,
            total_balance: epf_balance + pension_balance,
        });

        salary *= 1.0 + raise;
    }

    let total_interest = epf_balance + pension_balance - total_employee - total_employer - input.current_balance;

    // Mid-career salary stands in for the average pensionable salary
    let average_salary = input.annual_salary * (1.0 + raise).powf(years as f64 / 2.0);
    let monthly_pension = average_salary.min(ceiling) * years as f64 / (PENSION_DIVISOR * 12.0);

    log::debug!(
        "EPF over {} years: balance {:.0}, pension corpus {:.0}",
        years,
        epf_balance,
        pension_balance
    );

    Ok(EpfResult {
        working_years: years,
        epf_maturity: epf_balance,
        pension_corpus: pension_balance,
        total_employee_contribution: total_employee,
        total_employer_contribution: total_employer,
        total_interest,
        monthly_pension,
        yearly,
    })
}

impl Summary for EpfResult {
    fn summary(&self) -> Vec<SummaryLine> {
        vec![
            line("EPF maturity", format_inr_compact(self.epf_maturity)),
            line("Pension corpus", format_inr_compact(self.pension_corpus)),
            line("Your contribution", format_inr_compact(self.total_employee_contribution)),
            line("Employer contribution", format_inr_compact(self.total_employer_contribution)),
            line("Interest earned", format_inr_compact(self.total_interest)),
            line("Estimated monthly pension", format_inr(self.monthly_pension)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_career() {
        let result = calculate(&EpfInput::default(), &PlannerConfig::default()).unwrap();
        assert_eq!(result.working_years, 33);
        assert_eq!(result.yearly.len(), 33);

        let first = &result.yearly[0];
        assert_eq!(first.age, 26);
        assert_relative_eq!(first.employee_contribution, 72_000.0, max_relative = 1e-12);
        assert_relative_eq!(first.employer_contribution, 22_020.0, max_relative = 1e-12);
        assert_relative_eq!(first.pension_contribution, 49_980.0, max_relative = 1e-12);
        assert_eq!(first.interest, 0.0);

        // Mid-career salary is above the ceiling, so the pension uses the ceiling
        assert_relative_eq!(result.monthly_pension, 1_800_000.0 * 33.0 / 840.0, max_relative = 1e-12);

        let last = result.yearly.last().unwrap();
        assert_relative_eq!(last.total_balance, result.epf_maturity + result.pension_corpus, max_relative = 1e-12);
    }

    #[test]
    fn test_balances_reconcile() {
        let input = EpfInput {
            current_balance: 250_000.0,
            ..Default::default()
        };
        let result = calculate(&input, &PlannerConfig::default()).unwrap();
        let paid_in = result.total_employee_contribution + result.total_employer_contribution + 250_000.0;
        assert_relative_eq!(
            result.epf_maturity + result.pension_corpus,
            paid_in + result.total_interest,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.yearly.iter().map(|y| y.interest).sum::<f64>(),
            result.total_interest,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_zero_rates_just_add_up() {
        let input = EpfInput {
            current_age: 30,
            retirement_age: 40,
            salary_increase: 0.0,
            epf_rate: 0.0,
            pension_rate: 0.0,
            ..Default::default()
        };
        let result = calculate(&input, &PlannerConfig::default()).unwrap();
        assert_relative_eq!(result.epf_maturity, 10.0 * (72_000.0 + 22_020.0), max_relative = 1e-12);
        assert_relative_eq!(result.pension_corpus, 499_800.0, max_relative = 1e-12);
        assert_relative_eq!(result.total_interest, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_salary_capped_at_ceiling() {
        let input = EpfInput {
            annual_salary: 3_000_000.0,
            ..Default::default()
        };
        let config = PlannerConfig::default();
        let result = calculate(&input, &config).unwrap();
        assert!(result.yearly.iter().all(|y| y.salary == config.epf_wage_ceiling));
        assert_relative_eq!(result.yearly[5].employee_contribution, 216_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_retired_already() {
        let input = EpfInput {
            current_age: 60,
            ..Default::default()
        };
        assert!(matches!(
            calculate(&input, &PlannerConfig::default()),
            Err(CalcError::InvalidHorizon { from: 60, to: 58 })
        ));
    }
}
