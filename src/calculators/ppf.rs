//! Public Provident Fund maturity with optional block extension

use serde::{Deserialize, Serialize};

use super::{ensure_years, line, Summary, SummaryLine};
use crate::config::PlannerConfig;
use crate::error::{ensure_amount, CalcResult};
use crate::format::format_inr;
use crate::tvm::{compound_growth, AnnualRate};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PpfInput {
    pub yearly_contribution: f64,
    /// Balance of an existing account; zero for a fresh one
    pub current_balance: f64,
    /// Years the existing account has already run
    pub account_age: u32,
    pub interest_rate: f64,
    /// Years to keep the matured balance invested without new deposits
    pub extension_years: u32,
}

impl Default for PpfInput {
    fn default() -> Self {
        Self {
            yearly_contribution: 150_000.0,
            current_balance: 0.0,
            account_age: 0,
            interest_rate: 7.1,
            extension_years: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PpfYear {
    /// Account year, counted from opening
    pub year: u32,
    pub starting_balance: f64,
    pub contribution: f64,
    pub interest: f64,
    pub ending_balance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PpfExtension {
    pub maturity_amount: f64,
    pub total_interest: f64,
    pub total_years: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PpfResult {
    pub maturity_amount: f64,
    pub total_contributions: f64,
    pub total_interest: f64,
    /// Tax saved on new deposits at the configured bracket
    pub tax_savings: f64,
    pub yearly: Vec<PpfYear>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<PpfExtension>,
}

pub fn calculate(input: &PpfInput, config: &PlannerConfig) -> CalcResult<PpfResult> {
    ensure_amount("yearly_contribution", input.yearly_contribution)?;
    ensure_amount("current_balance", input.current_balance)?;
    let rate = AnnualRate::from_percent(input.interest_rate)?.decimal();
    let extension_years = ensure_years("extension_years", input.extension_years)?;

    let remaining_years = config.ppf_term_years.saturating_sub(input.account_age);
    let contribution = input.yearly_contribution.min(config.ppf_annual_limit);
    if contribution < input.yearly_contribution {
        log::warn!(
            "PPF deposit {} capped at the annual limit of {}",
            input.yearly_contribution,
            config.ppf_annual_limit
        );
    }

    let mut balance = input.current_balance;
    let mut total_contributions = input.current_balance;
    let mut yearly = Vec::with_capacity(remaining_years as usize);

    // Deposit at the start of the year earns the full year's interest
    for offset in 1..=remaining_years {
        let starting_balance = balance;
        let interest = (starting_balance + contribution) * rate;
        balance = starting_balance + contribution + interest;
        total_contributions += contribution;

        yearly.push(PpfYear {
            year: input.account_age + offset,
            starting_balance,
            contribution,
            interest,
            ending_balance: balance,
        });
    }

    let total_interest = balance - total_contributions;
    let tax_savings = (total_contributions - input.current_balance) * config.tax_bracket / 100.0;

    let extension = (extension_years > 0).then(|| {
        let extended = compound_growth(balance, rate, extension_years);
        PpfExtension {
            maturity_amount: extended,
            total_interest: total_interest + (extended - balance),
            total_years: remaining_years + extension_years,
        }
    });

    Ok(PpfResult {
        maturity_amount: balance,
        total_contributions,
        total_interest,
        tax_savings,
        yearly,
        extension,
    })
}

impl Summary for PpfResult {
    fn summary(&self) -> Vec<SummaryLine> {
        let mut lines = vec![
            line("Maturity amount", format_inr(self.maturity_amount)),
            line("Total contributions", format_inr(self.total_contributions)),
            line("Total interest", format_inr(self.total_interest)),
            line("Tax savings", format_inr(self.tax_savings)),
        ];
        if let Some(ext) = &self.extension {
            lines.push(line(
                format!("Maturity after extension ({}y)", ext.total_years),
                format_inr(ext.maturity_amount),
            ));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use crate::tvm::{annuity_future_value, AnnuityTiming};
    use approx::assert_relative_eq;

    #[test]
    fn test_fresh_account() {
        let result = calculate(&PpfInput::default(), &PlannerConfig::default()).unwrap();
        // Yearly deposits at the start of each year: an annuity due
        let expected = annuity_future_value(150_000.0, 0.071, 15, AnnuityTiming::Due);

        assert_relative_eq!(result.maturity_amount, expected, max_relative = 1e-10);
        assert_eq!(result.total_contributions, 2_250_000.0);
        assert_relative_eq!(result.tax_savings, 675_000.0, max_relative = 1e-12);
        assert_eq!(result.yearly.len(), 15);
        assert!(result.extension.is_none());
    }

    #[test]
    fn test_deposit_capped() {
        let result = calculate(
            &PpfInput {
                yearly_contribution: 200_000.0,
                ..Default::default()
            },
            &PlannerConfig::default(),
        )
        .unwrap();
        assert!(result.yearly.iter().all(|y| y.contribution == 150_000.0));
    }

    #[test]
    fn test_existing_account_with_extension() {
        let input = PpfInput {
            current_balance: 500_000.0,
            account_age: 10,
            extension_years: 5,
            ..Default::default()
        };
        let result = calculate(&input, &PlannerConfig::default()).unwrap();
        assert_eq!(result.yearly.len(), 5);
        assert_eq!(result.yearly[0].year, 11);

        let ext = result.extension.unwrap();
        assert_eq!(ext.total_years, 10);
        assert_relative_eq!(ext.maturity_amount, result.maturity_amount * 1.071_f64.powi(5), max_relative = 1e-12);
    }

    #[test]
    fn test_matured_account() {
        let input = PpfInput {
            current_balance: 4_000_000.0,
            account_age: 16,
            ..Default::default()
        };
        let result = calculate(&input, &PlannerConfig::default()).unwrap();
        assert!(result.yearly.is_empty());
        assert_eq!(result.maturity_amount, 4_000_000.0);
        assert_eq!(result.tax_savings, 0.0);
    }

    #[test]
    fn test_extension_bounded() {
        let input = PpfInput {
            extension_years: u32::MAX,
            ..Default::default()
        };
        let err = calculate(&input, &PlannerConfig::default()).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { field: "extension_years", .. }));
    }
}
