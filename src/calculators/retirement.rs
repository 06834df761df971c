//! Retirement corpus and the SIP needed to build it

use serde::{Deserialize, Serialize};

use super::{line, years_between, Summary, SummaryLine};
use crate::config::PlannerConfig;
use crate::error::{ensure_amount, CalcResult};
use crate::format::{format_inr, format_inr_compact};
use crate::tvm::{compound_growth, contribution_for_gap, inflate, AnnualRate, AnnuityTiming, Frequency};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetirementInput {
    pub current_age: u32,
    pub retirement_age: u32,
    /// Monthly household expenses today
    pub current_expenses: f64,
    pub inflation_rate: f64,
    pub expected_return: f64,
    pub existing_savings: f64,
}

impl Default for RetirementInput {
    fn default() -> Self {
        Self {
            current_age: 25,
            retirement_age: 60,
            current_expenses: 50_000.0,
            inflation_rate: 6.0,
            expected_return: 12.0,
            existing_savings: 500_000.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementResult {
    pub years_to_retirement: u32,
    /// Monthly expenses at retirement in future rupees
    pub future_expenses: f64,
    pub corpus_required: f64,
    /// Existing savings grown to retirement
    pub existing_corpus_value: f64,
    pub additional_corpus_needed: f64,
    pub monthly_sip_required: f64,
}

pub fn calculate(input: &RetirementInput, config: &PlannerConfig) -> CalcResult<RetirementResult> {
    let years = years_between(input.current_age, input.retirement_age)?;
    ensure_amount("current_expenses", input.current_expenses)?;
    ensure_amount("existing_savings", input.existing_savings)?;
    let inflation = AnnualRate::from_percent(input.inflation_rate)?;
    let rate = AnnualRate::from_percent(input.expected_return)?;

    let future_expenses = inflate(input.current_expenses, inflation, years);
    let corpus_required = future_expenses * 12.0 * config.corpus_multiple;

    // Savings already invested compound yearly; new SIPs compound monthly
    let existing_corpus_value = compound_growth(input.existing_savings, rate.decimal(), years);
    let additional_corpus_needed = (corpus_required - existing_corpus_value).max(0.0);
    let monthly_sip_required = contribution_for_gap(
        additional_corpus_needed,
        rate.monthly(),
        Frequency::Monthly.periods(years),
        AnnuityTiming::Due,
    )?;

    log::debug!(
        "Retirement in {} years: corpus {:.0}, existing grows to {:.0}",
        years,
        corpus_required,
        existing_corpus_value
    );

    Ok(RetirementResult {
        years_to_retirement: years,
        future_expenses,
        corpus_required,
        existing_corpus_value,
        additional_corpus_needed,
        monthly_sip_required,
    })
}

impl Summary for RetirementResult {
    fn summary(&self) -> Vec<SummaryLine> {
        vec![
            line("Years to retirement", self.years_to_retirement.to_string()),
            line("Monthly expenses at retirement", format_inr(self.future_expenses)),
            line("Corpus required", format_inr_compact(self.corpus_required)),
            line("Existing savings at retirement", format_inr_compact(self.existing_corpus_value)),
            line("Monthly SIP required", format_inr(self.monthly_sip_required)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_plan() {
        let result = calculate(&RetirementInput::default(), &PlannerConfig::default()).unwrap();
        let future_expenses = 50_000.0 * 1.06_f64.powi(35);
        let existing = 500_000.0 * 1.12_f64.powi(35);

        assert_eq!(result.years_to_retirement, 35);
        assert_relative_eq!(result.future_expenses, future_expenses, max_relative = 1e-12);
        assert_relative_eq!(result.corpus_required, future_expenses * 300.0, max_relative = 1e-12);
        assert_relative_eq!(result.existing_corpus_value, existing, max_relative = 1e-12);
        assert!(result.monthly_sip_required > 0.0);
    }

    #[test]
    fn test_savings_cover_corpus() {
        let input = RetirementInput {
            current_expenses: 1_000.0,
            existing_savings: 10_000_000.0,
            ..Default::default()
        };
        let result = calculate(&input, &PlannerConfig::default()).unwrap();
        assert_eq!(result.additional_corpus_needed, 0.0);
        assert_eq!(result.monthly_sip_required, 0.0);
    }

    #[test]
    fn test_corpus_multiple_from_config() {
        let config = PlannerConfig {
            corpus_multiple: 30.0,
            ..Default::default()
        };
        let result = calculate(&RetirementInput::default(), &config).unwrap();
        assert_relative_eq!(result.corpus_required, result.future_expenses * 360.0, max_relative = 1e-12);
    }

    #[test]
    fn test_retirement_age_must_be_later() {
        let input = RetirementInput {
            current_age: 60,
            retirement_age: 55,
            ..Default::default()
        };
        assert!(matches!(
            calculate(&input, &PlannerConfig::default()),
            Err(CalcError::InvalidHorizon { from: 60, to: 55 })
        ));
    }
}
