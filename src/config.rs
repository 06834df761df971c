//! Planner defaults: assumed rates and planning rules of thumb
//!
//! Values start from built-in defaults, can be replaced by a JSON file, and are
//! finally overridden by `SPRINGPAD_*` environment variables.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::path::Path;

use crate::calculators::MAX_HORIZON_YEARS;
use crate::error::{CalcError, CalcResult};

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "SPRINGPAD_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Expected annual return, whole percent
    pub expected_return: f64,
    /// General inflation, whole percent
    pub inflation: f64,
    /// Education cost inflation, whole percent
    pub education_inflation: f64,
    /// Retirement corpus as a multiple of annual expenses at retirement
    pub corpus_multiple: f64,
    /// Largest share of each goal that current savings may cover (multi-goal planner)
    pub goal_savings_cap: f64,
    /// Largest share of each child's future cost that current savings may cover
    pub education_savings_cap: f64,
    /// Annual PPF deposit ceiling
    pub ppf_annual_limit: f64,
    /// PPF maturity term in years
    pub ppf_term_years: u32,
    /// Marginal tax bracket used for the PPF tax-saving estimate, whole percent
    pub tax_bracket: f64,
    /// Annual salary above which EPF contributions stop growing
    pub epf_wage_ceiling: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            expected_return: 12.0,
            inflation: 6.0,
            education_inflation: 8.0,
            corpus_multiple: 25.0,
            goal_savings_cap: 0.30,
            education_savings_cap: 0.40,
            ppf_annual_limit: 150_000.0,
            ppf_term_years: 15,
            tax_bracket: 30.0,
            epf_wage_ceiling: 1_800_000.0,
        }
    }
}

impl PlannerConfig {
    /// Load from a JSON file (missing keys keep their defaults), then apply env overrides
    pub fn load(path: &Path) -> CalcResult<Self> {
        let file = File::open(path)?;
        let mut config: PlannerConfig = serde_json::from_reader(file)?;
        config.apply_env()?;
        config.validate()?;
        log::debug!("Loaded planner config from {}", path.display());
        Ok(config)
    }

    /// Built-in defaults with env overrides applied
    pub fn from_env() -> CalcResult<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `SPRINGPAD_<FIELD>` variables when set
    pub fn apply_env(&mut self) -> CalcResult<()> {
        self.apply_overrides(|key| env::var(format!("{}{}", ENV_PREFIX, key)).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> CalcResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let float = |key: &str, slot: &mut f64| -> CalcResult<()> {
            if let Some(raw) = lookup(key) {
                *slot = raw
                    .trim()
                    .parse()
                    .map_err(|_| CalcError::Config(format!("{}{} is not a number: {}", ENV_PREFIX, key, raw)))?;
                log::info!("Override {}{} = {}", ENV_PREFIX, key, slot);
            }
            Ok(())
        };

        float("EXPECTED_RETURN", &mut self.expected_return)?;
        float("INFLATION", &mut self.inflation)?;
        float("EDUCATION_INFLATION", &mut self.education_inflation)?;
        float("CORPUS_MULTIPLE", &mut self.corpus_multiple)?;
        float("GOAL_SAVINGS_CAP", &mut self.goal_savings_cap)?;
        float("EDUCATION_SAVINGS_CAP", &mut self.education_savings_cap)?;
        float("PPF_ANNUAL_LIMIT", &mut self.ppf_annual_limit)?;
        float("TAX_BRACKET", &mut self.tax_bracket)?;
        float("EPF_WAGE_CEILING", &mut self.epf_wage_ceiling)?;

        if let Some(raw) = lookup("PPF_TERM_YEARS") {
            self.ppf_term_years = raw
                .trim()
                .parse()
                .map_err(|_| CalcError::Config(format!("{}PPF_TERM_YEARS is not a whole number: {}", ENV_PREFIX, raw)))?;
        }

        Ok(())
    }

    pub fn validate(&self) -> CalcResult<()> {
        for (name, value) in [
            ("expected_return", self.expected_return),
            ("inflation", self.inflation),
            ("education_inflation", self.education_inflation),
            ("tax_bracket", self.tax_bracket),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(CalcError::Config(format!("{} must be between 0 and 100, got {}", name, value)));
            }
        }
        for (name, value) in [
            ("goal_savings_cap", self.goal_savings_cap),
            ("education_savings_cap", self.education_savings_cap),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CalcError::Config(format!("{} must be a fraction between 0 and 1, got {}", name, value)));
            }
        }
        for (name, value) in [
            ("corpus_multiple", self.corpus_multiple),
            ("ppf_annual_limit", self.ppf_annual_limit),
            ("epf_wage_ceiling", self.epf_wage_ceiling),
        ] {
            // Phrased as the valid range so NaN is rejected
            if !(value.is_finite() && value > 0.0) {
                return Err(CalcError::Config(format!("{} must be a positive number, got {}", name, value)));
            }
        }
        if self.ppf_term_years == 0 || self.ppf_term_years > MAX_HORIZON_YEARS {
            return Err(CalcError::Config(format!(
                "ppf_term_years must be between 1 and {}, got {}",
                MAX_HORIZON_YEARS, self.ppf_term_years
            )));
        }
        Ok(())
    }
}
