//! Rate conventions: whole-percentage annual rates and compounding frequency

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// How many times per year a rate compounds (and contributions are counted)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Frequency {
    #[default]
    Monthly,
    Quarterly,
    Annual,
}

impl Frequency {
    pub fn periods_per_year(self) -> u32 {
        match self {
            Frequency::Monthly => 12,
            Frequency::Quarterly => 4,
            Frequency::Annual => 1,
        }
    }

    /// Number of periods in a whole-year horizon, saturating at `u32::MAX`
    pub fn periods(self, years: u32) -> u32 {
        years.saturating_mul(self.periods_per_year())
    }

    /// Number of periods in a whole-year horizon, `None` on overflow
    pub fn checked_periods(self, years: u32) -> Option<u32> {
        years.checked_mul(self.periods_per_year())
    }
}

/// Annual rate entered as a whole percentage (`12.0` means 12%)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnualRate(f64);

impl AnnualRate {
    pub const ZERO: AnnualRate = AnnualRate(0.0);

    /// Validate and wrap a percentage. Zero is allowed and selects the linear formulas.
    pub fn from_percent(percent: f64) -> CalcResult<Self> {
        if !percent.is_finite() {
            return Err(CalcError::invalid("rate", "must be a finite number"));
        }
        if percent < 0.0 {
            return Err(CalcError::invalid("rate", format!("must not be negative (got {}%)", percent)));
        }
        if percent > 100.0 {
            return Err(CalcError::invalid("rate", format!("must be at most 100% (got {}%)", percent)));
        }
        Ok(Self(percent))
    }

    /// Rate as entered, e.g. `12.0`
    pub fn percent(self) -> f64 {
        self.0
    }

    /// Rate as a decimal, e.g. `0.12`
    pub fn decimal(self) -> f64 {
        self.0 / 100.0
    }

    /// Nominal rate split evenly across the periods of a year
    pub fn periodic(self, frequency: Frequency) -> f64 {
        self.decimal() / frequency.periods_per_year() as f64
    }

    pub fn monthly(self) -> f64 {
        self.periodic(Frequency::Monthly)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Effective annual yield of this nominal rate at the given compounding, as a decimal
    pub fn effective_annual(self, frequency: Frequency) -> f64 {
        let n = frequency.periods_per_year();
        (1.0 + self.periodic(frequency)).powi(n as i32) - 1.0
    }
}
