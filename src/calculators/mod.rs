//! Planning calculators built on the [`tvm`](crate::tvm) engine
//!
//! Every calculator follows the same shape: a serde input struct whose defaults
//! match the site's starting values, a `calculate` function that validates before
//! computing, and a serializable result. Results keep full precision; rounding
//! happens in [`Summary`] output via [`crate::format`].

pub mod sip;
pub mod lumpsum;
pub mod crorepati;
pub mod step_up;
pub mod emi;
pub mod retirement;
pub mod goals;
pub mod education;
pub mod composite;
pub mod wealth;
pub mod hlv;
pub mod allocation;
pub mod swp;
pub mod compounding;
pub mod ppf;
pub mod returns;
pub mod epf;
pub mod networth;
pub mod spending_less;

use crate::error::{CalcError, CalcResult};
use crate::tvm::Frequency;

/// Label/value pair for human-readable output
pub type SummaryLine = (String, String);

/// Human-readable view of a calculator result
pub trait Summary {
    fn summary(&self) -> Vec<SummaryLine>;
}

pub(crate) fn line(label: impl Into<String>, value: impl Into<String>) -> SummaryLine {
    (label.into(), value.into())
}

/// Longest planning horizon any calculator accepts
pub const MAX_HORIZON_YEARS: u32 = 100;

/// Reject horizons beyond [`MAX_HORIZON_YEARS`]
pub(crate) fn ensure_years(field: &'static str, years: u32) -> CalcResult<u32> {
    if years > MAX_HORIZON_YEARS {
        return Err(CalcError::invalid(
            field,
            format!("must be at most {} years (got {})", MAX_HORIZON_YEARS, years),
        ));
    }
    Ok(years)
}

/// Months in a whole-year horizon; a zero horizon leaves nothing to invest over
pub(crate) fn horizon_months(years: u32) -> CalcResult<u32> {
    if years == 0 {
        return Err(CalcError::ZeroPeriods);
    }
    ensure_years("years", years)?;
    Frequency::Monthly
        .checked_periods(years)
        .ok_or_else(|| CalcError::invalid("years", "horizon too long"))
}

/// Years between two ages, rejecting targets that are not in the future
pub(crate) fn years_between(from: u32, to: u32) -> CalcResult<u32> {
    if to <= from {
        return Err(CalcError::InvalidHorizon { from, to });
    }
    ensure_years("years", to - from)
}
