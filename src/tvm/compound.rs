//! Lump-sum compounding and inflation projection

use super::rate::AnnualRate;

/// `(1 + r)^n`
pub fn growth_factor(periodic_rate: f64, periods: u32) -> f64 {
    let base = 1.0 + periodic_rate;
    match i32::try_from(periods) {
        Ok(n) => base.powi(n),
        Err(_) => base.powf(periods as f64),
    }
}

/// Future value of a lump sum: `P × (1 + r)^n`
///
/// `periods == 0` or a zero rate hands back the principal untouched.
pub fn compound_growth(principal: f64, periodic_rate: f64, periods: u32) -> f64 {
    if periods == 0 || periodic_rate == 0.0 {
        return principal;
    }
    principal * growth_factor(periodic_rate, periods)
}

/// Future cost of a present-day expense: `A × (1 + i)^years`
///
/// Same shape as [`compound_growth`], applied to a cost the investor must cover
/// rather than a balance they hold.
pub fn inflate(amount: f64, inflation: AnnualRate, years: u32) -> f64 {
    compound_growth(amount, inflation.decimal(), years)
}
