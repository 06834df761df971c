//! Discounting: present value of lump sums and growing income streams

use serde::{Deserialize, Serialize};

use super::compound::growth_factor;

/// `1 / (1 + r)^n`
pub fn discount_factor(periodic_rate: f64, periods: u32) -> f64 {
    1.0 / growth_factor(periodic_rate, periods)
}

/// Lump sum needed today to grow into `amount` after `periods`
pub fn present_value(amount: f64, periodic_rate: f64, periods: u32) -> f64 {
    amount * discount_factor(periodic_rate, periods)
}

/// Totals from valuing an income stream that grows each year
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrowingStreamValue {
    /// Undiscounted sum of every year's amount
    pub nominal_total: f64,
    /// Sum of every year's amount discounted back to today
    pub present_value: f64,
}

/// Value a yearly amount that grows at `growth` and is discounted at `discount`
///
/// Year `y` (1-based) pays `base × (1 + growth)^y × share`, discounted by
/// `(1 + discount)^y`. `share` scales the amount without affecting the nominal
/// total, so callers can value the net part of a gross income.
pub fn pv_growing_stream(
    base: f64,
    growth: f64,
    discount: f64,
    share: f64,
    years: u32,
) -> GrowingStreamValue {
    (1..=years).fold(GrowingStreamValue::default(), |mut acc, year| {
        let amount = base * growth_factor(growth, year);
        acc.nominal_total += amount;
        acc.present_value += amount * share * discount_factor(discount, year);
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discount_factors() {
        let v_12 = discount_factor(0.005, 12);
        let expected: f64 = (1.0_f64 / 1.005).powi(12);
        assert!((v_12 - expected).abs() < 1e-12);
        assert_eq!(discount_factor(0.0, 30), 1.0);
    }

    #[test]
    fn test_present_value_inverts_growth() {
        // 10 lakh target in 10 years at 12%
        let pv = present_value(1_000_000.0, 0.12, 10);
        assert_relative_eq!(pv, 321_973.24, epsilon = 0.01);
    }

    #[test]
    fn test_growth_equal_to_discount() {
        // When growth and discount cancel, each year is worth `base × share` today
        let value = pv_growing_stream(100_000.0, 0.06, 0.06, 0.7, 10);
        assert_relative_eq!(value.present_value, 700_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_years() {
        let value = pv_growing_stream(100_000.0, 0.06, 0.08, 1.0, 0);
        assert_eq!(value.present_value, 0.0);
        assert_eq!(value.nominal_total, 0.0);
    }
}
