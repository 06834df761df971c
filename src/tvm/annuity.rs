//! Level and step-up annuities: future value, required payment, time to target

use serde::{Deserialize, Serialize};

use super::compound::compound_growth;
use crate::error::{ensure_amount, ensure_positive, CalcError, CalcResult};

/// When in each period the contribution lands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnnuityTiming {
    /// Start of period (SIP debit at the start of the month earns that month's return)
    #[default]
    Due,
    /// End of period
    Ordinary,
}

/// Future value of one unit contributed per period for `periods` periods
///
/// `periods` may be fractional so the solved durations of
/// [`annuity_periods_to_target`] can be plugged back in.
pub fn annuity_factor(periodic_rate: f64, periods: f64, timing: AnnuityTiming) -> f64 {
    if periodic_rate == 0.0 {
        return periods;
    }
    let ordinary = ((1.0 + periodic_rate).powf(periods) - 1.0) / periodic_rate;
    match timing {
        AnnuityTiming::Ordinary => ordinary,
        AnnuityTiming::Due => ordinary * (1.0 + periodic_rate),
    }
}

/// Future value of a level contribution stream
pub fn annuity_future_value(
    contribution: f64,
    periodic_rate: f64,
    periods: u32,
    timing: AnnuityTiming,
) -> f64 {
    contribution * annuity_factor(periodic_rate, periods as f64, timing)
}

/// Level contribution needed to accumulate `target` over `periods`
///
/// Inverse of [`annuity_future_value`]. Callers pass the remaining gap after any
/// existing savings have been projected; see [`contribution_for_gap`].
pub fn annuity_payment_for_target(
    target: f64,
    periodic_rate: f64,
    periods: u32,
    timing: AnnuityTiming,
) -> CalcResult<f64> {
    if periods == 0 {
        return Err(CalcError::ZeroPeriods);
    }
    ensure_amount("target", target)?;
    Ok(target / annuity_factor(periodic_rate, periods as f64, timing))
}

/// Contribution needed to close `gap`; nothing is needed once the gap is closed
pub fn contribution_for_gap(
    gap: f64,
    periodic_rate: f64,
    periods: u32,
    timing: AnnuityTiming,
) -> CalcResult<f64> {
    if gap <= 0.0 {
        return Ok(0.0);
    }
    annuity_payment_for_target(gap, periodic_rate, periods, timing)
}

/// Fractional number of periods a level contribution needs to reach `target`
///
/// Ordinary timing gives the closed form `ln(1 + FV·r/C) / ln(1 + r)`; due timing
/// deflates the target by one period of growth first. Zero rate is linear.
pub fn annuity_periods_to_target(
    contribution: f64,
    periodic_rate: f64,
    target: f64,
    timing: AnnuityTiming,
) -> CalcResult<f64> {
    ensure_positive("contribution", contribution)?;
    ensure_amount("target", target)?;

    if periodic_rate == 0.0 {
        return Ok(target / contribution);
    }

    let scaled = match timing {
        AnnuityTiming::Ordinary => target * periodic_rate / contribution,
        AnnuityTiming::Due => target * periodic_rate / (contribution * (1.0 + periodic_rate)),
    };
    Ok(scaled.ln_1p() / periodic_rate.ln_1p())
}

/// One year of a step-up contribution stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepUpYear {
    pub year: u32,
    /// Contribution per period during this year
    pub contribution: f64,
    pub invested: f64,
    /// This year's tranche valued at the end of the full horizon
    pub value_at_horizon: f64,
}

/// Result of projecting a step-up contribution stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepUpProjection {
    pub future_value: f64,
    pub total_invested: f64,
    pub final_contribution: f64,
    pub years: Vec<StepUpYear>,
}

/// Future value of a contribution that grows by `step_up` (decimal) once a year
///
/// Each year's tranche is a level annuity over `periods_per_year` periods, carried
/// forward to the horizon with [`compound_growth`].
pub fn step_up_future_value(
    initial_contribution: f64,
    step_up: f64,
    periodic_rate: f64,
    years: u32,
    periods_per_year: u32,
    timing: AnnuityTiming,
) -> StepUpProjection {
    let total_periods = years * periods_per_year;
    let mut contribution = initial_contribution;
    let mut projection = StepUpProjection {
        future_value: 0.0,
        total_invested: 0.0,
        final_contribution: initial_contribution,
        years: Vec::with_capacity(years as usize),
    };

    for year in 1..=years {
        let year_end = year * periods_per_year;
        let tranche = annuity_future_value(contribution, periodic_rate, periods_per_year, timing);
        let value_at_horizon = compound_growth(tranche, periodic_rate, total_periods - year_end);
        let invested = contribution * periods_per_year as f64;

        projection.future_value += value_at_horizon;
        projection.total_invested += invested;
        projection.final_contribution = contribution;
        projection.years.push(StepUpYear {
            year,
            contribution,
            invested,
            value_at_horizon,
        });

        contribution *= 1.0 + step_up;
    }

    projection
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sip_future_value_scenario() {
        // 5,000/month at 12% for 15 years
        let fv = annuity_future_value(5_000.0, 0.01, 180, AnnuityTiming::Due);
        assert_relative_eq!(fv, 2_522_880.0, epsilon = 1.0);
    }

    #[test]
    fn test_due_exceeds_ordinary_by_one_period() {
        let due = annuity_future_value(1_000.0, 0.01, 60, AnnuityTiming::Due);
        let ordinary = annuity_future_value(1_000.0, 0.01, 60, AnnuityTiming::Ordinary);
        assert_relative_eq!(due, ordinary * 1.01, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_rate_is_linear() {
        assert_eq!(annuity_future_value(5_000.0, 0.0, 120, AnnuityTiming::Due), 600_000.0);
        assert_eq!(annuity_future_value(5_000.0, 0.0, 120, AnnuityTiming::Ordinary), 600_000.0);

        let near_zero = annuity_future_value(5_000.0, 1e-9, 120, AnnuityTiming::Due);
        assert_relative_eq!(near_zero, 600_000.0, max_relative = 1e-6);
    }

    #[test]
    fn test_zero_rate_goal_scenario() {
        let payment = annuity_payment_for_target(1_000_000.0, 0.0, 120, AnnuityTiming::Due).unwrap();
        assert_relative_eq!(payment, 8_333.33, epsilon = 0.01);
    }

    #[test]
    fn test_payment_round_trip() {
        for &(c, r, n) in &[(5_000.0, 0.01, 180), (1_250.0, 0.005, 36), (20_000.0, 0.0125, 300)] {
            for timing in [AnnuityTiming::Due, AnnuityTiming::Ordinary] {
                let fv = annuity_future_value(c, r, n, timing);
                let back = annuity_payment_for_target(fv, r, n, timing).unwrap();
                assert_relative_eq!(back, c, max_relative = 1e-10);
            }
        }
    }

    #[test]
    fn test_payment_requires_periods() {
        assert!(matches!(
            annuity_payment_for_target(100_000.0, 0.01, 0, AnnuityTiming::Due),
            Err(CalcError::ZeroPeriods)
        ));
    }

    #[test]
    fn test_gap_already_closed() {
        assert_eq!(contribution_for_gap(-5_000.0, 0.01, 60, AnnuityTiming::Ordinary).unwrap(), 0.0);
        assert_eq!(contribution_for_gap(0.0, 0.01, 60, AnnuityTiming::Ordinary).unwrap(), 0.0);
    }

    #[test]
    fn test_crorepati_duration_closed_form() {
        let months = annuity_periods_to_target(5_000.0, 0.01, 10_000_000.0, AnnuityTiming::Ordinary).unwrap();
        let expected = (1.0_f64 + 10_000_000.0 * 0.01 / 5_000.0).ln() / 1.01_f64.ln();
        assert_relative_eq!(months, expected, max_relative = 1e-12);
        assert_relative_eq!(months / 12.0, 25.4977, epsilon = 1e-3);
    }

    #[test]
    fn test_duration_round_trip() {
        for timing in [AnnuityTiming::Due, AnnuityTiming::Ordinary] {
            let n = annuity_periods_to_target(7_500.0, 0.008, 2_500_000.0, timing).unwrap();
            let fv = 7_500.0 * annuity_factor(0.008, n, timing);
            assert_relative_eq!(fv, 2_500_000.0, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_duration_zero_rate() {
        let n = annuity_periods_to_target(5_000.0, 0.0, 1_000_000.0, AnnuityTiming::Ordinary).unwrap();
        assert_eq!(n, 200.0);
        assert!(annuity_periods_to_target(0.0, 0.01, 1_000_000.0, AnnuityTiming::Ordinary).is_err());
    }

    #[test]
    fn test_step_up_projection() {
        let projection = step_up_future_value(5_000.0, 0.10, 0.01, 15, 12, AnnuityTiming::Due);
        assert_eq!(projection.years.len(), 15);
        assert_relative_eq!(projection.future_value, 4_341_924.7, epsilon = 1.0);
        assert_relative_eq!(projection.total_invested, 1_906_348.9, epsilon = 1.0);
        assert_relative_eq!(projection.final_contribution, 5_000.0 * 1.1_f64.powi(14), max_relative = 1e-12);
    }

    #[test]
    fn test_step_up_at_least_regular() {
        let regular = annuity_future_value(5_000.0, 0.01, 180, AnnuityTiming::Due);
        for step in [0.01, 0.05, 0.10, 0.25] {
            let projection = step_up_future_value(5_000.0, step, 0.01, 15, 12, AnnuityTiming::Due);
            assert!(projection.future_value >= regular);
        }
    }

    #[test]
    fn test_step_up_without_step_matches_regular() {
        let regular = annuity_future_value(5_000.0, 0.01, 180, AnnuityTiming::Due);
        let flat = step_up_future_value(5_000.0, 0.0, 0.01, 15, 12, AnnuityTiming::Due);
        assert_relative_eq!(flat.future_value, regular, max_relative = 1e-10);

        let zero_rate = step_up_future_value(1_000.0, 0.10, 0.0, 2, 12, AnnuityTiming::Due);
        assert_relative_eq!(zero_rate.future_value, 12_000.0 + 13_200.0, max_relative = 1e-12);
    }
}
