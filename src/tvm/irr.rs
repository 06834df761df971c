//! Internal rate of return for a series of periodic cash flows
//!
//! Used to back out the return a SIP actually earned from its current value

/// Search range for the periodic rate: a 99% loss up to a 1000% gain per period
const RATE_FLOOR: f64 = -0.99;
const RATE_CEILING: f64 = 10.0;

/// Solve the periodic rate at which the cash flows have zero net present value,
/// using Newton-Raphson with a bisection fallback.
///
/// Cash flows are indexed by period (index 0 is today); outflows negative,
/// inflows positive. Returns `None` without a sign change or when no root lies
/// inside the search range.
pub fn periodic_irr(cashflows: &[f64]) -> Option<f64> {
    if cashflows.is_empty() {
        return None;
    }

    if cashflows.iter().all(|&cf| cf.abs() < 1e-10) {
        return Some(0.0);
    }

    // A root needs both an investment and a payoff
    let has_positive = cashflows.iter().any(|&cf| cf > 1e-10);
    let has_negative = cashflows.iter().any(|&cf| cf < -1e-10);
    if !has_positive || !has_negative {
        return None;
    }

    let mut rate = 0.01;
    let tolerance = 1e-12;
    let max_iterations = 200;

    for _ in 0..max_iterations {
        let (npv, dnpv) = npv_and_derivative(cashflows, rate);

        if !npv.is_finite() || !dnpv.is_finite() || dnpv.abs() < 1e-20 {
            return bisection(cashflows);
        }

        let new_rate = rate - npv / dnpv;

        // Newton has left the search range; only bisection can say whether a root is inside it
        if !new_rate.is_finite() || new_rate <= RATE_FLOOR || new_rate >= RATE_CEILING {
            return bisection(cashflows);
        }

        if (new_rate - rate).abs() < tolerance {
            return Some(new_rate);
        }

        rate = new_rate;
    }

    log::debug!("Newton-Raphson did not converge, falling back to bisection");
    bisection(cashflows)
}

/// Convert a periodic rate to an effective annual rate
pub fn annualize(periodic_rate: f64, periods_per_year: u32) -> f64 {
    (1.0 + periodic_rate).powi(periods_per_year as i32) - 1.0
}

fn npv_and_derivative(cashflows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut dnpv = 0.0;

    for (t, &cf) in cashflows.iter().enumerate() {
        npv += cf / (1.0 + rate).powi(t as i32);
        if t > 0 {
            dnpv -= (t as f64) * cf / (1.0 + rate).powi(t as i32 + 1);
        }
    }

    (npv, dnpv)
}

fn npv_at_rate(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

fn bisection(cashflows: &[f64]) -> Option<f64> {
    let mut low = finite_bound(cashflows, RATE_FLOOR)?;
    let mut high = finite_bound(cashflows, RATE_CEILING)?;
    let tolerance = 1e-12;

    let mut npv_low = npv_at_rate(cashflows, low);
    let npv_high = npv_at_rate(cashflows, high);
    if npv_low * npv_high > 0.0 {
        return None;
    }

    for _ in 0..1000 {
        let mid = (low + high) / 2.0;
        let npv_mid = npv_at_rate(cashflows, mid);

        if npv_mid.abs() < tolerance || (high - low) / 2.0 < tolerance {
            return Some(mid);
        }

        if npv_mid * npv_low < 0.0 {
            high = mid;
        } else {
            low = mid;
            npv_low = npv_mid;
        }
    }

    None
}

/// Pull a bracket end toward zero until the NPV there is finite.
/// Long series overflow near a 99% loss, and a NaN bracket would pass any sign test.
fn finite_bound(cashflows: &[f64], mut rate: f64) -> Option<f64> {
    for _ in 0..64 {
        if npv_at_rate(cashflows, rate).is_finite() {
            return Some(rate);
        }
        rate /= 2.0;
    }
    None
}
