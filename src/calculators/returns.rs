//! Return actually earned by a running SIP, backed out from its current value

use serde::{Deserialize, Serialize};

use super::{line, Summary, SummaryLine, MAX_HORIZON_YEARS};
use crate::error::{ensure_amount, ensure_positive, CalcError, CalcResult};
use crate::format::{format_inr, format_percent};
use crate::tvm::irr::{annualize, periodic_irr};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SipReturnInput {
    pub monthly_investment: f64,
    /// Instalments paid so far
    pub months: u32,
    pub current_value: f64,
}

impl Default for SipReturnInput {
    fn default() -> Self {
        Self {
            monthly_investment: 10_000.0,
            months: 60,
            current_value: 800_000.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipReturnResult {
    pub total_invested: f64,
    pub gain: f64,
    /// Monthly rate times twelve, whole percent
    pub nominal_annual_return: f64,
    /// Monthly rate compounded over a year, whole percent
    pub effective_annual_return: f64,
}

/// Instalments go out at the start of each month; the current value comes back
/// one month after the last instalment.
pub fn calculate(input: &SipReturnInput) -> CalcResult<SipReturnResult> {
    ensure_positive("monthly_investment", input.monthly_investment)?;
    ensure_amount("current_value", input.current_value)?;
    if input.months == 0 {
        return Err(CalcError::ZeroPeriods);
    }
    if input.months > MAX_HORIZON_YEARS * 12 {
        return Err(CalcError::invalid(
            "months",
            format!("must be at most {} (got {})", MAX_HORIZON_YEARS * 12, input.months),
        ));
    }

    let mut cashflows = vec![-input.monthly_investment; input.months as usize];
    cashflows.push(input.current_value);

    let monthly = periodic_irr(&cashflows).ok_or(CalcError::NoSolution)?;
    log::debug!("SIP implied monthly return {:.6}", monthly);

    let total_invested = input.monthly_investment * input.months as f64;
    Ok(SipReturnResult {
        total_invested,
        gain: input.current_value - total_invested,
        nominal_annual_return: monthly * 12.0 * 100.0,
        effective_annual_return: annualize(monthly, 12) * 100.0,
    })
}

impl Summary for SipReturnResult {
    fn summary(&self) -> Vec<SummaryLine> {
        vec![
            line("Total invested", format_inr(self.total_invested)),
            line("Gain", format_inr(self.gain)),
            line("Annual return (nominal)", format_percent(self.nominal_annual_return, 2)),
            line("Annual return (effective)", format_percent(self.effective_annual_return, 2)),
        ]
    }
}
