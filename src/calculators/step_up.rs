//! Step-up SIP: the installment rises by a fixed percentage every year

use serde::{Deserialize, Serialize};

use super::{horizon_months, line, Summary, SummaryLine};
use crate::error::{ensure_percent, ensure_positive, CalcResult};
use crate::format::format_inr;
use crate::tvm::{annuity_future_value, step_up_future_value, AnnualRate, AnnuityTiming, Frequency, StepUpYear};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StepUpInput {
    pub initial_sip: f64,
    /// Yearly increase of the installment, whole percent
    pub step_up_percent: f64,
    pub expected_return: f64,
    pub years: u32,
}

impl Default for StepUpInput {
    fn default() -> Self {
        Self {
            initial_sip: 5_000.0,
            step_up_percent: 10.0,
            expected_return: 12.0,
            years: 15,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepUpResult {
    pub regular_sip_value: f64,
    pub regular_sip_investment: f64,
    pub step_up_sip_value: f64,
    pub step_up_investment: f64,
    /// Extra corpus from stepping up
    pub additional_wealth: f64,
    /// Extra money paid in from stepping up
    pub additional_investment: f64,
    pub final_monthly_sip: f64,
    pub yearly: Vec<StepUpYear>,
}

pub fn calculate(input: &StepUpInput) -> CalcResult<StepUpResult> {
    ensure_positive("initial_sip", input.initial_sip)?;
    ensure_percent("step_up_percent", input.step_up_percent)?;
    let rate = AnnualRate::from_percent(input.expected_return)?;
    let months = horizon_months(input.years)?;
    let monthly_rate = rate.monthly();

    let regular_sip_value = annuity_future_value(input.initial_sip, monthly_rate, months, AnnuityTiming::Due);
    let regular_sip_investment = input.initial_sip * months as f64;

    let projection = step_up_future_value(
        input.initial_sip,
        input.step_up_percent / 100.0,
        monthly_rate,
        input.years,
        Frequency::Monthly.periods_per_year(),
        AnnuityTiming::Due,
    );

    Ok(StepUpResult {
        regular_sip_value,
        regular_sip_investment,
        step_up_sip_value: projection.future_value,
        step_up_investment: projection.total_invested,
        additional_wealth: projection.future_value - regular_sip_value,
        additional_investment: projection.total_invested - regular_sip_investment,
        final_monthly_sip: projection.final_contribution,
        yearly: projection.years,
    })
}

impl Summary for StepUpResult {
    fn summary(&self) -> Vec<SummaryLine> {
        vec![
            line("Regular SIP value", format_inr(self.regular_sip_value)),
            line("Regular SIP investment", format_inr(self.regular_sip_investment)),
            line("Step-up SIP value", format_inr(self.step_up_sip_value)),
            line("Step-up SIP investment", format_inr(self.step_up_investment)),
            line("Additional wealth", format_inr(self.additional_wealth)),
            line("Final monthly SIP", format_inr(self.final_monthly_sip)),
        ]
    }
}
