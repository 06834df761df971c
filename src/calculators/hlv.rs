//! Human life value: present value of the income a household would lose

use serde::{Deserialize, Serialize};

use super::{line, years_between, Summary, SummaryLine};
use crate::error::{ensure_amount, ensure_percent, CalcResult};
use crate::format::format_inr_compact;
use crate::tvm::{pv_growing_stream, AnnualRate};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HumanLifeValueInput {
    pub current_age: u32,
    pub retirement_age: u32,
    /// Annual income today
    pub current_income: f64,
    pub income_growth_rate: f64,
    pub discount_rate: f64,
    /// Share of income spent on the earner, whole percent
    pub personal_expenses_percent: f64,
    pub existing_life_insurance: f64,
}

impl Default for HumanLifeValueInput {
    fn default() -> Self {
        Self {
            current_age: 30,
            retirement_age: 60,
            current_income: 1_000_000.0,
            income_growth_rate: 6.0,
            discount_rate: 8.0,
            personal_expenses_percent: 30.0,
            existing_life_insurance: 500_000.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HumanLifeValueResult {
    pub years_of_income: u32,
    pub human_life_value: f64,
    pub insurance_needed: f64,
    /// Undiscounted gross earnings to retirement
    pub total_earnings: f64,
}

pub fn calculate(input: &HumanLifeValueInput) -> CalcResult<HumanLifeValueResult> {
    let years = years_between(input.current_age, input.retirement_age)?;
    ensure_amount("current_income", input.current_income)?;
    ensure_amount("existing_life_insurance", input.existing_life_insurance)?;
    ensure_percent("personal_expenses_percent", input.personal_expenses_percent)?;
    let growth = AnnualRate::from_percent(input.income_growth_rate)?;
    let discount = AnnualRate::from_percent(input.discount_rate)?;

    let share = (100.0 - input.personal_expenses_percent) / 100.0;
    let stream = pv_growing_stream(input.current_income, growth.decimal(), discount.decimal(), share, years);

    Ok(HumanLifeValueResult {
        years_of_income: years,
        human_life_value: stream.present_value,
        insurance_needed: (stream.present_value - input.existing_life_insurance).max(0.0),
        total_earnings: stream.nominal_total,
    })
}

impl Summary for HumanLifeValueResult {
    fn summary(&self) -> Vec<SummaryLine> {
        vec![
            line("Earning years left", self.years_of_income.to_string()),
            line("Human life value", format_inr_compact(self.human_life_value)),
            line("Additional cover needed", format_inr_compact(self.insurance_needed)),
            line("Lifetime earnings", format_inr_compact(self.total_earnings)),
        ]
    }
}
