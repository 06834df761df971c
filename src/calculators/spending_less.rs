//! What trimming everyday expenses is worth once the savings are invested monthly

use serde::{Deserialize, Serialize};

use super::{horizon_months, line, Summary, SummaryLine};
use crate::error::{ensure_amount, CalcError, CalcResult};
use crate::format::format_inr;
use crate::tvm::{annuity_future_value, AnnualRate, AnnuityTiming};

/// How often an expense recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpendFrequency {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl SpendFrequency {
    pub fn per_year(self) -> f64 {
        match self {
            SpendFrequency::Daily => 365.0,
            SpendFrequency::Weekly => 52.0,
            SpendFrequency::Monthly => 12.0,
            SpendFrequency::Yearly => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub name: String,
    /// Spend per occurrence today
    pub current_amount: f64,
    /// Spend per occurrence after cutting back
    pub reduced_amount: f64,
    #[serde(default)]
    pub frequency: SpendFrequency,
    #[serde(default)]
    pub category: String,
}

impl Expense {
    pub fn new(
        name: impl Into<String>,
        current_amount: f64,
        reduced_amount: f64,
        frequency: SpendFrequency,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            current_amount,
            reduced_amount,
            frequency,
            category: category.into(),
        }
    }

    pub fn annual_savings(&self) -> f64 {
        (self.current_amount - self.reduced_amount) * self.frequency.per_year()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpendingLessInput {
    pub expenses: Vec<Expense>,
    pub expected_return: f64,
    pub years: u32,
}

impl Default for SpendingLessInput {
    fn default() -> Self {
        Self {
            expenses: vec![
                Expense::new("Coffee", 150.0, 100.0, SpendFrequency::Daily, "Food & Dining"),
                Expense::new("Movie Tickets", 800.0, 400.0, SpendFrequency::Monthly, "Entertainment"),
                Expense::new("Fuel", 5_000.0, 4_000.0, SpendFrequency::Monthly, "Transportation"),
            ],
            expected_return: 12.0,
            years: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseSavings {
    pub name: String,
    pub category: String,
    pub annual_savings: f64,
    pub future_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendingLessResult {
    pub daily_savings: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    /// Savings set aside over the horizon, before returns
    pub total_saved: f64,
    pub future_value: f64,
    pub investment_gain: f64,
    pub items: Vec<ExpenseSavings>,
}

/// Each expense's yearly saving is invested in equal monthly parts at month end.
pub fn calculate(input: &SpendingLessInput) -> CalcResult<SpendingLessResult> {
    let rate = AnnualRate::from_percent(input.expected_return)?;
    let months = horizon_months(input.years)?;
    for expense in &input.expenses {
        ensure_amount("current_amount", expense.current_amount)?;
        ensure_amount("reduced_amount", expense.reduced_amount)?;
        if expense.reduced_amount > expense.current_amount {
            return Err(CalcError::invalid(
                "reduced_amount",
                format!("{} would cost more after cutting back", expense.name),
            ));
        }
    }

    let invest = |annual: f64| annuity_future_value(annual / 12.0, rate.monthly(), months, AnnuityTiming::Ordinary);

    let items: Vec<ExpenseSavings> = input
        .expenses
        .iter()
        .map(|expense| {
            let annual_savings = expense.annual_savings();
            ExpenseSavings {
                name: expense.name.clone(),
                category: expense.category.clone(),
                annual_savings,
                future_value: invest(annual_savings),
            }
        })
        .collect();

    let annual_savings: f64 = items.iter().map(|item| item.annual_savings).sum();
    let future_value = invest(annual_savings);
    let total_saved = annual_savings / 12.0 * months as f64;

    Ok(SpendingLessResult {
        daily_savings: annual_savings / 365.0,
        monthly_savings: annual_savings / 12.0,
        annual_savings,
        total_saved,
        future_value,
        investment_gain: future_value - total_saved,
        items,
    })
}

impl Summary for SpendingLessResult {
    fn summary(&self) -> Vec<SummaryLine> {
        vec![
            line("Saved per day", format_inr(self.daily_savings)),
            line("Saved per month", format_inr(self.monthly_savings)),
            line("Saved per year", format_inr(self.annual_savings)),
            line("Total set aside", format_inr(self.total_saved)),
            line("Invested value", format_inr(self.future_value)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_cutbacks() {
        let result = calculate(&SpendingLessInput::default()).unwrap();
        // Coffee 50 × 365, movies 400 × 12, fuel 1,000 × 12
        assert_relative_eq!(result.annual_savings, 35_050.0, max_relative = 1e-12);
        assert_relative_eq!(result.monthly_savings, 35_050.0 / 12.0, max_relative = 1e-12);
        assert_relative_eq!(result.daily_savings, 35_050.0 / 365.0, max_relative = 1e-12);

        let expected = annuity_future_value(35_050.0 / 12.0, 0.01, 120, AnnuityTiming::Ordinary);
        assert_relative_eq!(result.future_value, expected, max_relative = 1e-12);
        assert_relative_eq!(result.total_saved, 350_500.0, max_relative = 1e-12);
        assert!(result.investment_gain > 0.0);
    }

    #[test]
    fn test_items_add_up_to_total() {
        let result = calculate(&SpendingLessInput::default()).unwrap();
        assert_eq!(result.items.len(), 3);
        assert_relative_eq!(result.items[0].annual_savings, 18_250.0, max_relative = 1e-12);
        assert_relative_eq!(
            result.items.iter().map(|item| item.future_value).sum::<f64>(),
            result.future_value,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_return_is_plain_sum() {
        let input = SpendingLessInput {
            expenses: vec![Expense::new("Gym", 2_000.0, 1_000.0, SpendFrequency::Weekly, "Health")],
            expected_return: 0.0,
            years: 5,
        };
        let result = calculate(&input).unwrap();
        assert_relative_eq!(result.future_value, 52_000.0 * 5.0, max_relative = 1e-12);
        assert_relative_eq!(result.investment_gain, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let pricier = SpendingLessInput {
            expenses: vec![Expense::new("Lunch", 200.0, 250.0, SpendFrequency::Daily, "Food")],
            ..Default::default()
        };
        assert!(matches!(
            calculate(&pricier),
            Err(CalcError::InvalidInput { field: "reduced_amount", .. })
        ));

        let forever = SpendingLessInput {
            years: 1_000,
            ..Default::default()
        };
        assert!(calculate(&forever).is_err());
    }
}
