//! Children's education planner: one SIP per child, funded partly from shared savings

use serde::{Deserialize, Serialize};

use super::{line, Summary, SummaryLine};
use crate::config::PlannerConfig;
use crate::error::{ensure_amount, CalcResult};
use crate::format::format_inr;
use crate::tvm::{compound_growth, contribution_for_gap, inflate, AnnualRate, AnnuityTiming, Frequency};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationStage {
    Primary,
    Secondary,
    HigherSecondary,
    Undergraduate,
    Postgraduate,
}

impl EducationStage {
    /// Age at which the stage begins
    pub fn start_age(self) -> u32 {
        match self {
            EducationStage::Primary => 6,
            EducationStage::Secondary => 11,
            EducationStage::HigherSecondary => 16,
            EducationStage::Undergraduate => 18,
            EducationStage::Postgraduate => 22,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Child {
    pub name: String,
    pub current_age: u32,
    pub stage: EducationStage,
    /// Cost of the stage in today's rupees
    pub estimated_cost: f64,
}

impl Child {
    pub fn years_to_education(&self) -> u32 {
        self.stage.start_age().saturating_sub(self.current_age)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationInput {
    pub children: Vec<Child>,
    pub education_inflation: f64,
    pub expected_return: f64,
    pub current_savings: f64,
}

impl Default for EducationInput {
    fn default() -> Self {
        Self {
            children: vec![Child {
                name: "Child 1".to_string(),
                current_age: 5,
                stage: EducationStage::Undergraduate,
                estimated_cost: 1_500_000.0,
            }],
            education_inflation: 8.0,
            expected_return: 12.0,
            current_savings: 50_000.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildPlan {
    pub name: String,
    pub stage: EducationStage,
    pub years_to_education: u32,
    pub future_cost: f64,
    pub allocated_savings: f64,
    pub monthly_investment: f64,
    pub total_investment: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationResult {
    pub total_monthly_investment: f64,
    /// Future cost of the stages still ahead
    pub total_future_cost: f64,
    /// Sum of each child's SIP over that child's own horizon
    pub total_investment: f64,
    /// Total monthly SIP times the longest horizon, as the site used to report it
    pub legacy_total_investment: f64,
    pub children: Vec<ChildPlan>,
}

pub fn calculate(input: &EducationInput, config: &PlannerConfig) -> CalcResult<EducationResult> {
    ensure_amount("current_savings", input.current_savings)?;
    let inflation = AnnualRate::from_percent(input.education_inflation)?;
    let rate = AnnualRate::from_percent(input.expected_return)?;
    let monthly_rate = rate.monthly();

    let mut children = input.children.clone();
    children.sort_by_key(Child::years_to_education);

    let mut pool = input.current_savings;
    let mut plans = Vec::with_capacity(children.len());

    for child in children {
        ensure_amount("estimated_cost", child.estimated_cost)?;
        let years = child.years_to_education();

        // Already at or past the stage: nothing left to save for
        if years == 0 {
            plans.push(ChildPlan {
                name: child.name,
                stage: child.stage,
                years_to_education: 0,
                future_cost: child.estimated_cost,
                allocated_savings: 0.0,
                monthly_investment: 0.0,
                total_investment: 0.0,
            });
            continue;
        }

        let months = Frequency::Monthly.periods(years);
        let future_cost = inflate(child.estimated_cost, inflation, years);

        let allocated_savings = pool.min(future_cost * config.education_savings_cap);
        pool -= allocated_savings;

        let projected = compound_growth(allocated_savings, monthly_rate, months);
        let shortfall = (future_cost - projected).max(0.0);
        let monthly_investment = contribution_for_gap(shortfall, monthly_rate, months, AnnuityTiming::Ordinary)?;

        plans.push(ChildPlan {
            name: child.name,
            stage: child.stage,
            years_to_education: years,
            future_cost,
            allocated_savings,
            monthly_investment,
            total_investment: monthly_investment * months as f64,
        });
    }

    let total_monthly_investment: f64 = plans.iter().map(|p| p.monthly_investment).sum();
    let longest = plans.iter().map(|p| p.years_to_education).max().unwrap_or(0);

    Ok(EducationResult {
        total_monthly_investment,
        total_future_cost: plans
            .iter()
            .filter(|p| p.years_to_education > 0)
            .map(|p| p.future_cost)
            .sum(),
        total_investment: plans.iter().map(|p| p.total_investment).sum(),
        legacy_total_investment: total_monthly_investment * Frequency::Monthly.periods(longest) as f64,
        children: plans,
    })
}

impl Summary for EducationResult {
    fn summary(&self) -> Vec<SummaryLine> {
        let mut lines = vec![
            line("Total future cost", format_inr(self.total_future_cost)),
            line("Total monthly SIP", format_inr(self.total_monthly_investment)),
            line("Total investment", format_inr(self.total_investment)),
        ];
        for child in &self.children {
            lines.push(line(
                format!("{} ({:?} in {}y)", child.name, child.stage, child.years_to_education),
                format!("{} / month", format_inr(child.monthly_investment)),
            ));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn child(name: &str, age: u32, stage: EducationStage, cost: f64) -> Child {
        Child {
            name: name.to_string(),
            current_age: age,
            stage,
            estimated_cost: cost,
        }
    }

    #[test]
    fn test_single_child() {
        let result = calculate(&EducationInput::default(), &PlannerConfig::default()).unwrap();
        let plan = &result.children[0];

        assert_eq!(plan.years_to_education, 13);
        let future_cost = 1_500_000.0 * 1.08_f64.powi(13);
        assert_relative_eq!(plan.future_cost, future_cost, max_relative = 1e-12);
        assert_eq!(plan.allocated_savings, 50_000.0);

        let projected = 50_000.0 * 1.01_f64.powi(156);
        let factor = (1.01_f64.powi(156) - 1.0) / 0.01;
        assert_relative_eq!(plan.monthly_investment, (future_cost - projected) / factor, max_relative = 1e-10);
    }

    #[test]
    fn test_nearest_child_planned_first() {
        let input = EducationInput {
            children: vec![
                child("Younger", 2, EducationStage::Undergraduate, 1_000_000.0),
                child("Older", 14, EducationStage::Undergraduate, 1_000_000.0),
            ],
            current_savings: 10_000_000.0,
            ..Default::default()
        };
        let result = calculate(&input, &PlannerConfig::default()).unwrap();
        assert_eq!(result.children[0].name, "Older");

        // Savings cap is 40% of each child's future cost
        let older = &result.children[0];
        assert_relative_eq!(older.allocated_savings, older.future_cost * 0.4, max_relative = 1e-12);
    }

    #[test]
    fn test_child_past_stage() {
        let input = EducationInput {
            children: vec![child("Grown", 20, EducationStage::Undergraduate, 800_000.0)],
            ..Default::default()
        };
        let result = calculate(&input, &PlannerConfig::default()).unwrap();
        assert_eq!(result.children[0].years_to_education, 0);
        assert_eq!(result.children[0].monthly_investment, 0.0);
        assert_eq!(result.children[0].future_cost, 800_000.0);
        assert_eq!(result.total_future_cost, 0.0);
        assert_eq!(result.legacy_total_investment, 0.0);
    }
}
