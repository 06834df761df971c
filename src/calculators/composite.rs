//! Multi-goal planner: share current savings across prioritized goals and
//! solve a monthly SIP for each goal's shortfall

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::Path;

use super::{horizon_months, line, Summary, SummaryLine};
use crate::config::PlannerConfig;
use crate::error::{ensure_amount, CalcError, CalcResult};
use crate::format::format_inr;
use crate::tvm::{compound_growth, contribution_for_gap, AnnualRate, AnnuityTiming};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    fn rank(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub amount: f64,
    pub years: u32,
    pub priority: Priority,
}

impl Goal {
    pub fn new(name: impl Into<String>, amount: f64, years: u32, priority: Priority) -> Self {
        Self {
            name: name.into(),
            amount,
            years,
            priority,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeInput {
    pub goals: Vec<Goal>,
    pub expected_return: f64,
    pub current_savings: f64,
}

impl Default for CompositeInput {
    fn default() -> Self {
        Self {
            goals: vec![
                Goal::new("Emergency Fund", 500_000.0, 2, Priority::High),
                Goal::new("House Down Payment", 2_000_000.0, 5, Priority::High),
            ],
            expected_return: 12.0,
            current_savings: 100_000.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalBreakdown {
    pub name: String,
    pub priority: Priority,
    pub years: u32,
    pub amount: f64,
    /// Current savings earmarked for this goal
    pub allocated_savings: f64,
    pub projected_savings: f64,
    pub shortfall: f64,
    pub monthly_investment: f64,
    /// Monthly investment over this goal's own horizon
    pub total_investment: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeResult {
    pub total_monthly_investment: f64,
    pub total_goal_amount: f64,
    /// Sum of each goal's SIP over its own horizon
    pub total_investment: f64,
    /// Total monthly SIP times the longest horizon, as the site used to report it
    pub legacy_total_investment: f64,
    pub unallocated_savings: f64,
    /// Goals in planning order
    pub goals: Vec<GoalBreakdown>,
}

/// Planning order: higher priority first, then nearer deadline
pub fn sort_goals(goals: &mut [Goal]) {
    goals.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.years.cmp(&b.years)));
}

pub fn calculate(input: &CompositeInput, config: &PlannerConfig) -> CalcResult<CompositeResult> {
    ensure_amount("current_savings", input.current_savings)?;
    let rate = AnnualRate::from_percent(input.expected_return)?;
    let monthly_rate = rate.monthly();

    let mut goals = input.goals.clone();
    sort_goals(&mut goals);

    let mut pool = input.current_savings;
    let mut breakdown = Vec::with_capacity(goals.len());

    for goal in goals {
        ensure_amount("goal amount", goal.amount)?;
        let months = horizon_months(goal.years)?;

        let allocated_savings = pool.min(goal.amount * config.goal_savings_cap);
        pool -= allocated_savings;

        let projected_savings = compound_growth(allocated_savings, monthly_rate, months);
        let shortfall = (goal.amount - projected_savings).max(0.0);
        let monthly_investment = contribution_for_gap(shortfall, monthly_rate, months, AnnuityTiming::Ordinary)?;

        log::debug!(
            "Goal '{}' ({:?}, {}y): allocated {:.0}, SIP {:.0}",
            goal.name,
            goal.priority,
            goal.years,
            allocated_savings,
            monthly_investment
        );

        breakdown.push(GoalBreakdown {
            name: goal.name,
            priority: goal.priority,
            years: goal.years,
            amount: goal.amount,
            allocated_savings,
            projected_savings,
            shortfall,
            monthly_investment,
            total_investment: monthly_investment * months as f64,
        });
    }

    let total_monthly_investment: f64 = breakdown.iter().map(|g| g.monthly_investment).sum();
    let longest_months = breakdown.iter().map(|g| g.years).max().unwrap_or(0) as f64 * 12.0;

    Ok(CompositeResult {
        total_monthly_investment,
        total_goal_amount: breakdown.iter().map(|g| g.amount).sum(),
        total_investment: breakdown.iter().map(|g| g.total_investment).sum(),
        legacy_total_investment: total_monthly_investment * longest_months,
        unallocated_savings: pool,
        goals: breakdown,
    })
}

impl Summary for CompositeResult {
    fn summary(&self) -> Vec<SummaryLine> {
        let mut lines = vec![
            line("Total goal amount", format_inr(self.total_goal_amount)),
            line("Total monthly SIP", format_inr(self.total_monthly_investment)),
            line("Total investment", format_inr(self.total_investment)),
        ];
        for goal in &self.goals {
            lines.push(line(
                format!("{} ({:?}, {}y)", goal.name, goal.priority, goal.years),
                format!("{} / month", format_inr(goal.monthly_investment)),
            ));
        }
        lines
    }
}

/// Raw CSV row: `name,amount,years,priority`
#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    amount: f64,
    years: u32,
    priority: String,
}

impl CsvRow {
    fn into_goal(self) -> CalcResult<Goal> {
        let priority = match self.priority.trim().to_ascii_lowercase().as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            other => return Err(CalcError::invalid("priority", format!("unknown priority: {}", other))),
        };
        Ok(Goal::new(self.name, self.amount, self.years, priority))
    }
}

/// Load goals from any CSV reader with a `name,amount,years,priority` header
pub fn load_goals_from_reader<R: std::io::Read>(reader: R) -> CalcResult<Vec<Goal>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut goals = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        goals.push(row.into_goal()?);
    }

    Ok(goals)
}

/// Load goals from a CSV file
pub fn load_goals<P: AsRef<Path>>(path: P) -> CalcResult<Vec<Goal>> {
    let file = std::fs::File::open(path)?;
    load_goals_from_reader(file)
}
