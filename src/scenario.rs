//! Batch evaluation of independent SIP scenarios
//!
//! Holds one [`PlannerConfig`] and fans scenarios out across threads with rayon.
//! Scenarios share nothing, so results come back in input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::calculators::sip::{self, SipInput, SipResult};
use crate::config::PlannerConfig;
use crate::error::CalcResult;

/// One grid point of a SIP sweep, flattened for CSV export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    pub monthly_investment: f64,
    pub expected_return: f64,
    pub years: u32,
    pub future_value: f64,
    pub total_investment: f64,
    pub total_returns: f64,
    /// Future value over total invested
    pub multiplier: f64,
}

impl SweepRow {
    fn new(input: &SipInput, result: &SipResult) -> Self {
        let multiplier = if result.total_investment > 0.0 {
            result.future_value / result.total_investment
        } else {
            0.0
        };
        Self {
            monthly_investment: input.monthly_investment,
            expected_return: input.expected_return,
            years: input.years,
            future_value: result.future_value,
            total_investment: result.total_investment,
            total_returns: result.total_returns,
            multiplier,
        }
    }
}

/// Axes of a SIP grid; every combination is evaluated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipGrid {
    pub monthly_investments: Vec<f64>,
    /// Annual returns, whole percent
    pub returns: Vec<f64>,
    pub years: Vec<u32>,
}

impl SipGrid {
    pub fn len(&self) -> usize {
        self.monthly_investments.len() * self.returns.len() * self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grid points ordered by amount, then return, then years
    pub fn inputs(&self) -> Vec<SipInput> {
        let mut inputs = Vec::with_capacity(self.len());
        for &monthly_investment in &self.monthly_investments {
            for &expected_return in &self.returns {
                for &years in &self.years {
                    inputs.push(SipInput {
                        monthly_investment,
                        expected_return,
                        years,
                    });
                }
            }
        }
        inputs
    }
}

/// Runs many SIP projections against one set of planner defaults
///
/// # Example
/// ```
/// use springpad_calculators::scenario::{ScenarioRunner, SipGrid};
///
/// let runner = ScenarioRunner::default();
/// let grid = SipGrid {
///     monthly_investments: vec![5_000.0, 10_000.0],
///     returns: vec![10.0, 12.0],
///     years: vec![10, 20],
/// };
/// let rows = runner.sip_grid(&grid).unwrap();
/// assert_eq!(rows.len(), 8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    config: PlannerConfig,
}

impl ScenarioRunner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// SIP at the configured expected return
    pub fn run(&self, monthly_investment: f64, years: u32) -> CalcResult<SipResult> {
        sip::calculate(&SipInput {
            monthly_investment,
            expected_return: self.config.expected_return,
            years,
        })
    }

    /// Evaluate every input in parallel; the first invalid input fails the batch
    pub fn run_batch(&self, inputs: &[SipInput]) -> CalcResult<Vec<SipResult>> {
        inputs.par_iter().map(sip::calculate).collect()
    }

    /// Evaluate a full grid and flatten each point into a [`SweepRow`]
    pub fn sip_grid(&self, grid: &SipGrid) -> CalcResult<Vec<SweepRow>> {
        let inputs = grid.inputs();
        log::info!("Evaluating {} SIP scenarios", inputs.len());

        inputs
            .par_iter()
            .map(|input| sip::calculate(input).map(|result| SweepRow::new(input, &result)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid() -> SipGrid {
        SipGrid {
            monthly_investments: vec![5_000.0, 10_000.0],
            returns: vec![8.0, 12.0],
            years: vec![10, 15, 20],
        }
    }

    #[test]
    fn test_grid_order_and_size() {
        let rows = ScenarioRunner::default().sip_grid(&grid()).unwrap();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].monthly_investment, 5_000.0);
        assert_eq!(rows[0].expected_return, 8.0);
        assert_eq!(rows[0].years, 10);
        assert_eq!(rows[11].monthly_investment, 10_000.0);
        assert_eq!(rows[11].years, 20);
    }

    #[test]
    fn test_higher_return_grows_more() {
        let rows = ScenarioRunner::default().sip_grid(&grid()).unwrap();
        // Same amount and horizon, 8% vs 12%
        assert!(rows[3].future_value > rows[0].future_value);
        assert!(rows.iter().all(|r| r.multiplier >= 1.0));
    }

    #[test]
    fn test_run_uses_configured_return() {
        let runner = ScenarioRunner::default();
        let result = runner.run(5_000.0, 15).unwrap();
        assert_relative_eq!(result.future_value, 2_522_880.0, epsilon = 1.0);
    }

    #[test]
    fn test_batch_rejects_bad_input() {
        let inputs = vec![
            SipInput::default(),
            SipInput {
                years: 0,
                ..Default::default()
            },
        ];
        assert!(ScenarioRunner::default().run_batch(&inputs).is_err());
    }
}
