//! Asset allocation by age, risk appetite and horizon, or a custom split

use serde::{Deserialize, Serialize};

use super::{line, Summary, SummaryLine};
use crate::error::{ensure_amount, ensure_percent, CalcError, CalcResult};
use crate::format::{format_inr, format_percent};

const GOLD_PERCENT: f64 = 5.0;
const REAL_ESTATE_PERCENT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RiskTolerance {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetClass {
    pub name: String,
    /// Share of the portfolio, whole percent
    pub allocation: f64,
}

impl AssetClass {
    pub fn new(name: &str, allocation: f64) -> Self {
        Self {
            name: name.to_string(),
            allocation,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationInput {
    pub age: u32,
    pub risk_tolerance: RiskTolerance,
    pub investment_amount: f64,
    pub years: u32,
    /// Use this split instead of the recommendation
    pub custom: Option<Vec<AssetClass>>,
}

impl Default for AllocationInput {
    fn default() -> Self {
        Self {
            age: 30,
            risk_tolerance: RiskTolerance::Moderate,
            investment_amount: 1_000_000.0,
            years: 10,
            custom: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocatedAmount {
    pub name: String,
    pub allocation: f64,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationResult {
    pub total_allocation: f64,
    pub allocations: Vec<AllocatedAmount>,
}

/// Equity starts from "100 minus age" (held within 30..=80), shifts with risk
/// appetite and horizon; gold and real estate hold 5% each and debt takes the rest.
pub fn recommended_allocation(age: u32, risk: RiskTolerance, years: u32) -> Vec<AssetClass> {
    let base_equity = (100.0 - age as f64).clamp(30.0, 80.0);

    let mut equity = match risk {
        RiskTolerance::Conservative => (base_equity - 20.0).max(20.0),
        RiskTolerance::Moderate => base_equity,
        RiskTolerance::Aggressive => (base_equity + 15.0).min(85.0),
    };

    if years < 3 {
        equity = (equity - 20.0).max(20.0);
    } else if years > 15 {
        equity = (equity + 10.0).min(80.0);
    }

    let debt = 100.0 - GOLD_PERCENT - REAL_ESTATE_PERCENT - equity;

    vec![
        AssetClass::new("Equity", equity),
        AssetClass::new("Debt", debt),
        AssetClass::new("Gold", GOLD_PERCENT),
        AssetClass::new("Real Estate", REAL_ESTATE_PERCENT),
    ]
}

pub fn calculate(input: &AllocationInput) -> CalcResult<AllocationResult> {
    ensure_amount("investment_amount", input.investment_amount)?;

    let classes = match &input.custom {
        Some(custom) => {
            for class in custom {
                ensure_percent("allocation", class.allocation)?;
            }
            let total: f64 = custom.iter().map(|c| c.allocation).sum();
            if (total - 100.0).abs() > 1e-6 {
                return Err(CalcError::AllocationMismatch { total });
            }
            custom.clone()
        }
        None => recommended_allocation(input.age, input.risk_tolerance, input.years),
    };

    let allocations: Vec<AllocatedAmount> = classes
        .into_iter()
        .map(|class| AllocatedAmount {
            amount: input.investment_amount * class.allocation / 100.0,
            name: class.name,
            allocation: class.allocation,
        })
        .collect();

    Ok(AllocationResult {
        total_allocation: allocations.iter().map(|a| a.allocation).sum(),
        allocations,
    })
}

impl Summary for AllocationResult {
    fn summary(&self) -> Vec<SummaryLine> {
        self.allocations
            .iter()
            .map(|a| line(a.name.clone(), format!("{} ({})", format_inr(a.amount), format_percent(a.allocation, 0))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equity(age: u32, risk: RiskTolerance, years: u32) -> f64 {
        recommended_allocation(age, risk, years)[0].allocation
    }

    #[test]
    fn test_age_rule() {
        assert_eq!(equity(30, RiskTolerance::Moderate, 10), 70.0);
        assert_eq!(equity(10, RiskTolerance::Moderate, 10), 80.0);
        assert_eq!(equity(85, RiskTolerance::Moderate, 10), 30.0);
    }

    #[test]
    fn test_risk_and_horizon_adjustments() {
        assert_eq!(equity(30, RiskTolerance::Conservative, 10), 50.0);
        assert_eq!(equity(30, RiskTolerance::Aggressive, 10), 85.0);
        assert_eq!(equity(30, RiskTolerance::Aggressive, 20), 80.0);
        assert_eq!(equity(60, RiskTolerance::Conservative, 2), 20.0);
        assert_eq!(equity(40, RiskTolerance::Moderate, 20), 70.0);
    }

    #[test]
    fn test_recommendation_totals_100() {
        for risk in [RiskTolerance::Conservative, RiskTolerance::Moderate, RiskTolerance::Aggressive] {
            for age in [20, 35, 50, 70] {
                for years in [1, 5, 20] {
                    let total: f64 = recommended_allocation(age, risk, years).iter().map(|c| c.allocation).sum();
                    assert_eq!(total, 100.0);
                }
            }
        }
    }

    #[test]
    fn test_amounts() {
        let result = calculate(&AllocationInput::default()).unwrap();
        assert_eq!(result.total_allocation, 100.0);
        assert_eq!(result.allocations[0].amount, 700_000.0);
        assert_eq!(result.allocations[1].amount, 200_000.0);
        assert_eq!(result.allocations[2].amount, 50_000.0);
    }

    #[test]
    fn test_custom_must_total_100() {
        let input = AllocationInput {
            custom: Some(vec![AssetClass::new("Equity", 60.0), AssetClass::new("Debt", 30.0)]),
            ..Default::default()
        };
        assert!(matches!(calculate(&input), Err(CalcError::AllocationMismatch { .. })));

        let input = AllocationInput {
            custom: Some(vec![AssetClass::new("Equity", 60.0), AssetClass::new("Debt", 40.0)]),
            ..Default::default()
        };
        assert_eq!(calculate(&input).unwrap().allocations[1].amount, 400_000.0);
    }
}
