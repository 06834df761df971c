//! Net worth: what you own minus what you owe, broken down by category

use serde::{Deserialize, Serialize};

use super::{line, Summary, SummaryLine};
use crate::error::{ensure_amount, CalcResult};
use crate::format::{format_inr, format_percent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetCategory {
    RealEstate,
    Investments,
    CashAndSavings,
    PersonalAssets,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiabilityCategory {
    HomeLoan,
    PersonalLoan,
    CreditCard,
    VehicleLoan,
    Other,
}

/// A named holding or debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<C> {
    pub name: String,
    pub value: f64,
    pub category: C,
}

impl<C> Entry<C> {
    pub fn new(name: impl Into<String>, value: f64, category: C) -> Self {
        Self {
            name: name.into(),
            value,
            category,
        }
    }
}

pub type Asset = Entry<AssetCategory>;
pub type Liability = Entry<LiabilityCategory>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetWorthInput {
    pub assets: Vec<Asset>,
    pub liabilities: Vec<Liability>,
}

impl Default for NetWorthInput {
    fn default() -> Self {
        Self {
            assets: vec![
                Asset::new("Primary Residence", 5_000_000.0, AssetCategory::RealEstate),
                Asset::new("Savings Account", 200_000.0, AssetCategory::CashAndSavings),
                Asset::new("Mutual Funds", 500_000.0, AssetCategory::Investments),
            ],
            liabilities: vec![
                Liability::new("Home Loan", 3_000_000.0, LiabilityCategory::HomeLoan),
                Liability::new("Credit Card Debt", 50_000.0, LiabilityCategory::CreditCard),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal<C> {
    pub category: C,
    pub total: f64,
    /// Share of its side (assets or liabilities), whole percent
    pub share: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetWorthResult {
    pub total_assets: f64,
    pub total_liabilities: f64,
    /// Negative when debts exceed holdings
    pub net_worth: f64,
    pub assets_by_category: Vec<CategoryTotal<AssetCategory>>,
    pub liabilities_by_category: Vec<CategoryTotal<LiabilityCategory>>,
}

pub fn calculate(input: &NetWorthInput) -> CalcResult<NetWorthResult> {
    for asset in &input.assets {
        ensure_amount("asset value", asset.value)?;
    }
    for liability in &input.liabilities {
        ensure_amount("liability value", liability.value)?;
    }

    let (total_assets, assets_by_category) = by_category(&input.assets);
    let (total_liabilities, liabilities_by_category) = by_category(&input.liabilities);

    Ok(NetWorthResult {
        total_assets,
        total_liabilities,
        net_worth: total_assets - total_liabilities,
        assets_by_category,
        liabilities_by_category,
    })
}

/// Sum entries per category, keeping categories in the order they first appear
fn by_category<C: Copy + PartialEq>(entries: &[Entry<C>]) -> (f64, Vec<CategoryTotal<C>>) {
    let mut totals: Vec<CategoryTotal<C>> = Vec::new();
    for entry in entries {
        match totals.iter_mut().find(|t| t.category == entry.category) {
            Some(total) => total.total += entry.value,
            None => totals.push(CategoryTotal {
                category: entry.category,
                total: entry.value,
                share: 0.0,
            }),
        }
    }

    let grand_total: f64 = totals.iter().map(|t| t.total).sum();
    if grand_total > 0.0 {
        for total in &mut totals {
            total.share = total.total / grand_total * 100.0;
        }
    }
    (grand_total, totals)
}

impl Summary for NetWorthResult {
    fn summary(&self) -> Vec<SummaryLine> {
        let mut lines = vec![
            line("Total assets", format_inr(self.total_assets)),
            line("Total liabilities", format_inr(self.total_liabilities)),
            line("Net worth", format_inr(self.net_worth)),
        ];
        for total in &self.assets_by_category {
            lines.push(line(
                format!("  {:?}", total.category),
                format!("{} ({})", format_inr(total.total), format_percent(total.share, 1)),
            ));
        }
        for total in &self.liabilities_by_category {
            lines.push(line(
                format!("  {:?}", total.category),
                format!("{} ({})", format_inr(total.total), format_percent(total.share, 1)),
            ));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_household() {
        let result = calculate(&NetWorthInput::default()).unwrap();
        assert_eq!(result.total_assets, 5_700_000.0);
        assert_eq!(result.total_liabilities, 3_050_000.0);
        assert_eq!(result.net_worth, 2_650_000.0);

        let categories: Vec<_> = result.assets_by_category.iter().map(|t| t.category).collect();
        assert_eq!(
            categories,
            [AssetCategory::RealEstate, AssetCategory::CashAndSavings, AssetCategory::Investments]
        );
        let shares: f64 = result.assets_by_category.iter().map(|t| t.share).sum();
        assert_relative_eq!(shares, 100.0, max_relative = 1e-12);
    }

    #[test]
    fn test_same_category_is_merged() {
        let input = NetWorthInput {
            assets: vec![
                Asset::new("Equity funds", 300_000.0, AssetCategory::Investments),
                Asset::new("Gold", 100_000.0, AssetCategory::Other),
                Asset::new("Debt funds", 200_000.0, AssetCategory::Investments),
            ],
            liabilities: Vec::new(),
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.assets_by_category.len(), 2);
        assert_eq!(result.assets_by_category[0].total, 500_000.0);
        assert!(result.liabilities_by_category.is_empty());
        assert_eq!(result.net_worth, 600_000.0);
    }

    #[test]
    fn test_debts_can_exceed_assets() {
        let input = NetWorthInput {
            assets: vec![Asset::new("Car", 400_000.0, AssetCategory::PersonalAssets)],
            liabilities: vec![Liability::new("Car loan", 650_000.0, LiabilityCategory::VehicleLoan)],
        };
        assert_eq!(calculate(&input).unwrap().net_worth, -250_000.0);
    }

    #[test]
    fn test_json_input_and_bad_value() {
        let input: NetWorthInput = serde_json::from_str(
            r#"{"assets": [{"name": "FD", "value": 100000, "category": "CashAndSavings"}]}"#,
        )
        .unwrap();
        assert_eq!(input.assets.len(), 1);
        assert_eq!(input.liabilities.len(), 2);

        let bad = NetWorthInput {
            liabilities: vec![Liability::new("Loan", f64::NAN, LiabilityCategory::PersonalLoan)],
            ..Default::default()
        };
        assert!(matches!(calculate(&bad), Err(CalcError::InvalidInput { .. })));
    }
}
