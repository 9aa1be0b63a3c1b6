use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::holdings::Holding;

/// Closed set of portfolio categories.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PortfolioCategory {
    Stocks,
    Crypto,
    Custom,
}

impl PortfolioCategory {
    /// Display label as shown in the sidebar and dashboard header.
    pub fn label(&self) -> &'static str {
        match self {
            PortfolioCategory::Stocks => "STOCKS",
            PortfolioCategory::Crypto => "CRYPTO",
            PortfolioCategory::Custom => "CUSTOM",
        }
    }
}

/// A named collection of holdings with aggregate value metrics.
///
/// The `total_*` fields are whatever the data source reported alongside the
/// holdings. They are advisory: [`summarize_portfolio`] recomputes the
/// aggregates from the holdings and warns when the cached values drift.
///
/// [`summarize_portfolio`]: crate::portfolio::summarize_portfolio
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: PortfolioCategory,
    pub total_value: Decimal,
    pub total_gain_loss: Decimal,
    pub total_gain_loss_percent: Decimal,
    pub holdings: Vec<Holding>,
}

/// Recomputed aggregate metrics for one portfolio.
///
/// `total_gain_loss_percent` is `None` when the total cost basis is zero
/// (empty portfolio or free positions only).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_value: Decimal,
    pub total_cost_basis: Decimal,
    pub total_gain_loss: Decimal,
    pub total_gain_loss_percent: Option<Decimal>,
    pub holdings_count: usize,
}

impl PortfolioSummary {
    pub fn zero() -> Self {
        PortfolioSummary {
            total_value: Decimal::ZERO,
            total_cost_basis: Decimal::ZERO,
            total_gain_loss: Decimal::ZERO,
            total_gain_loss_percent: None,
            holdings_count: 0,
        }
    }
}
