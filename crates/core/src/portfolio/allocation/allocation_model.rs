//! Allocation models for the percentage-of-total portfolio breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Share of the portfolio held by a single position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionAllocation {
    /// ID of the underlying holding
    pub holding_id: String,
    /// Ticker symbol, for legends and labels
    pub symbol: String,
    /// Market value of the position
    pub market_value: Decimal,
    /// Percentage of total portfolio value (0-100)
    pub percentage: Decimal,
}

/// Complete allocation breakdown for one portfolio.
///
/// Positions keep the input holding order; that order drives both table
/// rendering and the deterministic chart color assignment downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAllocation {
    /// Total market value across all included positions
    pub total_value: Decimal,
    /// Per-position shares, in input order
    pub positions: Vec<PositionAllocation>,
}

impl PortfolioAllocation {
    /// Creates an empty allocation with zero total value.
    pub fn empty() -> Self {
        Self {
            total_value: Decimal::ZERO,
            positions: Vec::new(),
        }
    }
}
