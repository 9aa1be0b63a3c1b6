//! View models for the dashboard page.
//!
//! These flatten computed metrics and pre-formatted display strings for a
//! presentation layer; nothing here performs calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::allocation::PortfolioAllocation;
use crate::portfolio::chart::ArcSegment;
use crate::portfolio::{PortfolioCategory, PortfolioSummary};

/// One row of the holdings table / one detail card.
///
/// `gain_loss_percent` is `None` when the position's cost basis is zero;
/// the display string shows an em dash in that case.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRow {
    pub holding_id: String,
    pub symbol: String,
    pub name: String,
    pub quantity: Decimal,
    pub current_price: Decimal,
    pub market_value: Decimal,
    pub gain_loss: Decimal,
    pub gain_loss_percent: Option<Decimal>,
    pub change_24h: Decimal,
    /// Share of the portfolio total (0-100)
    pub weight: Decimal,

    // Pre-formatted display strings
    pub price_display: String,
    pub market_value_display: String,
    pub gain_loss_display: String,
    pub gain_loss_percent_display: String,
    pub change_24h_display: String,
}

/// Summary cards at the top of the dashboard.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCards {
    pub total_value_display: String,
    pub total_gain_loss_display: String,
    pub total_return_display: String,
}

/// Everything the dashboard page renders for one portfolio.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub portfolio_id: String,
    pub portfolio_name: String,
    pub category: PortfolioCategory,
    pub summary: PortfolioSummary,
    pub cards: SummaryCards,
    pub allocation: PortfolioAllocation,
    pub segments: Vec<ArcSegment>,
    pub rows: Vec<HoldingRow>,
}
