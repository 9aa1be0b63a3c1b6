use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::portfolio::allocation::{allocate_holdings, PortfolioAllocation};
use crate::portfolio::chart::build_donut_segments;
use crate::portfolio::holdings::calculate_holding_valuation;
use crate::portfolio::{Portfolio, PortfolioServiceTrait};
use crate::utils::format_utils::{format_currency, format_signed_percent};

use super::{DashboardView, HoldingRow, SummaryCards};

/// Placeholder rendered where a percentage is undefined.
const UNDEFINED_DISPLAY: &str = "—";

/// Trait for dashboard view assembly.
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    async fn get_dashboard(&self, portfolio_id: &str) -> Result<DashboardView>;
}

/// Composes aggregation, allocation, chart geometry, and formatting into
/// the view the dashboard page renders.
#[derive(Clone)]
pub struct DashboardService {
    portfolio_service: Arc<dyn PortfolioServiceTrait>,
}

impl DashboardService {
    pub fn new(portfolio_service: Arc<dyn PortfolioServiceTrait>) -> Self {
        Self { portfolio_service }
    }

    fn build_rows(&self, portfolio: &Portfolio, allocation: &PortfolioAllocation) -> Vec<HoldingRow> {
        portfolio
            .holdings
            .iter()
            .filter_map(|holding| {
                let valuation = match calculate_holding_valuation(holding) {
                    Ok(valuation) => valuation,
                    Err(e) => {
                        warn!(
                            "Excluding holding {} ({}) from dashboard: {}",
                            holding.id, holding.symbol, e
                        );
                        return None;
                    }
                };

                let weight = allocation
                    .positions
                    .iter()
                    .find(|position| position.holding_id == holding.id)
                    .map(|position| position.percentage)
                    .unwrap_or(Decimal::ZERO);

                let gain_loss_percent_display = valuation
                    .gain_loss_percent
                    .map(format_signed_percent)
                    .unwrap_or_else(|| UNDEFINED_DISPLAY.to_string());

                Some(HoldingRow {
                    holding_id: holding.id.clone(),
                    symbol: holding.symbol.clone(),
                    name: holding.name.clone(),
                    quantity: holding.quantity,
                    current_price: holding.current_price,
                    market_value: valuation.market_value,
                    gain_loss: valuation.gain_loss,
                    gain_loss_percent: valuation.gain_loss_percent,
                    change_24h: holding.change_24h,
                    weight,
                    price_display: format_currency(holding.current_price),
                    market_value_display: format_currency(valuation.market_value),
                    gain_loss_display: format_currency(valuation.gain_loss),
                    gain_loss_percent_display,
                    change_24h_display: format_signed_percent(holding.change_24h),
                })
            })
            .collect()
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn get_dashboard(&self, portfolio_id: &str) -> Result<DashboardView> {
        let portfolio = self.portfolio_service.get_portfolio(portfolio_id).await?;
        debug!(
            "Assembling dashboard for portfolio {} ({} holdings)",
            portfolio.id,
            portfolio.holdings.len()
        );

        let summary = self.portfolio_service.summarize(&portfolio);
        let allocation = allocate_holdings(&portfolio.holdings);
        let segments = build_donut_segments(&allocation);
        let rows = self.build_rows(&portfolio, &allocation);

        let cards = SummaryCards {
            total_value_display: format_currency(summary.total_value),
            total_gain_loss_display: format_currency(summary.total_gain_loss),
            total_return_display: summary
                .total_gain_loss_percent
                .map(format_signed_percent)
                .unwrap_or_else(|| UNDEFINED_DISPLAY.to_string()),
        };

        Ok(DashboardView {
            portfolio_id: portfolio.id,
            portfolio_name: portfolio.name,
            category: portfolio.category,
            summary,
            cards,
            allocation,
            segments,
            rows,
        })
    }
}
