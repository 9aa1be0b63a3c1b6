use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::PERCENT_DECIMAL_PRECISION;
use crate::errors::{Error, Result};
use crate::portfolio::holdings::{calculate_holding_valuation, Holding};
use crate::portfolio::{Portfolio, PortfolioSummary};

use super::{PortfolioRepositoryTrait, PortfolioServiceTrait};

/// Recomputes aggregate metrics for a portfolio from its holdings.
///
/// The data source's cached totals are ignored here; this is the
/// authoritative calculation. Holdings that fail validation are excluded
/// with a logged warning. The gain/loss percentage is `None` when the total
/// cost basis is zero.
pub fn summarize_holdings(holdings: &[Holding]) -> PortfolioSummary {
    let mut total_value = Decimal::ZERO;
    let mut total_cost_basis = Decimal::ZERO;
    let mut holdings_count = 0_usize;

    for holding in holdings {
        match calculate_holding_valuation(holding) {
            Ok(valuation) => {
                total_value += valuation.market_value;
                total_cost_basis += valuation.cost_basis;
                holdings_count += 1;
            }
            Err(e) => {
                warn!(
                    "Excluding holding {} ({}) from summary: {}",
                    holding.id, holding.symbol, e
                );
            }
        }
    }

    let total_gain_loss = total_value - total_cost_basis;
    let total_gain_loss_percent = if total_cost_basis != Decimal::ZERO {
        Some((total_gain_loss / total_cost_basis * dec!(100)).round_dp(PERCENT_DECIMAL_PRECISION))
    } else {
        None
    };

    PortfolioSummary {
        total_value,
        total_cost_basis,
        total_gain_loss,
        total_gain_loss_percent,
        holdings_count,
    }
}

/// Recomputes a portfolio's summary and reconciles it against the cached
/// aggregates supplied by the data source.
///
/// The recomputed summary always wins; a cached total that drifts beyond a
/// 1e-6 relative tolerance only produces a warning.
pub fn summarize_portfolio(portfolio: &Portfolio) -> PortfolioSummary {
    let summary = summarize_holdings(&portfolio.holdings);

    let drift = (summary.total_value - portfolio.total_value).abs();
    let reference = portfolio.total_value.abs().max(Decimal::ONE);
    if drift / reference > dec!(0.000001) {
        warn!(
            "Portfolio {} cached total {} disagrees with holdings total {}; using recomputed value",
            portfolio.id, portfolio.total_value, summary.total_value
        );
    }

    summary
}

/// Service resolving portfolios from the injected repository and computing
/// their aggregate summaries.
#[derive(Clone)]
pub struct PortfolioService {
    repository: Arc<dyn PortfolioRepositoryTrait>,
}

impl PortfolioService {
    pub fn new(repository: Arc<dyn PortfolioRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn get_portfolios(&self) -> Result<Vec<Portfolio>> {
        let portfolios = self.repository.fetch_portfolios().await?;
        debug!("Fetched {} portfolios", portfolios.len());
        Ok(portfolios)
    }

    async fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio> {
        let portfolios = self.repository.fetch_portfolios().await?;
        portfolios
            .into_iter()
            .find(|p| p.id == portfolio_id)
            .ok_or_else(|| Error::NotFound(format!("Portfolio '{}'", portfolio_id)))
    }

    fn summarize(&self, portfolio: &Portfolio) -> PortfolioSummary {
        summarize_portfolio(portfolio)
    }
}
