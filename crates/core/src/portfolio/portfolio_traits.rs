//! Repository and service traits for portfolios.

use async_trait::async_trait;

use crate::errors::Result;
use crate::portfolio::{Portfolio, PortfolioSummary};

/// Data-access trait supplying portfolio snapshots.
///
/// The core never owns fixture or persisted data; whatever collaborator
/// implements this trait (an in-memory data set, a future persistence or
/// pricing service) hands the core immutable snapshots to compute over.
#[async_trait]
pub trait PortfolioRepositoryTrait: Send + Sync {
    async fn fetch_portfolios(&self) -> Result<Vec<Portfolio>>;
}

/// Trait for portfolio service operations.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    async fn get_portfolios(&self) -> Result<Vec<Portfolio>>;
    async fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio>;
    fn summarize(&self, portfolio: &Portfolio) -> PortfolioSummary;
}
