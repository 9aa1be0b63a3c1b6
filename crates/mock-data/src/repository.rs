//! In-memory repository implementations over the fixture data.

use async_trait::async_trait;
use log::debug;
use trackfolio_core::auth::{User, UserRepositoryTrait};
use trackfolio_core::errors::Result;
use trackfolio_core::events::{EventsRepositoryTrait, MarketEvent};
use trackfolio_core::portfolio::{Portfolio, PortfolioRepositoryTrait};

use crate::fixtures;

/// Serves portfolio snapshots from an owned, immutable list.
pub struct MockPortfolioRepository {
    portfolios: Vec<Portfolio>,
}

impl MockPortfolioRepository {
    /// Repository preloaded with the demo portfolios.
    pub fn new() -> Self {
        Self::with_portfolios(fixtures::demo_portfolios())
    }

    pub fn with_portfolios(portfolios: Vec<Portfolio>) -> Self {
        Self { portfolios }
    }
}

impl Default for MockPortfolioRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PortfolioRepositoryTrait for MockPortfolioRepository {
    async fn fetch_portfolios(&self) -> Result<Vec<Portfolio>> {
        debug!("Serving {} mock portfolios", self.portfolios.len());
        Ok(self.portfolios.clone())
    }
}

/// Serves market events from an owned, immutable list.
pub struct MockEventsRepository {
    events: Vec<MarketEvent>,
}

impl MockEventsRepository {
    /// Repository preloaded with the demo events.
    pub fn new() -> Self {
        Self::with_events(fixtures::demo_events())
    }

    pub fn with_events(events: Vec<MarketEvent>) -> Self {
        Self { events }
    }
}

impl Default for MockEventsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventsRepositoryTrait for MockEventsRepository {
    async fn fetch_events(&self) -> Result<Vec<MarketEvent>> {
        Ok(self.events.clone())
    }
}

/// Demo user directory.
///
/// Resolves every email to the demo profile (stamped with the address that
/// was asked for), reproducing the always-succeeds sign-in of a backend-less
/// demo build.
pub struct MockUserRepository {
    profile: User,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            profile: fixtures::demo_user(),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepositoryTrait for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let mut user = self.profile.clone();
        user.email = email.to_string();
        Ok(Some(user))
    }
}
