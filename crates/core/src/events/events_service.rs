use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::Result;
use crate::events::MarketEvent;

/// Data-access trait supplying market calendar events.
#[async_trait]
pub trait EventsRepositoryTrait: Send + Sync {
    async fn fetch_events(&self) -> Result<Vec<MarketEvent>>;
}

/// Trait for events service operations.
#[async_trait]
pub trait EventsServiceTrait: Send + Sync {
    /// Returns up to `limit` events, soonest first.
    async fn upcoming_events(&self, limit: usize) -> Result<Vec<MarketEvent>>;
}

#[derive(Clone)]
pub struct EventsService {
    repository: Arc<dyn EventsRepositoryTrait>,
}

impl EventsService {
    pub fn new(repository: Arc<dyn EventsRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl EventsServiceTrait for EventsService {
    async fn upcoming_events(&self, limit: usize) -> Result<Vec<MarketEvent>> {
        let mut events = self.repository.fetch_events().await?;
        events.sort_by(|a, b| a.date.cmp(&b.date));
        events.truncate(limit);
        debug!("Returning {} upcoming events", events.len());
        Ok(events)
    }
}
