//! Market event domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of market calendar event.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Earnings,
    Economic,
    Corporate,
}

/// A dated market event shown in the upcoming-events feed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: EventKind,
}
