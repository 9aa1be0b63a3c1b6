//! Market events module - the upcoming-events feed.

mod events_model;
mod events_service;

pub use events_model::*;
pub use events_service::*;
