//! Dashboard module - assembles the view a presentation layer renders.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::*;
pub use dashboard_service::*;
