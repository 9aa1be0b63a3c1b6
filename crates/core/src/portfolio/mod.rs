//! Portfolio module - models, aggregation, allocation, and chart geometry.

pub mod allocation;
pub mod chart;
pub mod holdings;

mod portfolio_model;
mod portfolio_service;
mod portfolio_traits;

pub use portfolio_model::*;
pub use portfolio_service::*;
pub use portfolio_traits::*;

#[cfg(test)]
mod portfolio_service_tests;
