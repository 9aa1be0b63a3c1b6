//! Donut chart module - arc geometry for the allocation visualization.

mod chart_model;

pub mod chart_calculator;

pub use chart_calculator::*;
pub use chart_model::*;
