//! Portfolio allocation module - percentage-of-total breakdowns.

mod allocation_model;

pub mod allocation_calculator;

pub use allocation_calculator::*;
pub use allocation_model::*;
