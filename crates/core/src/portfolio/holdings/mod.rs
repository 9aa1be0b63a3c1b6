//! Holdings module - position models and the value calculator.

mod holdings_model;

pub mod holdings_calculator;

pub use holdings_calculator::*;
pub use holdings_model::*;

#[cfg(test)]
mod holdings_calculator_tests;
