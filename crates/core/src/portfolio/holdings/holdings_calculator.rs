//! Pure value calculations for a single holding.
//!
//! These functions have no side effects and operate on an immutable
//! snapshot of the holding. All failures are explicit `Result` values so
//! callers can decide whether to surface or skip a bad position.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::PERCENT_DECIMAL_PRECISION;
use crate::errors::{CalculatorError, Result};
use crate::portfolio::holdings::{Holding, HoldingValuation};

/// Validates the numeric preconditions of a holding.
///
/// Quantity and both prices must be non-negative. A zero quantity or price
/// is valid input; the derived percentage is simply undefined then.
pub fn validate_holding(holding: &Holding) -> Result<()> {
    if holding.quantity < Decimal::ZERO {
        return Err(CalculatorError::NegativeQuantity {
            holding_id: holding.id.clone(),
            quantity: holding.quantity,
        }
        .into());
    }
    if holding.purchase_price < Decimal::ZERO {
        return Err(CalculatorError::NegativePurchasePrice {
            holding_id: holding.id.clone(),
            price: holding.purchase_price,
        }
        .into());
    }
    if holding.current_price < Decimal::ZERO {
        return Err(CalculatorError::NegativeCurrentPrice {
            holding_id: holding.id.clone(),
            price: holding.current_price,
        }
        .into());
    }
    Ok(())
}

/// Calculates market value, cost basis, and gain/loss for one holding.
///
/// * `market_value = quantity * current_price`
/// * `cost_basis = quantity * purchase_price`
/// * `gain_loss = market_value - cost_basis`
/// * `gain_loss_percent = gain_loss / cost_basis * 100`, rounded to
///   [`PERCENT_DECIMAL_PRECISION`] decimal places, `None` when the cost
///   basis is zero.
pub fn calculate_holding_valuation(holding: &Holding) -> Result<HoldingValuation> {
    validate_holding(holding)?;

    let market_value = holding.quantity * holding.current_price;
    let cost_basis = holding.quantity * holding.purchase_price;
    let gain_loss = market_value - cost_basis;

    let gain_loss_percent = if cost_basis != Decimal::ZERO {
        Some((gain_loss / cost_basis * dec!(100)).round_dp(PERCENT_DECIMAL_PRECISION))
    } else {
        None
    };

    debug!(
        "Valued holding {} ({}): market_value={}, cost_basis={}",
        holding.id, holding.symbol, market_value, cost_basis
    );

    Ok(HoldingValuation {
        market_value,
        cost_basis,
        gain_loss,
        gain_loss_percent,
    })
}
