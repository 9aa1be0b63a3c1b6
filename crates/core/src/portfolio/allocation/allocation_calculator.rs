//! Pure aggregation of holdings into portfolio-level shares.

use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::portfolio::holdings::{calculate_holding_valuation, Holding};

use super::{PortfolioAllocation, PositionAllocation};

/// Aggregates a sequence of holdings into a total value and per-position
/// percentage shares.
///
/// Position order matches the input order. A holding that fails validation
/// is excluded from the result with a logged warning rather than failing
/// the whole aggregation. When the total value is zero (empty portfolio or
/// all zero-value positions) every share is zero; there is no division by
/// zero.
pub fn allocate_holdings(holdings: &[Holding]) -> PortfolioAllocation {
    let mut valued: Vec<(&Holding, Decimal)> = Vec::with_capacity(holdings.len());

    for holding in holdings {
        match calculate_holding_valuation(holding) {
            Ok(valuation) => valued.push((holding, valuation.market_value)),
            Err(e) => {
                warn!(
                    "Excluding holding {} ({}) from allocation: {}",
                    holding.id, holding.symbol, e
                );
            }
        }
    }

    let total_value: Decimal = valued.iter().map(|(_, value)| *value).sum();

    let positions = valued
        .into_iter()
        .map(|(holding, market_value)| {
            let percentage = if total_value > Decimal::ZERO {
                (market_value / total_value * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
            } else {
                Decimal::ZERO
            };

            PositionAllocation {
                holding_id: holding.id.clone(),
                symbol: holding.symbol.clone(),
                market_value,
                percentage,
            }
        })
        .collect();

    PortfolioAllocation {
        total_value,
        positions,
    }
}
