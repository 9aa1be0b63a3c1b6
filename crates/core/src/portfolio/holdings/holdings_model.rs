use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single position (quantity of one asset) within a portfolio.
///
/// Prices are per-unit in the display currency. `change_24h` is the signed
/// 24-hour percent change reported by the data source, not derived here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub current_price: Decimal,
    pub change_24h: Decimal,
}

/// Derived value metrics for a single holding.
///
/// `gain_loss_percent` is `None` when the cost basis is zero; the
/// percentage is undefined in that case and callers decide the fallback
/// presentation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingValuation {
    pub market_value: Decimal,
    pub cost_basis: Decimal,
    pub gain_loss: Decimal,
    pub gain_loss_percent: Option<Decimal>,
}

impl HoldingValuation {
    pub fn zero() -> Self {
        HoldingValuation {
            market_value: Decimal::ZERO,
            cost_basis: Decimal::ZERO,
            gain_loss: Decimal::ZERO,
            gain_loss_percent: None,
        }
    }
}
