//! Demo data literals.
//!
//! Cached portfolio aggregates here are consistent with their holdings;
//! the summary service recomputes them anyway and treats these as
//! advisory.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use trackfolio_core::auth::{User, UserRole};
use trackfolio_core::events::{EventKind, MarketEvent};
use trackfolio_core::portfolio::holdings::Holding;
use trackfolio_core::portfolio::{Portfolio, PortfolioCategory};

fn holding(
    id: &str,
    symbol: &str,
    name: &str,
    quantity: Decimal,
    purchase_price: Decimal,
    current_price: Decimal,
    change_24h: Decimal,
) -> Holding {
    Holding {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        quantity,
        purchase_price,
        current_price,
        change_24h,
    }
}

/// The two demo portfolios shown in the sidebar.
pub fn demo_portfolios() -> Vec<Portfolio> {
    vec![
        Portfolio {
            id: "1".to_string(),
            name: "My Stocks".to_string(),
            category: PortfolioCategory::Stocks,
            total_value: dec!(113565.75),
            total_gain_loss: dec!(6215.75),
            total_gain_loss_percent: dec!(5.79),
            holdings: vec![
                holding(
                    "1",
                    "AAPL",
                    "Apple Inc.",
                    dec!(50),
                    dec!(150.00),
                    dec!(175.30),
                    dec!(2.1),
                ),
                holding(
                    "2",
                    "GOOGL",
                    "Alphabet Inc.",
                    dec!(25),
                    dec!(2800.00),
                    dec!(2950.75),
                    dec!(-0.8),
                ),
                holding(
                    "3",
                    "MSFT",
                    "Microsoft Corporation",
                    dec!(75),
                    dec!(310.00),
                    dec!(335.60),
                    dec!(1.5),
                ),
                holding(
                    "4",
                    "TSLA",
                    "Tesla Inc.",
                    dec!(30),
                    dec!(220.00),
                    dec!(195.40),
                    dec!(-3.2),
                ),
            ],
        },
        Portfolio {
            id: "2".to_string(),
            name: "My Crypto".to_string(),
            category: PortfolioCategory::Crypto,
            total_value: dec!(107691.85),
            total_gain_loss: dec!(-8058.15),
            total_gain_loss_percent: dec!(-6.96),
            holdings: vec![
                holding(
                    "5",
                    "BTC",
                    "Bitcoin",
                    dec!(1.2),
                    dec!(45000.00),
                    dec!(43250.50),
                    dec!(-2.3),
                ),
                holding(
                    "6",
                    "ETH",
                    "Ethereum",
                    dec!(15),
                    dec!(3200.00),
                    dec!(2890.75),
                    dec!(-1.8),
                ),
                holding(
                    "7",
                    "SOL",
                    "Solana",
                    dec!(100),
                    dec!(95.00),
                    dec!(88.30),
                    dec!(-4.1),
                ),
                holding(
                    "8",
                    "ADA",
                    "Cardano",
                    dec!(5000),
                    dec!(0.85),
                    dec!(0.72),
                    dec!(-2.9),
                ),
            ],
        },
    ]
}

/// Upcoming market events for the sidebar feed.
pub fn demo_events() -> Vec<MarketEvent> {
    vec![
        MarketEvent {
            id: "1".to_string(),
            title: "Apple Earnings Report".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 30).unwrap_or_default(),
            kind: EventKind::Earnings,
        },
        MarketEvent {
            id: "2".to_string(),
            title: "Fed Meeting".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap_or_default(),
            kind: EventKind::Economic,
        },
        MarketEvent {
            id: "3".to_string(),
            title: "Tesla Stock Split".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 2, 5).unwrap_or_default(),
            kind: EventKind::Corporate,
        },
    ]
}

/// The demo user profile every valid sign-in resolves to.
pub fn demo_user() -> User {
    User {
        id: "1".to_string(),
        name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        role: UserRole::User,
    }
}
