#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result};
    use crate::portfolio::holdings::Holding;
    use crate::portfolio::{
        summarize_holdings, summarize_portfolio, Portfolio, PortfolioCategory,
        PortfolioRepositoryTrait, PortfolioService, PortfolioServiceTrait,
    };
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    struct MockPortfolioRepository {
        portfolios: Vec<Portfolio>,
    }

    #[async_trait]
    impl PortfolioRepositoryTrait for MockPortfolioRepository {
        async fn fetch_portfolios(&self) -> Result<Vec<Portfolio>> {
            Ok(self.portfolios.clone())
        }
    }

    fn holding(
        id: &str,
        symbol: &str,
        quantity: Decimal,
        purchase_price: Decimal,
        current_price: Decimal,
    ) -> Holding {
        Holding {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            quantity,
            purchase_price,
            current_price,
            change_24h: Decimal::ZERO,
        }
    }

    fn stocks_portfolio() -> Portfolio {
        Portfolio {
            id: "1".to_string(),
            name: "My Stocks".to_string(),
            category: PortfolioCategory::Stocks,
            total_value: dec!(113565.75),
            total_gain_loss: dec!(6215.75),
            total_gain_loss_percent: dec!(5.79),
            holdings: vec![
                holding("1", "AAPL", dec!(50), dec!(150.00), dec!(175.30)),
                holding("2", "GOOGL", dec!(25), dec!(2800.00), dec!(2950.75)),
                holding("3", "MSFT", dec!(75), dec!(310.00), dec!(335.60)),
                holding("4", "TSLA", dec!(30), dec!(220.00), dec!(195.40)),
            ],
        }
    }

    #[test]
    fn test_summary_matches_sum_of_market_values() {
        let portfolio = stocks_portfolio();
        let summary = summarize_portfolio(&portfolio);

        assert_eq!(summary.total_value, dec!(113565.75));
        assert_eq!(summary.total_cost_basis, dec!(107350.00));
        assert_eq!(summary.total_gain_loss, dec!(6215.75));
        assert_eq!(summary.total_gain_loss_percent, Some(dec!(5.7902)));
        assert_eq!(summary.holdings_count, 4);
    }

    #[test]
    fn test_summary_total_equals_recomputed_regardless_of_cached_values() {
        let mut portfolio = stocks_portfolio();
        // Stale cache from the data source; the recomputed total wins
        portfolio.total_value = dec!(125430.50);

        let summary = summarize_portfolio(&portfolio);
        assert_eq!(summary.total_value, dec!(113565.75));
    }

    #[test]
    fn test_empty_holdings_summary() {
        let summary = summarize_holdings(&[]);

        assert_eq!(summary.total_value, Decimal::ZERO);
        assert_eq!(summary.total_gain_loss, Decimal::ZERO);
        assert_eq!(summary.total_gain_loss_percent, None);
        assert_eq!(summary.holdings_count, 0);
    }

    #[test]
    fn test_malformed_holding_excluded_from_summary() {
        let holdings = vec![
            holding("1", "A", dec!(1), dec!(100.00), dec!(150.00)),
            holding("2", "BAD", dec!(-1), dec!(100.00), dec!(150.00)),
        ];

        let summary = summarize_holdings(&holdings);
        assert_eq!(summary.total_value, dec!(150.00));
        assert_eq!(summary.holdings_count, 1);
    }

    #[tokio::test]
    async fn test_get_portfolio_by_id() {
        let service = PortfolioService::new(Arc::new(MockPortfolioRepository {
            portfolios: vec![stocks_portfolio()],
        }));

        let portfolio = service.get_portfolio("1").await.unwrap();
        assert_eq!(portfolio.name, "My Stocks");
        assert_eq!(portfolio.category, PortfolioCategory::Stocks);
    }

    #[tokio::test]
    async fn test_get_unknown_portfolio_is_not_found() {
        let service = PortfolioService::new(Arc::new(MockPortfolioRepository {
            portfolios: vec![stocks_portfolio()],
        }));

        match service.get_portfolio("missing").await {
            Err(Error::NotFound(msg)) => assert!(msg.contains("missing")),
            other => panic!("expected NotFound, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_portfolio_category_serializes_screaming_case() {
        let portfolio = stocks_portfolio();
        let value = serde_json::to_value(&portfolio).unwrap();

        assert_eq!(value["type"], "STOCKS");
        assert_eq!(portfolio.category.label(), "STOCKS");
        assert!(value.get("totalGainLossPercent").is_some());
    }
}
