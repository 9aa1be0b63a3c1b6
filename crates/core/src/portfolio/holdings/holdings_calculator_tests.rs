#[cfg(test)]
mod tests {
    use crate::errors::{CalculatorError, Error};
    use crate::portfolio::holdings::holdings_calculator::{
        calculate_holding_valuation, validate_holding,
    };
    use crate::portfolio::holdings::holdings_model::Holding;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn holding(quantity: Decimal, purchase_price: Decimal, current_price: Decimal) -> Holding {
        Holding {
            id: "1".to_string(),
            symbol: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
            quantity,
            purchase_price,
            current_price,
            change_24h: dec!(2.1),
        }
    }

    #[test]
    fn test_valuation_identities() {
        let h = holding(dec!(50), dec!(150.00), dec!(175.30));
        let valuation = calculate_holding_valuation(&h).unwrap();

        assert_eq!(valuation.market_value, dec!(8765.00));
        assert_eq!(valuation.cost_basis, dec!(7500.00));
        assert_eq!(valuation.gain_loss, dec!(1265.00));
        assert_eq!(valuation.gain_loss_percent, Some(dec!(16.8667)));
    }

    #[test]
    fn test_loss_position() {
        // TSLA from the demo data: under water
        let h = holding(dec!(30), dec!(220.00), dec!(195.40));
        let valuation = calculate_holding_valuation(&h).unwrap();

        assert_eq!(valuation.market_value, dec!(5862.00));
        assert_eq!(valuation.cost_basis, dec!(6600.00));
        assert_eq!(valuation.gain_loss, dec!(-738.00));
        assert_eq!(valuation.gain_loss_percent, Some(dec!(-11.1818)));
    }

    #[test]
    fn test_fractional_quantity() {
        let h = holding(dec!(1.2), dec!(45000.00), dec!(43250.50));
        let valuation = calculate_holding_valuation(&h).unwrap();

        assert_eq!(valuation.market_value, dec!(51900.600));
        assert_eq!(valuation.cost_basis, dec!(54000.000));
        assert_eq!(valuation.gain_loss, dec!(-2099.400));
    }

    #[test]
    fn test_zero_cost_basis_has_no_percent() {
        // Free shares: percentage is undefined, not infinite
        let h = holding(dec!(10), dec!(0), dec!(175.30));
        let valuation = calculate_holding_valuation(&h).unwrap();

        assert_eq!(valuation.market_value, dec!(1753.00));
        assert_eq!(valuation.cost_basis, dec!(0));
        assert_eq!(valuation.gain_loss, dec!(1753.00));
        assert_eq!(valuation.gain_loss_percent, None);
    }

    #[test]
    fn test_zero_quantity_is_valid() {
        let h = holding(dec!(0), dec!(150.00), dec!(175.30));
        let valuation = calculate_holding_valuation(&h).unwrap();

        assert_eq!(valuation.market_value, Decimal::ZERO);
        assert_eq!(valuation.cost_basis, Decimal::ZERO);
        assert_eq!(valuation.gain_loss_percent, None);
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let h = holding(dec!(-5), dec!(150.00), dec!(175.30));
        assert!(validate_holding(&h).is_err());

        match calculate_holding_valuation(&h) {
            Err(Error::Calculation(CalculatorError::NegativeQuantity { holding_id, .. })) => {
                assert_eq!(holding_id, "1");
            }
            other => panic!("expected NegativeQuantity error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_negative_prices_rejected() {
        let h = holding(dec!(5), dec!(-150.00), dec!(175.30));
        assert!(matches!(
            calculate_holding_valuation(&h),
            Err(Error::Calculation(
                CalculatorError::NegativePurchasePrice { .. }
            ))
        ));

        let h = holding(dec!(5), dec!(150.00), dec!(-175.30));
        assert!(matches!(
            calculate_holding_valuation(&h),
            Err(Error::Calculation(
                CalculatorError::NegativeCurrentPrice { .. }
            ))
        ));
    }

    #[test]
    fn test_holding_serializes_camel_case() {
        let h = holding(dec!(50), dec!(150.00), dec!(175.30));
        let value = serde_json::to_value(&h).unwrap();

        assert!(value.get("purchasePrice").is_some());
        assert!(value.get("currentPrice").is_some());
        assert!(value.get("change24h").is_some());
    }
}
