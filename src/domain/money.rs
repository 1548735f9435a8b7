//! Monetary types for price and dividend representation.

use rust_decimal::Decimal;

/// Per-share price represented as a Decimal for precision.
pub type Price = Decimal;

/// Per-share cash amount (dividends, margins) represented as a Decimal.
pub type Amount = Decimal;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn price_and_amount_add_exactly() {
        let close: Price = dec!(50.00);
        let margin: Amount = dec!(0.10);

        assert_eq!(close + margin, dec!(50.10));
    }
}
