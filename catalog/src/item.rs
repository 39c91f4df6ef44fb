use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PriceError {
    #[error("price {0:?} has no digits")]
    NoDigits(String),

    #[error("price {0:?} contains unexpected characters")]
    Malformed(String),
}

/// One purchasable pet or product, immutable once fetched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
    pub category: String,
    /// Product type ("food", "toy", "puppy", ...).
    pub kind: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub flavor: String,
    #[serde(default)]
    pub life_stage: String,
    #[serde(default)]
    pub breed_size: String,
    /// Localized display price, e.g. "1,299" or "12,499.00".
    pub price: String,
    #[serde(default)]
    pub discount: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub stock: u32,
}

impl CatalogItem {
    /// Numeric price in integer units, for comparison and totals.
    ///
    /// A price that fails to parse compares as 0 rather than erroring; the
    /// display string is untouched either way.
    pub fn price_units(&self) -> u64 {
        parse_price(&self.price).unwrap_or(0)
    }
}

/// Parses a localized price string to integer units.
///
/// Thousands separators and surrounding whitespace are dropped and any
/// fractional part is truncated: "1,299" -> 1299, "12,499.50" -> 12499.
pub fn parse_price(price: &str) -> Result<u64, PriceError> {
    let integer_part = price.trim().split('.').next().unwrap_or("");
    let digits: String = integer_part.chars().filter(|c| *c != ',').collect();

    if digits.is_empty() {
        return Err(PriceError::NoDigits(price.to_string()));
    }

    digits
        .parse()
        .map_err(|_| PriceError::Malformed(price.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{PriceError, parse_price};

    #[test]
    fn test_plain() {
        assert_eq!(parse_price("1299"), Ok(1299));
        assert_eq!(parse_price("0"), Ok(0));
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(parse_price("1,299"), Ok(1299));
        assert_eq!(parse_price("12,49,900"), Ok(1249900));
    }

    #[test]
    fn test_fractional_part_truncated() {
        assert_eq!(parse_price("1,299.99"), Ok(1299));
        assert_eq!(parse_price("450.00"), Ok(450));
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(parse_price("  2,500 "), Ok(2500));
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(parse_price(""), Err(PriceError::NoDigits("".into())));
        assert_eq!(parse_price("."), Err(PriceError::NoDigits(".".into())));
    }

    #[test]
    fn test_malformed() {
        assert_eq!(
            parse_price("12a9"),
            Err(PriceError::Malformed("12a9".into()))
        );
    }
}
