use crate::utils::error::{OrderError, Result};
use crate::utils::validation::validate_non_negative_price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Item category. Each category carries a fixed tax rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Category {
    Beer,
    Whisky,
    Water,
}

impl Category {
    pub fn tax_rate(self) -> Decimal {
        match self {
            Category::Beer => Decimal::new(10, 2),
            Category::Whisky => Decimal::new(20, 2),
            Category::Water => Decimal::ZERO,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Beer => "beer",
            Category::Whisky => "whisky",
            Category::Water => "water",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beer" => Ok(Category::Beer),
            "whisky" => Ok(Category::Whisky),
            "water" => Ok(Category::Water),
            _ => Err(OrderError::UnknownCategory {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = OrderError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// A single purchasable line. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    price: Decimal,
    category: Category,
}

impl Item {
    pub fn new(category: Category, name: impl Into<String>, price: Decimal) -> Result<Self> {
        let name = name.into();
        validate_non_negative_price(&name, price)?;

        Ok(Self {
            name,
            price,
            category,
        })
    }

    pub fn beer(name: impl Into<String>, price: Decimal) -> Result<Self> {
        Self::new(Category::Beer, name, price)
    }

    pub fn whisky(name: impl Into<String>, price: Decimal) -> Result<Self> {
        Self::new(Category::Whisky, name, price)
    }

    pub fn water(name: impl Into<String>, price: Decimal) -> Result<Self> {
        Self::new(Category::Water, name, price)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn tax_rate(&self) -> Decimal {
        self.category.tax_rate()
    }

    pub fn tax_amount(&self) -> Decimal {
        self.price * self.tax_rate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSummary {
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    pub tax: Decimal,
}

impl From<&Item> for LineSummary {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name().to_string(),
            category: item.category(),
            price: item.price(),
            tax: item.tax_amount(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub items: Vec<LineSummary>,
    pub total: Decimal,
    pub taxes: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_category_tax_rates() {
        assert_eq!(Category::Beer.tax_rate(), dec!(0.10));
        assert_eq!(Category::Whisky.tax_rate(), dec!(0.20));
        assert_eq!(Category::Water.tax_rate(), dec!(0));
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("beer".parse::<Category>().unwrap(), Category::Beer);
        assert_eq!(" Whisky ".parse::<Category>().unwrap(), Category::Whisky);
        assert_eq!("WATER".parse::<Category>().unwrap(), Category::Water);
        assert!(matches!(
            "wine".parse::<Category>(),
            Err(OrderError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_item_tax_amount() {
        let beer = Item::beer("Brahma", dec!(10)).unwrap();
        let whisky = Item::whisky("Jack Daniels", dec!(100)).unwrap();
        let water = Item::water("Crystal", dec!(1)).unwrap();

        assert_eq!(beer.tax_amount(), dec!(1));
        assert_eq!(whisky.tax_amount(), dec!(20));
        assert_eq!(water.tax_amount(), dec!(0));
        assert_eq!(beer.name(), "Brahma");
        assert_eq!(beer.category(), Category::Beer);
    }

    #[test]
    fn test_item_tax_amount_is_exact_for_fractional_prices() {
        let beer = Item::beer("Draft", dec!(3.30)).unwrap();
        assert_eq!(beer.tax_amount(), dec!(0.33));
    }

    #[test]
    fn test_item_rejects_negative_price() {
        let result = Item::new(Category::Whisky, "Refund", dec!(-5));
        assert!(matches!(result, Err(OrderError::InvalidPrice { .. })));
    }

    #[test]
    fn test_item_accepts_zero_price() {
        let item = Item::water("Tap", dec!(0)).unwrap();
        assert_eq!(item.price(), dec!(0));
        assert_eq!(item.tax_amount(), dec!(0));
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&Category::Whisky).unwrap();
        assert_eq!(json, "\"whisky\"");
        let parsed: Category = serde_json::from_str("\"beer\"").unwrap();
        assert_eq!(parsed, Category::Beer);
        let parsed: Category = serde_json::from_str("\"Whisky\"").unwrap();
        assert_eq!(parsed, Category::Whisky);
        assert!(serde_json::from_str::<Category>("\"wine\"").is_err());
    }
}
