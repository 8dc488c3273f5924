use crate::core::{Category, Item};
use crate::utils::error::{OrderError, Result};
use crate::utils::validation::{validate_language_code, validate_path, Validate};
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Parser)]
#[command(name = "order-message")]
#[command(about = "Compute order totals and taxes and print a localized summary")]
pub struct CliConfig {
    /// Item as <category:name:price>, e.g. beer:Brahma:10 (repeatable)
    #[arg(long = "item", value_name = "CATEGORY:NAME:PRICE")]
    pub items: Vec<ItemArg>,

    /// TOML order file; its items come before any --item
    #[arg(long)]
    pub order: Option<PathBuf>,

    /// Language code of the message template (default: order file, then "en")
    #[arg(long)]
    pub lang: Option<String>,

    /// Directory holding <lang>.txt templates (default: order file, then ./messages)
    #[arg(long)]
    pub messages_dir: Option<String>,

    /// Print the order summary and message as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// A command-line item, `category:name:price`. The name may itself contain
/// colons; the category is taken from the front and the price from the back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemArg {
    pub category: Category,
    pub name: String,
    pub price: Decimal,
}

impl ItemArg {
    pub fn to_item(&self) -> Result<Item> {
        Item::new(self.category, self.name.clone(), self.price)
    }
}

impl FromStr for ItemArg {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| OrderError::InvalidConfigValueError {
            field: "item".to_string(),
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (category, rest) = s
            .split_once(':')
            .ok_or_else(|| invalid("expected CATEGORY:NAME:PRICE"))?;
        let (name, price) = rest
            .rsplit_once(':')
            .ok_or_else(|| invalid("expected CATEGORY:NAME:PRICE"))?;

        if name.trim().is_empty() {
            return Err(invalid("item name cannot be empty"));
        }

        let price = Decimal::from_str(price.trim()).map_err(|e| invalid(&e.to_string()))?;

        Ok(Self {
            category: category.parse()?,
            name: name.to_string(),
            price,
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(lang) = &self.lang {
            validate_language_code(lang)?;
        }
        if let Some(dir) = &self.messages_dir {
            validate_path("messages_dir", dir)?;
        }
        if self.items.is_empty() && self.order.is_none() {
            tracing::warn!("No items given; the order will be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_item_arg() {
        let item: ItemArg = "beer:Brahma:10".parse().unwrap();
        assert_eq!(item.category, Category::Beer);
        assert_eq!(item.name, "Brahma");
        assert_eq!(item.price, dec!(10));
    }

    #[test]
    fn test_parse_item_arg_name_with_colon() {
        let item: ItemArg = "whisky:Jack Daniels: Old No. 7:100.50".parse().unwrap();
        assert_eq!(item.name, "Jack Daniels: Old No. 7");
        assert_eq!(item.price, dec!(100.50));
    }

    #[test]
    fn test_parse_item_arg_errors() {
        assert!("beer".parse::<ItemArg>().is_err());
        assert!("beer:Brahma".parse::<ItemArg>().is_err());
        assert!("beer:Brahma:ten".parse::<ItemArg>().is_err());
        assert!("beer::10".parse::<ItemArg>().is_err());
        assert!(matches!(
            "wine:Merlot:30".parse::<ItemArg>(),
            Err(OrderError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_negative_item_arg_fails_on_conversion() {
        let arg: ItemArg = "water:Refund:-1".parse().unwrap();
        assert!(matches!(
            arg.to_item(),
            Err(OrderError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_cli_parsing() {
        let config = CliConfig::try_parse_from([
            "order-message",
            "--item",
            "beer:Brahma:10",
            "--item",
            "water:Crystal:1",
            "--lang",
            "pt",
            "--json",
        ])
        .unwrap();

        assert_eq!(config.items.len(), 2);
        assert_eq!(config.lang.as_deref(), Some("pt"));
        assert!(config.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_rejects_bad_language() {
        let config =
            CliConfig::try_parse_from(["order-message", "--lang", "../../etc"]).unwrap();
        assert!(matches!(
            config.validate(),
            Err(OrderError::InvalidLanguage { .. })
        ));
    }
}
