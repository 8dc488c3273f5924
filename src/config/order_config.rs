use crate::core::order::Order;
use crate::core::{Category, Item, MessageSource};
use crate::utils::error::{OrderError, Result};
use crate::utils::validation::{
    validate_language_code, validate_non_empty_string, validate_non_negative_price, validate_path,
    Validate,
};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MESSAGES_DIR: &str = "./messages";
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderConfig {
    #[serde(default)]
    pub messages: MessagesConfig,
    #[serde(default)]
    pub items: Vec<ItemEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagesConfig {
    pub directory: Option<String>,
    pub default_language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemEntry {
    pub category: Category,
    pub name: String,
    pub price: Decimal,
}

impl ItemEntry {
    pub fn to_item(&self) -> Result<Item> {
        Item::new(self.category, self.name.clone(), self.price)
    }
}

impl OrderConfig {
    /// Load an order from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(OrderError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| OrderError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace environment variables (e.g. ${MESSAGES_DIR})
    ///
    /// Unset variables are left as written, which keeps `${total}` style
    /// text intact as well.
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn messages_directory(&self) -> &str {
        self.messages
            .directory
            .as_deref()
            .unwrap_or(DEFAULT_MESSAGES_DIR)
    }

    pub fn default_language(&self) -> &str {
        self.messages
            .default_language
            .as_deref()
            .unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn items(&self) -> Result<Vec<Item>> {
        self.items.iter().map(ItemEntry::to_item).collect()
    }

    pub fn build_order<S: MessageSource>(&self, source: S) -> Result<Order<S>> {
        let mut order = Order::new(source);
        for item in self.items()? {
            order.add_item(item);
        }
        Ok(order)
    }
}

impl Validate for OrderConfig {
    fn validate(&self) -> Result<()> {
        validate_path("messages.directory", self.messages_directory())?;
        validate_language_code(self.default_language())?;

        for (index, entry) in self.items.iter().enumerate() {
            validate_non_empty_string(&format!("items[{}].name", index), &entry.name)?;
            validate_non_negative_price(&entry.name, entry.price)?;
        }

        Ok(())
    }
}
