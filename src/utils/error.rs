use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Invalid price for item '{name}': {price} (must not be negative)")]
    InvalidPrice { name: String, price: Decimal },

    #[error("No message template found for language '{language}'")]
    TemplateNotFound { language: String },

    #[error("Invalid message template for language '{language}': {reason}")]
    InvalidTemplate { language: String, reason: String },

    #[error("Invalid language code: '{language}'")]
    InvalidLanguage { language: String },

    #[error("Amount overflow while computing order {what}")]
    AmountOverflow { what: String },

    #[error("Unknown item category: '{value}'")]
    UnknownCategory { value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, OrderError>;
