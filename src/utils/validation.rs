use crate::utils::error::{OrderError, Result};
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn language_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").expect("language pattern is valid")
    })
}

/// Language codes double as file stems: letters, digits, `-` and `_` only,
/// never starting with a separator.
pub fn validate_language_code(language: &str) -> Result<()> {
    if language_pattern().is_match(language) {
        Ok(())
    } else {
        Err(OrderError::InvalidLanguage {
            language: language.to_string(),
        })
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(OrderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(OrderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OrderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative_price(name: &str, price: Decimal) -> Result<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(OrderError::InvalidPrice {
            name: name.to_string(),
            price,
        });
    }
    Ok(())
}
