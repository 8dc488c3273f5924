use crate::utils::error::{OrderError, Result};
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;

pub const TOTAL_PLACEHOLDER: &str = "{total}";
pub const TAXES_PLACEHOLDER: &str = "{taxes}";

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{(total|taxes)\}").expect("placeholder pattern is valid"))
}

/// A message template split around its two placeholders:
/// `<prefix>{total}<middle>{taxes}<suffix>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    language: String,
    prefix: String,
    middle: String,
    suffix: String,
}

impl MessageTemplate {
    pub fn parse(language: &str, raw: &str) -> Result<Self> {
        let invalid = |reason: String| OrderError::InvalidTemplate {
            language: language.to_string(),
            reason,
        };

        let found: Vec<_> = placeholder_pattern().find_iter(raw).collect();
        let (total, taxes) = match found.as_slice() {
            [first, second]
                if first.as_str() == TOTAL_PLACEHOLDER && second.as_str() == TAXES_PLACEHOLDER =>
            {
                (*first, *second)
            }
            [first, second] => {
                return Err(invalid(format!(
                    "expected {} before {}, found {} then {}",
                    TOTAL_PLACEHOLDER,
                    TAXES_PLACEHOLDER,
                    first.as_str(),
                    second.as_str()
                )))
            }
            other => {
                return Err(invalid(format!(
                    "expected exactly two placeholders, found {}",
                    other.len()
                )))
            }
        };

        Ok(Self {
            language: language.to_string(),
            prefix: raw[..total.start()].to_string(),
            middle: raw[total.end()..taxes.start()].to_string(),
            suffix: raw[taxes.end()..].to_string(),
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn render(&self, total: Decimal, taxes: Decimal) -> String {
        format!(
            "{}{}{}{}{}",
            self.prefix,
            format_amount(total),
            self.middle,
            format_amount(taxes),
            self.suffix
        )
    }
}

/// Plain decimal, trailing zeros dropped, no grouping or rounding.
pub fn format_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}
