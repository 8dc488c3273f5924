use crate::core::template::MessageTemplate;
use crate::core::{Item, LineSummary, MessageSource, OrderSummary};
use crate::utils::error::{OrderError, Result};
use rust_decimal::Decimal;

/// An in-memory order bound to the source its summary message is read from.
pub struct Order<S: MessageSource> {
    items: Vec<Item>,
    source: S,
}

impl<S: MessageSource> Order<S> {
    pub fn new(source: S) -> Self {
        Self {
            items: Vec::new(),
            source,
        }
    }

    pub fn add_item(&mut self, item: Item) {
        tracing::debug!(
            "Adding item '{}' ({}, price {})",
            item.name(),
            item.category(),
            item.price()
        );
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> Result<Decimal> {
        checked_sum("total", self.items.iter().map(Item::price))
    }

    pub fn taxes(&self) -> Result<Decimal> {
        checked_sum("taxes", self.items.iter().map(Item::tax_amount))
    }

    pub fn summary(&self) -> Result<OrderSummary> {
        Ok(OrderSummary {
            items: self.items.iter().map(LineSummary::from).collect(),
            total: self.total()?,
            taxes: self.taxes()?,
        })
    }

    /// Reads the template for `language` and fills in the total and taxes.
    ///
    /// The source is queried on every call.
    pub async fn print_message(&self, language: &str) -> Result<String> {
        tracing::debug!("Reading message template for '{}'", language);
        let raw = self.source.read(language).await?;
        let template = MessageTemplate::parse(language, &raw)?;

        let message = template.render(self.total()?, self.taxes()?);
        tracing::debug!("Rendered message for '{}': {}", template.language(), message);
        Ok(message)
    }
}

fn checked_sum(what: &str, mut amounts: impl Iterator<Item = Decimal>) -> Result<Decimal> {
    amounts.try_fold(Decimal::ZERO, |acc, amount| {
        acc.checked_add(amount)
            .ok_or_else(|| OrderError::AmountOverflow {
                what: what.to_string(),
            })
    })
}
