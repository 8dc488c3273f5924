pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{FileMessageSource, InMemoryMessageSource};
pub use crate::config::OrderConfig;
pub use crate::core::{order::Order, Category, Item, MessageSource, OrderSummary};
pub use crate::utils::error::{OrderError, Result};
