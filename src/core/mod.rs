pub mod order;
pub mod template;

pub use crate::domain::model::{Category, Item, LineSummary, OrderSummary};
pub use crate::domain::ports::MessageSource;
pub use crate::utils::error::Result;
