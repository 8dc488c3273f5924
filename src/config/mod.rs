#[cfg(feature = "cli")]
pub mod cli;
pub mod order_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, ItemArg};
pub use order_config::OrderConfig;
