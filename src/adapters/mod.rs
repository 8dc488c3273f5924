// Adapters layer: concrete message sources (flat files, in-memory map).

pub mod file_source;
pub mod memory_source;

pub use file_source::FileMessageSource;
pub use memory_source::InMemoryMessageSource;
