// Domain types and value objects
pub mod price;
pub mod sentiment;

// Re-export commonly used types
pub use price::{LevelError, parse_price, parse_whole_level, round2};
pub use sentiment::Sentiment;
