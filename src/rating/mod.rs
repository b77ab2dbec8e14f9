pub mod delta;
pub mod strategy;
pub mod types;

pub use delta::rating_delta;
pub use strategy::adjust;
pub use types::{AccountTier, DEFAULT_MULTIPLIER, RatingDelta, RatingValue};
