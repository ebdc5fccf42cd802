//! Network value types, errors, and traits.

pub mod traits;
pub mod types;

// Re-exports for convenience
pub use traits::NetworkGraph;
pub use types::{Distance, NetworkEntry, NetworkError, Result, Weight, FARE_PER_UNIT};
