//! # metro-network
//!
//! In-memory metro network with shortest-path fare queries.
//!
//! ## Features
//!
//! - **Arena identities**: stations are referenced by handles that never dangle
//! - **Symmetric connections**: every edge is stored on both endpoints with one weight
//! - **Name-ordered listing**: a binary search tree keeps stations sorted by name
//! - **Fare queries**: Dijkstra over non-negative weights, fare is twice the distance
//!
//! ## Example
//!
//! ```
//! use metro_network::prelude::*;
//!
//! let mut network = MetroNetwork::new();
//! for name in ["A", "B", "C", "D"] {
//!     network.add_station(name).unwrap();
//! }
//! network.add_connection("A", "B", 5).unwrap();
//! network.add_connection("B", "C", 3).unwrap();
//! network.add_connection("C", "D", 4).unwrap();
//! network.add_connection("D", "A", 7).unwrap();
//!
//! // A -> B -> C is 8 units, so the fare is 16
//! assert_eq!(network.fare_between("A", "C").unwrap(), 16);
//!
//! network.add_station("E").unwrap();
//! assert!(matches!(
//!     network.fare_between("A", "E"),
//!     Err(NetworkError::NoRoute { .. })
//! ));
//! ```

pub mod adjacency;
pub mod identifiers;
pub mod index;
pub mod metro;
pub mod models;
pub mod registry;
pub mod routing;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::metro::MetroNetwork;
    pub use crate::models::{traits::*, types::*};
    pub use crate::routing::{distances_from, DistanceMap};
}

pub use prelude::*;
