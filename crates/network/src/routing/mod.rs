//! Shortest-path computation over a [`NetworkGraph`](crate::models::NetworkGraph).

pub mod dijkstra;

pub use dijkstra::{distances_from, DistanceMap};
