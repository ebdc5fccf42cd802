//! Read-only view of the station graph.
//!
//! Path computations are written against this trait and only ever hold a
//! shared borrow, so they cannot change the network they inspect.

use crate::identifiers::StationId;
use crate::models::types::Weight;

pub trait NetworkGraph {
    /// Every live station, in a stable order.
    fn station_ids(&self) -> Vec<StationId>;

    fn contains(&self, id: StationId) -> bool;

    /// Outgoing edges of `id`; empty for unknown ids.
    fn neighbors(&self, id: StationId) -> Vec<(StationId, Weight)>;
}
