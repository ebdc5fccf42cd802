//! Single-source shortest paths (Dijkstra).
//!
//! The frontier is a `BinaryHeap` of `Reverse((distance, station))` entries.
//! Instead of decrease-key, an improved distance is pushed again and stale
//! entries are skipped when popped.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::identifiers::StationId;
use crate::models::traits::NetworkGraph;
use crate::models::types::Distance;

/// Finalized distances from one source station.
#[derive(Clone, Debug)]
pub struct DistanceMap {
    source: StationId,
    distances: HashMap<StationId, Distance>,
}

impl DistanceMap {
    pub fn source(&self) -> StationId {
        self.source
    }

    /// Distance to `id`; stations the search never saw read as unreachable.
    pub fn get(&self, id: StationId) -> Distance {
        self.distances
            .get(&id)
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    /// Reachable stations with their distances, ordered by station handle.
    pub fn reachable(&self) -> Vec<(StationId, u64)> {
        let mut out: Vec<(StationId, u64)> = self
            .distances
            .iter()
            .filter_map(|(id, distance)| distance.units().map(|units| (*id, units)))
            .collect();
        out.sort_unstable();
        out
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Compute the minimal distance from `source` to every station of `graph`.
///
/// Every station starts at [`Distance::Unreachable`] except the source. If
/// the source is not part of the graph it is still reported at distance 0
/// and nothing else is reachable.
pub fn distances_from<G: NetworkGraph + ?Sized>(graph: &G, source: StationId) -> DistanceMap {
    let mut distances: HashMap<StationId, Distance> = graph
        .station_ids()
        .into_iter()
        .map(|id| (id, Distance::Unreachable))
        .collect();
    distances.insert(source, Distance::Reachable(0));

    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((0u64, source)));

    while let Some(Reverse((distance, station))) = frontier.pop() {
        // Skip entries superseded by a shorter push
        if let Some(Distance::Reachable(best)) = distances.get(&station) {
            if distance > *best {
                continue;
            }
        }

        for (neighbor, weight) in graph.neighbors(station) {
            let candidate = distance.saturating_add(u64::from(weight));
            let improves = match distances.get(&neighbor) {
                Some(Distance::Reachable(best)) => candidate < *best,
                _ => true,
            };

            if improves {
                tracing::trace!(%station, %neighbor, candidate, "relaxed edge");
                distances.insert(neighbor, Distance::Reachable(candidate));
                frontier.push(Reverse((candidate, neighbor)));
            }
        }
    }

    DistanceMap { source, distances }
}
