//! Adjacency store: per-station neighbor weights.
//!
//! Every connection is kept as two directed entries, one on each endpoint,
//! and the two always carry the same weight. Rows are `BTreeMap`s so
//! neighbor order is deterministic (ascending by handle, i.e. creation order).

use std::collections::{BTreeMap, HashMap};

use crate::identifiers::StationId;
use crate::models::traits::NetworkGraph;
use crate::models::types::Weight;

#[derive(Clone, Debug, Default)]
pub struct AdjacencyStore {
    rows: HashMap<StationId, BTreeMap<StationId, Weight>>,
}

impl AdjacencyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a station with no connections.
    pub fn add_station(&mut self, id: StationId) {
        self.rows.entry(id).or_default();
    }

    /// Drop a station and every edge that touches it.
    pub fn remove_station(&mut self, id: StationId) -> usize {
        let removed = self.remove_all_edges_touching(id);
        self.rows.remove(&id);
        removed
    }

    /// Set `a -> b` and `b -> a` to `weight`, overwriting any previous value.
    ///
    /// Returns `false` without touching anything if either endpoint is not
    /// tracked.
    pub fn connect(&mut self, a: StationId, b: StationId, weight: Weight) -> bool {
        if !self.rows.contains_key(&a) || !self.rows.contains_key(&b) {
            return false;
        }

        if let Some(row) = self.rows.get_mut(&a) {
            row.insert(b, weight);
        }
        if let Some(row) = self.rows.get_mut(&b) {
            row.insert(a, weight);
        }
        true
    }

    /// Remove both directed entries of an edge.
    ///
    /// The edge must be present on both sides; otherwise nothing changes and
    /// `None` is returned.
    pub fn disconnect(&mut self, a: StationId, b: StationId) -> Option<Weight> {
        let forward = self.weight(a, b)?;
        self.weight(b, a)?;

        if let Some(row) = self.rows.get_mut(&a) {
            row.remove(&b);
        }
        if let Some(row) = self.rows.get_mut(&b) {
            row.remove(&a);
        }
        Some(forward)
    }

    /// Remove `id` from every other station's neighbor row.
    pub fn remove_all_edges_touching(&mut self, id: StationId) -> usize {
        let mut removed = 0;
        for (owner, row) in self.rows.iter_mut() {
            if *owner != id && row.remove(&id).is_some() {
                removed += 1;
            }
        }
        if let Some(row) = self.rows.get_mut(&id) {
            row.clear();
        }
        removed
    }

    pub fn weight(&self, a: StationId, b: StationId) -> Option<Weight> {
        self.rows.get(&a).and_then(|row| row.get(&b)).copied()
    }

    pub fn neighbors_of(&self, id: StationId) -> impl Iterator<Item = (StationId, Weight)> + '_ {
        self.rows
            .get(&id)
            .into_iter()
            .flat_map(|row| row.iter().map(|(neighbor, weight)| (*neighbor, *weight)))
    }

    /// Number of undirected connections (self connections count once).
    pub fn connection_count(&self) -> usize {
        let mut directed = 0;
        let mut loops = 0;
        for (owner, row) in &self.rows {
            directed += row.len();
            if row.contains_key(owner) {
                loops += 1;
            }
        }
        (directed - loops) / 2 + loops
    }
}

impl NetworkGraph for AdjacencyStore {
    fn station_ids(&self) -> Vec<StationId> {
        let mut ids: Vec<StationId> = self.rows.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    fn contains(&self, id: StationId) -> bool {
        self.rows.contains_key(&id)
    }

    fn neighbors(&self, id: StationId) -> Vec<(StationId, Weight)> {
        self.neighbors_of(id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(n: usize) -> (AdjacencyStore, Vec<StationId>) {
        let mut store = AdjacencyStore::new();
        let ids: Vec<StationId> = (0..n).map(StationId::from_slot).collect();
        for id in &ids {
            store.add_station(*id);
        }
        (store, ids)
    }

    #[test]
    fn test_connect_is_symmetric() {
        let (mut store, ids) = store_with(2);
        assert!(store.connect(ids[0], ids[1], 5));

        assert_eq!(store.weight(ids[0], ids[1]), Some(5));
        assert_eq!(store.weight(ids[1], ids[0]), Some(5));
        assert_eq!(store.connection_count(), 1);
    }

    #[test]
    fn test_connect_overwrites() {
        let (mut store, ids) = store_with(2);
        store.connect(ids[0], ids[1], 5);
        store.connect(ids[1], ids[0], 9);

        assert_eq!(store.neighbors(ids[0]), vec![(ids[1], 9)]);
        assert_eq!(store.neighbors(ids[1]), vec![(ids[0], 9)]);
        assert_eq!(store.connection_count(), 1);
    }

    #[test]
    fn test_connect_unknown_endpoint_is_noop() {
        let (mut store, ids) = store_with(1);
        let ghost = StationId::from_slot(99);

        assert!(!store.connect(ids[0], ghost, 3));
        assert!(store.neighbors(ids[0]).is_empty());
        assert!(!store.contains(ghost));
    }

    #[test]
    fn test_disconnect() {
        let (mut store, ids) = store_with(3);
        store.connect(ids[0], ids[1], 5);

        assert_eq!(store.disconnect(ids[0], ids[2]), None);
        assert_eq!(store.disconnect(ids[1], ids[0]), Some(5));
        assert_eq!(store.weight(ids[0], ids[1]), None);
        assert_eq!(store.weight(ids[1], ids[0]), None);
        assert_eq!(store.disconnect(ids[0], ids[1]), None);
    }

    #[test]
    fn test_disconnect_requires_both_sides() {
        let (mut store, ids) = store_with(2);
        // Forge a one-sided entry
        store.rows.get_mut(&ids[0]).unwrap().insert(ids[1], 4);

        assert_eq!(store.disconnect(ids[0], ids[1]), None);
        assert_eq!(store.weight(ids[0], ids[1]), Some(4));
    }

    #[test]
    fn test_self_connection() {
        let (mut store, ids) = store_with(2);
        store.connect(ids[0], ids[0], 2);
        store.connect(ids[0], ids[1], 3);

        assert_eq!(store.neighbors(ids[0]), vec![(ids[0], 2), (ids[1], 3)]);
        assert_eq!(store.connection_count(), 2);
        assert_eq!(store.disconnect(ids[0], ids[0]), Some(2));
        assert_eq!(store.connection_count(), 1);
    }

    #[test]
    fn test_remove_station_purges_references() {
        let (mut store, ids) = store_with(3);
        store.connect(ids[0], ids[1], 1);
        store.connect(ids[0], ids[2], 2);
        store.connect(ids[1], ids[2], 3);

        assert_eq!(store.remove_station(ids[0]), 2);
        assert!(!store.contains(ids[0]));
        assert_eq!(store.neighbors(ids[1]), vec![(ids[2], 3)]);
        assert_eq!(store.neighbors(ids[2]), vec![(ids[1], 3)]);
        assert_eq!(store.station_ids(), vec![ids[1], ids[2]]);
    }

    #[test]
    fn test_neighbor_order_is_by_handle() {
        let (mut store, ids) = store_with(4);
        store.connect(ids[0], ids[3], 1);
        store.connect(ids[0], ids[1], 1);
        store.connect(ids[0], ids[2], 1);

        let order: Vec<StationId> = store.neighbors_of(ids[0]).map(|(id, _)| id).collect();
        assert_eq!(order, vec![ids[1], ids[2], ids[3]]);
    }
}
