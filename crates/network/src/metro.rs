//! The metro network facade.
//!
//! [`MetroNetwork`] keeps the registry, adjacency store and ordered index in
//! step. Every public operation either completes fully or returns an error
//! with nothing changed.

use crate::adjacency::AdjacencyStore;
use crate::identifiers::*;
use crate::index::OrderedIndex;
use crate::models::types::*;
use crate::registry::StationRegistry;
use crate::routing::{distances_from, DistanceMap};

#[derive(Clone, Debug, Default)]
pub struct MetroNetwork {
    registry: StationRegistry,
    adjacency: AdjacencyStore,
    index: OrderedIndex,
}

impl MetroNetwork {
    /// Create an empty network
    pub fn new() -> Self {
        Self::default()
    }

    /// The four-station square used as the interactive default:
    /// A-B 5, B-C 3, C-D 4, D-A 7.
    pub fn with_demo_network() -> Result<Self> {
        let mut network = Self::new();
        for name in ["A", "B", "C", "D"] {
            network.add_station(name)?;
        }
        for (a, b, weight) in [("A", "B", 5), ("B", "C", 3), ("C", "D", 4), ("D", "A", 7)] {
            network.add_connection(a, b, weight)?;
        }
        Ok(network)
    }

    // ---- Mutations ----

    pub fn add_station(&mut self, name: impl Into<StationName>) -> Result<StationId> {
        let name = name.into();
        let id = self.registry.add(name.clone())?;
        self.adjacency.add_station(id);
        self.index.insert(name.clone());

        tracing::debug!(station = %name, %id, "added station");
        Ok(id)
    }

    pub fn remove_station(&mut self, name: &str) -> Result<()> {
        let id = self.registry.resolve(name)?;

        let edges = self.adjacency.remove_station(id);
        self.index.remove(name);
        self.registry.remove(name)?;

        tracing::debug!(station = name, %id, edges, "removed station");
        Ok(())
    }

    /// Connect two stations, replacing the weight of an existing connection.
    pub fn add_connection(&mut self, a: &str, b: &str, weight: Weight) -> Result<()> {
        let from = self.registry.resolve(a)?;
        let to = self.registry.resolve(b)?;

        if !self.adjacency.connect(from, to, weight) {
            // Registry and adjacency disagree about which stations exist
            return Err(NetworkError::UnknownStation(a.into()));
        }

        tracing::debug!(from = a, to = b, weight, "connected stations");
        Ok(())
    }

    pub fn remove_connection(&mut self, a: &str, b: &str) -> Result<()> {
        let from = self.registry.resolve(a)?;
        let to = self.registry.resolve(b)?;

        let weight = self
            .adjacency
            .disconnect(from, to)
            .ok_or_else(|| NetworkError::NoSuchConnection {
                from: a.into(),
                to: b.into(),
            })?;

        tracing::debug!(from = a, to = b, weight, "disconnected stations");
        Ok(())
    }

    // ---- Queries ----

    /// Fare for the cheapest trip: shortest distance times [`FARE_PER_UNIT`].
    pub fn fare_between(&self, source: &str, destination: &str) -> Result<u64> {
        match self.distance_between(source, destination)? {
            Distance::Reachable(units) => Ok(units.saturating_mul(FARE_PER_UNIT)),
            Distance::Unreachable => Err(NetworkError::NoRoute {
                from: source.into(),
                to: destination.into(),
            }),
        }
    }

    pub fn distance_between(&self, source: &str, destination: &str) -> Result<Distance> {
        let from = self.registry.resolve(source)?;
        let to = self.registry.resolve(destination)?;
        Ok(self.shortest_paths(from).get(to))
    }

    /// Distances from `source` to every station, in name order.
    pub fn distances_from(&self, source: &str) -> Result<Vec<(StationName, Distance)>> {
        let from = self.registry.resolve(source)?;
        let map = self.shortest_paths(from);

        Ok(self
            .index
            .in_order()
            .into_iter()
            .filter_map(|name| {
                let id = self.registry.find(name.as_str())?;
                Some((name, map.get(id)))
            })
            .collect())
    }

    /// Raw engine output keyed by handle.
    pub fn shortest_paths(&self, source: StationId) -> DistanceMap {
        distances_from(&self.adjacency, source)
    }

    /// Station names in ascending order.
    pub fn list_stations(&self) -> Vec<StationName> {
        self.index.in_order()
    }

    /// Every station in creation order with its neighbors and weights.
    pub fn dump_network(&self) -> Vec<NetworkEntry> {
        self.registry
            .iter()
            .map(|(id, name)| NetworkEntry {
                station: name.clone(),
                neighbors: self.named_neighbors(id),
            })
            .collect()
    }

    pub fn neighbors(&self, name: &str) -> Result<Vec<(StationName, Weight)>> {
        let id = self.registry.resolve(name)?;
        Ok(self.named_neighbors(id))
    }

    pub fn find(&self, name: &str) -> Option<StationId> {
        self.registry.find(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.find(name).is_some()
    }

    pub fn station_count(&self) -> usize {
        self.registry.len()
    }

    pub fn connection_count(&self) -> usize {
        self.adjacency.connection_count()
    }

    fn named_neighbors(&self, id: StationId) -> Vec<(StationName, Weight)> {
        self.adjacency
            .neighbors_of(id)
            .filter_map(|(neighbor, weight)| {
                self.registry.name(neighbor).map(|name| (name.clone(), weight))
            })
            .collect()
    }
}
