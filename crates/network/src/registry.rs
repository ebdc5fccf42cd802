//! Station registry: owns the set of live stations.
//!
//! Stations live in an append-only arena. Removing a station empties its slot
//! but never hands the slot out again, so a stale [`StationId`] stops
//! resolving instead of aliasing a newer station.

use std::collections::HashMap;

use crate::identifiers::*;
use crate::models::types::*;

#[derive(Clone, Debug, Default)]
pub struct StationRegistry {
    slots: Vec<Option<StationName>>,
    by_name: HashMap<StationName, StationId>,
}

impl StationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new station and issue its handle.
    pub fn add(&mut self, name: StationName) -> Result<StationId> {
        if self.by_name.contains_key(&name) {
            return Err(NetworkError::DuplicateStation(name));
        }

        let id = StationId::from_slot(self.slots.len());
        self.slots.push(Some(name.clone()));
        self.by_name.insert(name, id);
        Ok(id)
    }

    pub fn find(&self, name: &str) -> Option<StationId> {
        self.by_name.get(name).copied()
    }

    /// Like [`find`](Self::find), but reports a missing name as an error.
    pub fn resolve(&self, name: &str) -> Result<StationId> {
        self.find(name)
            .ok_or_else(|| NetworkError::UnknownStation(name.into()))
    }

    pub fn remove(&mut self, name: &str) -> Result<StationId> {
        let id = self
            .by_name
            .remove(name)
            .ok_or_else(|| NetworkError::UnknownStation(name.into()))?;
        self.slots[id.slot()] = None;
        Ok(id)
    }

    pub fn name(&self, id: StationId) -> Option<&StationName> {
        self.slots.get(id.slot()).and_then(Option::as_ref)
    }

    pub fn contains(&self, id: StationId) -> bool {
        self.name(id).is_some()
    }

    /// Live stations in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (StationId, &StationName)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, name)| name.as_ref().map(|n| (StationId::from_slot(slot), n)))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
