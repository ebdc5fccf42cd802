//! Core value types and errors for the metro network.

use std::fmt;

use crate::identifiers::*;

/// Edge length in distance units.
pub type Weight = u32;

/// Fare charged per unit of shortest-path distance.
pub const FARE_PER_UNIT: u64 = 2;

// ============================================================================
// Distances
// ============================================================================

/// Shortest-path length from a source, or the unreachable sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distance {
    Reachable(u64),
    Unreachable,
}

impl Distance {
    pub fn units(self) -> Option<u64> {
        match self {
            Self::Reachable(units) => Some(units),
            Self::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Self::Reachable(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reachable(units) => write!(f, "{} units", units),
            Self::Unreachable => write!(f, "unreachable"),
        }
    }
}

// ============================================================================
// Data Structures
// ============================================================================

/// One station of a network dump together with its outgoing edges.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkEntry {
    pub station: StationName,
    pub neighbors: Vec<(StationName, Weight)>,
}

impl fmt::Display for NetworkEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station {} Neighbors:", self.station)?;
        for (neighbor, weight) in &self.neighbors {
            write!(f, " {}({} units)", neighbor, weight)?;
        }
        Ok(())
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    #[error("Station already exists: {0}")]
    DuplicateStation(StationName),

    #[error("Station not found: {0}")]
    UnknownStation(StationName),

    #[error("No connection between {from} and {to}")]
    NoSuchConnection { from: StationName, to: StationName },

    #[error("No route between {from} and {to}")]
    NoRoute { from: StationName, to: StationName },
}

pub type Result<T> = std::result::Result<T, NetworkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_units() {
        assert_eq!(Distance::Reachable(8).units(), Some(8));
        assert_eq!(Distance::Unreachable.units(), None);
        assert!(Distance::Reachable(0).is_reachable());
        assert!(!Distance::Unreachable.is_reachable());
    }

    #[test]
    fn test_entry_display() {
        let entry = NetworkEntry {
            station: "A".into(),
            neighbors: vec![("B".into(), 5), ("D".into(), 7)],
        };
        assert_eq!(entry.to_string(), "Station A Neighbors: B(5 units) D(7 units)");
    }

    #[test]
    fn test_error_messages() {
        let err = NetworkError::NoSuchConnection {
            from: "A".into(),
            to: "C".into(),
        };
        assert_eq!(err.to_string(), "No connection between A and C");
        assert_eq!(
            NetworkError::UnknownStation("Z".into()).to_string(),
            "Station not found: Z"
        );
    }
}
