//! Identities for stations.
//!
//! Names use `Arc<str>` for cheap cloning. Handles are plain arena slots
//! issued by the registry and are never reused.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

macro_rules! impl_name {
    ($name:ident) => {
        #[derive(Clone, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(s: impl AsRef<str>) -> Self {
                Self(s.as_ref().into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.cmp(&other.0)
            }
        }

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.hash(state);
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_name!(StationName);

/// Arena handle for a live station.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(u32);

impl StationId {
    pub(crate) fn from_slot(slot: usize) -> Self {
        Self(slot as u32)
    }

    pub(crate) fn slot(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_equality() {
        let name1 = StationName::new("Central");
        let name2 = StationName::new("Central");
        let name3 = name1.clone();

        assert_eq!(name1, name2);
        assert_eq!(name1, name3);
        assert!(Arc::ptr_eq(&name1.0, &name3.0)); // Clone shares Arc
    }

    #[test]
    fn test_name_lookup_by_str() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(StationName::new("Central"), 42);

        assert_eq!(map.get("Central"), Some(&42));
        assert_eq!(map.get(&StationName::new("Central")), Some(&42));
    }

    #[test]
    fn test_name_ordering_is_lexicographic() {
        let mut names: Vec<StationName> = ["b", "B", "a", "ab"].into_iter().map(Into::into).collect();
        names.sort();
        let sorted: Vec<&str> = names.iter().map(StationName::as_str).collect();
        assert_eq!(sorted, vec!["B", "a", "ab", "b"]);
    }

    #[test]
    fn test_station_id_display() {
        assert_eq!(format!("{}", StationId::from_slot(7)), "#7");
        assert_eq!(StationId::from_slot(7).slot(), 7);
    }
}
