//! Static room catalog: room id to priority tier.

use std::collections::{BTreeMap, BTreeSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A physical room and its preference tier (lower tiers are tried first).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Room {
    pub id: String,
    pub tier: u32,
}

/// Immutable set of rooms available to one allocation run.
///
/// Room ids are unique and non-empty. Iteration is always in id order, so a
/// catalog built from the same rooms behaves identically regardless of the
/// order they were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct Catalog {
    rooms: BTreeMap<String, u32>,
}

impl Catalog {
    /// Build a catalog from `(id, tier)` pairs, rejecting empty and duplicate ids.
    pub fn new<I, S>(rooms: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (id, tier) in rooms {
            let id = id.into();
            if id.trim().is_empty() {
                return Err(CoreError::Validation("room id must not be empty".into()));
            }
            if map.insert(id.clone(), tier).is_some() {
                return Err(CoreError::Validation(format!("duplicate room id '{id}'")));
            }
        }
        Ok(Self { rooms: map })
    }

    /// Tier of `room`, or `None` when the room is not in the catalog.
    #[must_use]
    pub fn tier_of(&self, room: &str) -> Option<u32> {
        self.rooms.get(room).copied()
    }

    #[must_use]
    pub fn contains(&self, room: &str) -> bool {
        self.rooms.contains_key(room)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Room ids in ascending id order.
    pub fn room_ids(&self) -> impl Iterator<Item = &str> {
        self.rooms.keys().map(String::as_str)
    }

    /// Rooms in ascending id order.
    pub fn rooms(&self) -> impl Iterator<Item = Room> + '_ {
        self.rooms.iter().map(|(id, tier)| Room {
            id: id.clone(),
            tier: *tier,
        })
    }

    /// Distinct tiers present in the catalog, ascending.
    #[must_use]
    pub fn tiers(&self) -> Vec<u32> {
        self.rooms
            .values()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl TryFrom<BTreeMap<String, u32>> for Catalog {
    type Error = CoreError;

    fn try_from(rooms: BTreeMap<String, u32>) -> Result<Self, Self::Error> {
        Self::new(rooms)
    }
}
