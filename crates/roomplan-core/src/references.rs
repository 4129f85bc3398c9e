//! Checks for rooms referenced by events but unknown to a consumer.
//!
//! The allocator itself only assigns catalog rooms, but pinned events can name
//! any room. Exporters decide whether such references are fatal.

use std::collections::BTreeSet;

use crate::errors::CoreError;
use crate::event::Event;

/// What to do when an event references an unknown room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownRoomPolicy {
    /// Return the unknown rooms and let the caller carry on.
    #[default]
    Report,
    /// Fail with [`CoreError::UnknownRooms`].
    Strict,
}

/// Sorted, de-duplicated rooms used by `events` for which `is_known` is false.
pub fn unknown_rooms<F>(events: &[Event], is_known: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    events
        .iter()
        .filter_map(Event::room)
        .filter(|&room| !is_known(room))
        .map(str::to_owned)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Apply `policy` to the unknown rooms referenced by `events`.
pub fn check_room_references<F>(
    events: &[Event],
    is_known: F,
    policy: UnknownRoomPolicy,
) -> Result<Vec<String>, CoreError>
where
    F: Fn(&str) -> bool,
{
    let unknown = unknown_rooms(events, is_known);
    if policy == UnknownRoomPolicy::Strict && !unknown.is_empty() {
        return Err(CoreError::UnknownRooms(unknown));
    }
    Ok(unknown)
}
