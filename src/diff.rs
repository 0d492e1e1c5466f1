// src/diff.rs

use std::collections::HashMap;

use crate::member::Member;

/// Members present now but not before, and vice versa. Each list keeps the
/// iteration order of the roster it came from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterDiff {
    pub joined: Vec<Member>,
    pub left: Vec<Member>,
}

impl RosterDiff {
    pub fn is_empty(&self) -> bool {
        self.joined.is_empty() && self.left.is_empty()
    }
}

/// Diff two rosters by `character_id`. Pure; O(n+m) via hash lookups.
/// Duplicate ids within one roster collapse under the lookup map
/// (last-write-wins for the name association).
pub fn diff_rosters(current: &[Member], previous: &[Member]) -> RosterDiff {
    let current_ids: HashMap<i64, &str> = current
        .iter()
        .map(|m| (m.character_id, m.name.as_str()))
        .collect();
    let previous_ids: HashMap<i64, &str> = previous
        .iter()
        .map(|m| (m.character_id, m.name.as_str()))
        .collect();

    let joined = current
        .iter()
        .filter(|m| !previous_ids.contains_key(&m.character_id))
        .cloned()
        .collect();
    let left = previous
        .iter()
        .filter(|m| !current_ids.contains_key(&m.character_id))
        .cloned()
        .collect();

    RosterDiff { joined, left }
}
