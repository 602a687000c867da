//! # Room Registry
//!
//! In-memory collection of rooms keyed by name. The registry is the only
//! mutable state in the engine and assumes a single owner; it does no
//! locking of its own.
//!
//! ## Invariant
//!
//! No two rooms held at the same time share a `name`. A rejected add leaves
//! the registry exactly as it was.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::room::Room;

/// Insertion-ordered set of rooms with unique names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Room>", into = "Vec<Room>")]
pub struct RoomRegistry {
    rooms: Vec<Room>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        RoomRegistry::default()
    }

    /// Append a room.
    ///
    /// # Errors
    ///
    /// [`CalcError::DuplicateName`] when a room with the same name is held.
    pub fn add(&mut self, room: Room) -> CalcResult<()> {
        if self.contains(&room.name) {
            return Err(CalcError::duplicate_name(room.name));
        }
        tracing::debug!(room = %room.name, agent = %room.agent, "room added");
        self.rooms.push(room);
        Ok(())
    }

    /// Remove every room named `name`. Removing an absent name is a no-op.
    ///
    /// Returns the number of rooms removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.rooms.len();
        self.rooms.retain(|r| r.name != name);
        let removed = before - self.rooms.len();
        if removed > 0 {
            tracing::debug!(room = %name, "room removed");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.rooms.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rooms.iter().any(|r| r.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.name == name)
    }

    /// Rooms in insertion order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Room> {
        self.rooms.iter()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl TryFrom<Vec<Room>> for RoomRegistry {
    type Error = CalcError;

    fn try_from(rooms: Vec<Room>) -> Result<Self, Self::Error> {
        let mut registry = RoomRegistry::new();
        for room in rooms {
            registry.add(room)?;
        }
        Ok(registry)
    }
}

impl From<RoomRegistry> for Vec<Room> {
    fn from(registry: RoomRegistry) -> Self {
        registry.rooms
    }
}

impl<'a> IntoIterator for &'a RoomRegistry {
    type Item = &'a Room;
    type IntoIter = std::slice::Iter<'a, Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn room(name: &str) -> Room {
        Room::new(name, 10.0, 8.0, 3.0, 7.0, 0.0, 20.0)
    }

    #[test]
    fn test_add_and_get() {
        let mut registry = RoomRegistry::new();
        registry.add(room("ServerRoom")).unwrap();
        registry.add(room("UPS")).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("UPS"));
        assert_eq!(registry.get("ServerRoom").unwrap().length, 10.0);
    }

    #[test]
    fn test_duplicate_add_rejected_unchanged() {
        let mut registry = RoomRegistry::new();
        registry.add(room("ServerRoom")).unwrap();
        let before = registry.clone();

        let mut dup = room("ServerRoom");
        dup.length = 99.0;
        let err = registry.add(dup).unwrap_err();

        assert_eq!(err, CalcError::duplicate_name("ServerRoom"));
        assert_eq!(registry, before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut registry = RoomRegistry::new();
        registry.add(room("A")).unwrap();
        registry.add(room("B")).unwrap();

        assert_eq!(registry.remove("A"), 1);
        let after_first = registry.clone();
        assert_eq!(registry.remove("A"), 0);
        assert_eq!(registry, after_first);
        assert_eq!(registry.remove("never-added"), 0);
    }

    #[test]
    fn test_clear() {
        let mut registry = RoomRegistry::new();
        registry.add(room("A")).unwrap();
        registry.clear();
        assert!(registry.is_empty());
        registry.add(room("A")).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_insertion_order() {
        let mut registry = RoomRegistry::new();
        for name in ["C", "A", "B"] {
            registry.add(room(name)).unwrap();
        }
        let names: Vec<&str> = registry.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_deserialize_rejects_duplicates() {
        let rooms = vec![room("A"), room("A")];
        let json = serde_json::to_string(&rooms).unwrap();
        let err = serde_json::from_str::<RoomRegistry>(&json).unwrap_err();
        assert!(err.to_string().contains("Duplicate room name"));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u8),
        Remove(u8),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![(0u8..6).prop_map(Op::Add), (0u8..6).prop_map(Op::Remove)]
    }

    proptest! {
        #[test]
        fn test_names_stay_unique(ops in proptest::collection::vec(op(), 0..64)) {
            let mut registry = RoomRegistry::new();
            for op in ops {
                match op {
                    Op::Add(n) => {
                        let name = format!("R{}", n);
                        let existed = registry.contains(&name);
                        let before = registry.len();
                        let result = registry.add(room(&name));
                        prop_assert_eq!(result.is_err(), existed);
                        prop_assert_eq!(registry.len(), if existed { before } else { before + 1 });
                    }
                    Op::Remove(n) => {
                        let name = format!("R{}", n);
                        registry.remove(&name);
                        prop_assert!(!registry.contains(&name));
                        prop_assert_eq!(registry.remove(&name), 0);
                    }
                }
                let names: HashSet<&str> = registry.iter().map(|r| r.name.as_str()).collect();
                prop_assert_eq!(names.len(), registry.len());
            }
        }
    }
}
