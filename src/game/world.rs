//! # World Module
//!
//! The map model: rooms, their exits and items, locks and win/lose
//! conditions. Only `items` and `locked` change during play.

use crate::game::{names_match, RoomId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A predicate over the player's inventory, checked when entering a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Item the player must be carrying for the condition to hold
    pub item: String,
}

impl Condition {
    /// Creates a condition requiring `item`.
    pub fn requires(item: impl Into<String>) -> Self {
        Self { item: item.into() }
    }
}

/// A directed, labelled edge to another room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    /// Direction name as written in the map
    pub direction: String,
    /// Room the exit leads to
    pub target: RoomId,
}

/// A named location in the map graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub description: String,
    /// Exits in document order
    pub exits: Vec<Exit>,
    /// Items currently lying in the room
    pub items: Vec<String>,
    pub locked: bool,
    /// Item that unlocks the room. A locked room without one stays locked.
    pub unlock_key: Option<String>,
    pub win_condition: Option<Condition>,
    pub lose_condition: Option<Condition>,
}

impl Room {
    /// Creates an unlocked room with no exits or items.
    ///
    /// # Examples
    ///
    /// ```
    /// use wayfarer::Room;
    ///
    /// let room = Room::new("Hall", "A draughty hall.")
    ///     .with_exit("north", "Library")
    ///     .with_item("lamp");
    /// assert_eq!(room.exit("NORTH").map(|e| e.target.as_str()), Some("Library"));
    /// assert!(room.has_item("Lamp"));
    /// ```
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: RoomId::new(name),
            description: description.into(),
            exits: Vec::new(),
            items: Vec::new(),
            locked: false,
            unlock_key: None,
            win_condition: None,
            lose_condition: None,
        }
    }

    pub fn with_exit(mut self, direction: impl Into<String>, target: impl Into<String>) -> Self {
        self.exits.push(Exit {
            direction: direction.into(),
            target: RoomId::new(target),
        });
        self
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Locks the room, optionally naming the key that opens it.
    pub fn locked_with(mut self, key: Option<&str>) -> Self {
        self.locked = true;
        self.unlock_key = key.map(str::to_string);
        self
    }

    pub fn with_win_condition(mut self, item: impl Into<String>) -> Self {
        self.win_condition = Some(Condition::requires(item));
        self
    }

    pub fn with_lose_condition(mut self, item: impl Into<String>) -> Self {
        self.lose_condition = Some(Condition::requires(item));
        self
    }

    /// Display title of the room.
    pub fn name(&self) -> &str {
        self.id.as_str()
    }

    /// Finds the exit for a direction, ignoring case.
    pub fn exit(&self, direction: &str) -> Option<&Exit> {
        self.exits
            .iter()
            .find(|exit| names_match(&exit.direction, direction))
    }

    /// Direction names of all exits, in document order.
    pub fn exit_directions(&self) -> impl Iterator<Item = &str> {
        self.exits.iter().map(|exit| exit.direction.as_str())
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.items.iter().any(|held| names_match(held, item))
    }

    /// Removes an item from the room, returning the map's spelling of it.
    pub fn take_item(&mut self, item: &str) -> Option<String> {
        let index = self.items.iter().position(|held| names_match(held, item))?;
        Some(self.items.remove(index))
    }

    pub fn put_item(&mut self, item: String) {
        self.items.push(item);
    }
}

/// The validated map: every exit target and the start room exist.
///
/// Construct maps through [`Map::from_value`](crate::Map::from_value) or
/// [`load_map`](crate::load_map); [`Map::new`] is the unchecked constructor
/// they finish with. There is no `Deserialize` impl, so a map cannot skip
/// validation:
///
/// ```compile_fail
/// let map: wayfarer::Map = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Map {
    start_room: RoomId,
    rooms: HashMap<RoomId, Room>,
}

impl Map {
    /// Assembles a map from already-validated parts.
    pub(crate) fn new(start_room: RoomId, rooms: HashMap<RoomId, Room>) -> Self {
        Self { start_room, rooms }
    }

    /// Room the player begins in.
    pub fn start_room(&self) -> &RoomId {
        &self.start_room
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    /// Iterates over all rooms in no particular order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
