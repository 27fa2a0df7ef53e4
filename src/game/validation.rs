//! # Map Validation
//!
//! Turns a raw map document into a validated [`Map`].
//!
//! The document is first deserialized into loose raw records where every
//! required field is optional, so that a missing field can be reported as a
//! [`MapError`] rather than a parse failure. Type mismatches (a number where
//! a name belongs) are parse failures and surface as
//! [`AdventureError::Malformed`].

use crate::game::{Condition, Exit, Map, Room, RoomId};
use crate::{AdventureError, AdventureResult};
use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

/// Semantic problems in an otherwise well-formed map document.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A top-level field (`start` or `rooms`) is absent
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A room lacks `name`, `desc` or `exits`
    #[error("room at index {room_index} is missing required field `{field}`")]
    MissingRoomField {
        room_index: usize,
        field: &'static str,
    },

    #[error("room at index {room_index} has an empty name")]
    EmptyRoomName { room_index: usize },

    #[error("duplicate room name `{0}`")]
    DuplicateRoomName(String),

    /// An exit names a room that is not in the map
    #[error("exit `{direction}` of room `{room}` leads to unknown room `{target}`")]
    InvalidExitTarget {
        room: String,
        direction: String,
        target: String,
    },

    /// An exit target is not a string
    #[error("exit `{direction}` of room `{room}` must name a room")]
    InvalidExitValue { room: String, direction: String },

    #[error("start room `{0}` does not exist")]
    InvalidStartRoom(String),
}

#[derive(Debug, Deserialize)]
struct RawMap {
    start: Option<String>,
    rooms: Option<Vec<RawRoom>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRoom {
    name: Option<String>,
    desc: Option<String>,
    exits: Option<serde_json::Map<String, Value>>,
    #[serde(default)]
    items: Vec<String>,
    #[serde(default)]
    locked: bool,
    unlock_key: Option<String>,
    /// Older spelling of `unlockKey`, which wins when both are present
    key: Option<String>,
    win_condition: Option<Condition>,
    lose_condition: Option<Condition>,
}

impl RawRoom {
    fn into_room(self, room_index: usize) -> Result<Room, MapError> {
        let missing = |field| MapError::MissingRoomField { room_index, field };

        let name = self.name.ok_or_else(|| missing("name"))?;
        if name.trim().is_empty() {
            return Err(MapError::EmptyRoomName { room_index });
        }
        let description = self.desc.ok_or_else(|| missing("desc"))?;
        let raw_exits = self.exits.ok_or_else(|| missing("exits"))?;

        let mut exits = Vec::with_capacity(raw_exits.len());
        for (direction, target) in raw_exits {
            match target {
                Value::String(target) => exits.push(Exit {
                    direction,
                    target: RoomId::new(target),
                }),
                _ => {
                    return Err(MapError::InvalidExitValue {
                        room: name,
                        direction,
                    })
                }
            }
        }

        Ok(Room {
            id: RoomId::new(name),
            description,
            exits,
            items: self.items,
            locked: self.locked,
            unlock_key: self.unlock_key.or(self.key),
            win_condition: self.win_condition,
            lose_condition: self.lose_condition,
        })
    }
}

impl RawMap {
    fn validate(self) -> Result<Map, MapError> {
        let start = self.start.ok_or(MapError::MissingField("start"))?;
        let raw_rooms = self.rooms.ok_or(MapError::MissingField("rooms"))?;

        // Every name is collected before any exit is checked, so exits may
        // point at rooms declared later in the document.
        let mut names = HashSet::with_capacity(raw_rooms.len());
        let mut rooms = Vec::with_capacity(raw_rooms.len());
        for (index, raw) in raw_rooms.into_iter().enumerate() {
            let room = raw.into_room(index)?;
            if !names.insert(room.id.clone()) {
                return Err(MapError::DuplicateRoomName(room.id.to_string()));
            }
            rooms.push(room);
        }

        for room in &rooms {
            for exit in &room.exits {
                if !names.contains(&exit.target) {
                    return Err(MapError::InvalidExitTarget {
                        room: room.id.to_string(),
                        direction: exit.direction.clone(),
                        target: exit.target.to_string(),
                    });
                }
            }
        }

        let start = RoomId::new(start);
        if !names.contains(&start) {
            return Err(MapError::InvalidStartRoom(start.to_string()));
        }

        let rooms = rooms
            .into_iter()
            .map(|room| (room.id.clone(), room))
            .collect();
        Ok(Map::new(start, rooms))
    }
}

impl Map {
    /// Validates a raw map document.
    ///
    /// Validation is all-or-nothing: the first problem found is returned and
    /// no partial map is built.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use wayfarer::Map;
    ///
    /// let map = Map::from_value(json!({
    ///     "start": "Hall",
    ///     "rooms": [
    ///         { "name": "Hall", "desc": "A hall.", "exits": { "north": "Study" } },
    ///         { "name": "Study", "desc": "Books.", "exits": {} }
    ///     ]
    /// }))
    /// .unwrap();
    /// assert_eq!(map.room_count(), 2);
    /// ```
    pub fn from_value(value: Value) -> AdventureResult<Self> {
        let raw: RawMap = serde_json::from_value(value)?;
        let map = raw.validate()?;
        debug!(
            "Validated map with {} rooms, starting in {}",
            map.room_count(),
            map.start_room()
        );
        Ok(map)
    }
}

/// Reads, parses and validates a map file.
pub fn load_map(path: impl AsRef<Path>) -> AdventureResult<Map> {
    let path = path.as_ref();
    info!("Loading map from {}", path.display());

    let text = std::fs::read_to_string(path).map_err(|source| AdventureError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value = serde_json::from_str(&text)?;
    Map::from_value(document)
}
