//! # Game State Module
//!
//! Mutable runtime state of a single game: where the player is, what they
//! carry, and whether the game has ended.
//!
//! The state is an explicit value owned by the game loop and passed to every
//! operation. It never outlives the process.

use crate::game::{names_match, Map, Room, RoomId};
use crate::{AdventureError, AdventureResult};
use serde::{Deserialize, Serialize};

/// Items carried by the player, in pickup order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|held| names_match(held, item))
    }

    pub fn add(&mut self, item: String) {
        self.items.push(item);
    }

    /// Removes an item, returning the stored spelling of it.
    pub fn take(&mut self, item: &str) -> Option<String> {
        let index = self.items.iter().position(|held| names_match(held, item))?;
        Some(self.items.remove(index))
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// How the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameCompletionState {
    /// Game is still in progress
    Playing,
    /// The player asked to stop, or input ran out
    Quit,
    /// A win condition was met
    Won,
    /// A lose condition was met
    Lost,
}

impl GameCompletionState {
    pub fn is_terminal(self) -> bool {
        self != GameCompletionState::Playing
    }
}

/// Runtime state of a running game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Room the player occupies; always a room of the map
    pub current_room: RoomId,
    pub inventory: Inventory,
    /// Number of commands processed so far
    pub turn_number: u64,
    pub completion_state: GameCompletionState,
}

impl GameState {
    /// Places a new player in the map's start room.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use wayfarer::{GameState, Map};
    ///
    /// let map = Map::from_value(json!({
    ///     "start": "Hall",
    ///     "rooms": [{ "name": "Hall", "desc": "A hall.", "exits": {} }]
    /// }))
    /// .unwrap();
    /// let state = GameState::new(&map);
    /// assert_eq!(state.current_room.as_str(), "Hall");
    /// assert!(state.inventory.is_empty());
    /// ```
    pub fn new(map: &Map) -> Self {
        Self {
            current_room: map.start_room().clone(),
            inventory: Inventory::new(),
            turn_number: 0,
            completion_state: GameCompletionState::Playing,
        }
    }

    /// Looks up the room the player is in.
    pub fn current_room<'a>(&self, map: &'a Map) -> AdventureResult<&'a Room> {
        map.room(self.current_room.as_str()).ok_or_else(|| {
            AdventureError::InvalidState(format!(
                "current room {} is not in the map",
                self.current_room
            ))
        })
    }

    pub fn current_room_mut<'a>(&self, map: &'a mut Map) -> AdventureResult<&'a mut Room> {
        map.room_mut(self.current_room.as_str()).ok_or_else(|| {
            AdventureError::InvalidState(format!(
                "current room {} is not in the map",
                self.current_room
            ))
        })
    }

    pub fn is_game_ended(&self) -> bool {
        self.completion_state.is_terminal()
    }

    pub fn advance_turn(&mut self) {
        self.turn_number += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn one_room_map() -> Map {
        let mut rooms = HashMap::new();
        let hall = Room::new("Hall", "A hall.");
        rooms.insert(hall.id.clone(), hall);
        Map::new(RoomId::new("Hall"), rooms)
    }

    #[test]
    fn test_inventory_take_and_add() {
        let mut inventory = Inventory::new();
        inventory.add("Lamp".to_string());
        inventory.add("rope".to_string());

        assert!(inventory.contains("lamp"));
        assert_eq!(inventory.take("LAMP"), Some("Lamp".to_string()));
        assert_eq!(inventory.take("lamp"), None);
        assert_eq!(inventory.items(), ["rope".to_string()]);
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_new_state_starts_playing() {
        let map = one_room_map();
        let state = GameState::new(&map);
        assert_eq!(state.turn_number, 0);
        assert!(!state.is_game_ended());
        assert_eq!(state.current_room(&map).unwrap().name(), "Hall");
    }

    #[test]
    fn test_missing_current_room_is_invalid_state() {
        let map = one_room_map();
        let mut state = GameState::new(&map);
        state.current_room = RoomId::new("Attic");
        assert!(matches!(
            state.current_room(&map),
            Err(AdventureError::InvalidState(_))
        ));
    }

    #[test]
    fn test_terminal_states() {
        assert!(!GameCompletionState::Playing.is_terminal());
        assert!(GameCompletionState::Quit.is_terminal());
        assert!(GameCompletionState::Won.is_terminal());
        assert!(GameCompletionState::Lost.is_terminal());
    }
}
