//! # Game Module
//!
//! Core game model, state management and action execution.
//!
//! This module contains the fundamental building blocks of the interpreter:
//! - The map model of rooms, exits, items and locks
//! - Validation turning a raw document into a map
//! - Mutable game state for a single running game
//! - The action executor and the events it produces

pub mod actions;
pub mod events;
pub mod state;
pub mod validation;
pub mod world;

pub use actions::*;
pub use events::*;
pub use state::*;
pub use validation::*;
pub use world::*;

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a room: its unique, non-empty name.
///
/// # Examples
///
/// ```
/// use wayfarer::RoomId;
///
/// let id = RoomId::new("Cellar");
/// assert_eq!(id.as_str(), "Cellar");
/// assert_eq!(id.to_string(), "Cellar");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Creates a room identifier from a room name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the room name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for RoomId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoomId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Comparison used for item and direction names typed by the player:
/// case-insensitive, with any run of whitespace counting as one space.
pub fn names_match(a: &str, b: &str) -> bool {
    let a = a.split_whitespace().map(str::to_lowercase);
    let b = b.split_whitespace().map(str::to_lowercase);
    a.eq(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_room_id_lookup_by_str() {
        let mut rooms = HashMap::new();
        rooms.insert(RoomId::new("Hall"), 1);
        assert_eq!(rooms.get("Hall"), Some(&1));
        assert_eq!(rooms.get("hall"), None);
    }

    #[test]
    fn test_names_match_ignores_case() {
        assert!(names_match("Brass Key", "brass key"));
        assert!(!names_match("brass key", "brass"));
    }

    #[test]
    fn test_names_match_collapses_whitespace() {
        assert!(names_match("brass  key", "brass key"));
        assert!(names_match(" Brass\tKey ", "brass key"));
        assert!(!names_match("brasskey", "brass key"));
    }
}
