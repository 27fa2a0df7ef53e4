//! # Game Events
//!
//! Everything the action executor reports back to the loop. Events carry
//! data only; their text lives in the rendering module.

use crate::game::{Room, RoomId};
use crate::input::{CommandError, Verb};
use serde::{Deserialize, Serialize};

/// Snapshot of a room as the player sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomView {
    pub name: String,
    pub description: String,
    pub items: Vec<String>,
    pub exits: Vec<String>,
}

impl From<&Room> for RoomView {
    fn from(room: &Room) -> Self {
        Self {
            name: room.name().to_string(),
            description: room.description.clone(),
            items: room.items.clone(),
            exits: room.exit_directions().map(str::to_string).collect(),
        }
    }
}

/// A command that was understood but could not be carried out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockedAction {
    /// The current room has no exit in this direction
    NoExit(String),
    /// The target room is locked and the player lacks its key
    Locked(RoomId),
    /// The item is not in the current room
    ItemNotHere(String),
    /// The player does not carry the item
    NotCarrying(String),
    /// The verb needs an argument and none was given
    MissingArgument(Verb),
}

/// Observable outcome of executing one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A room was looked at or entered
    RoomDescribed(RoomView),
    DoorUnlocked { room: RoomId, key: String },
    ItemPickedUp(String),
    ItemDropped(String),
    InventoryListed(Vec<String>),
    HelpShown,
    Blocked(BlockedAction),
    /// The input line did not resolve to a command
    CommandRejected(CommandError),
    Goodbye,
    GameWon,
    GameLost,
}

impl From<BlockedAction> for GameEvent {
    fn from(blocked: BlockedAction) -> Self {
        GameEvent::Blocked(blocked)
    }
}

impl From<CommandError> for GameEvent {
    fn from(error: CommandError) -> Self {
        GameEvent::CommandRejected(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_view_snapshot() {
        let room = Room::new("Hall", "A hall.")
            .with_exit("north", "Study")
            .with_exit("down", "Cellar")
            .with_item("lamp");
        let view = RoomView::from(&room);

        assert_eq!(view.name, "Hall");
        assert_eq!(view.items, vec!["lamp".to_string()]);
        assert_eq!(view.exits, vec!["north".to_string(), "down".to_string()]);
    }
}
