//! # Action System
//!
//! Applies resolved commands to the game state and the map.
//!
//! Every action returns the events it produced. Blocked actions (no such
//! exit, a locked door, a missing item) are events too and leave the state
//! untouched. An `Err` only ever means the state and the map disagree.

use crate::game::{
    BlockedAction, Condition, GameCompletionState, GameEvent, GameState, Inventory, Map, Room,
    RoomView,
};
use crate::input::{ResolvedCommand, Verb};
use crate::{AdventureError, AdventureResult};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// An executable player action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConcreteAction {
    Look,
    Go(String),
    Get(String),
    Drop(String),
    Inventory,
    Help,
    Quit,
}

impl From<ResolvedCommand> for ConcreteAction {
    fn from(command: ResolvedCommand) -> Self {
        match command.verb {
            Verb::Go => ConcreteAction::Go(command.argument),
            Verb::Look => ConcreteAction::Look,
            Verb::Get => ConcreteAction::Get(command.argument),
            Verb::Drop => ConcreteAction::Drop(command.argument),
            Verb::Inventory => ConcreteAction::Inventory,
            Verb::Help => ConcreteAction::Help,
            Verb::Quit => ConcreteAction::Quit,
        }
    }
}

impl ConcreteAction {
    /// Executes the action.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use wayfarer::{ConcreteAction, GameEvent, GameState, Map};
    ///
    /// let mut map = Map::from_value(json!({
    ///     "start": "Hall",
    ///     "rooms": [{ "name": "Hall", "desc": "A hall.", "exits": {}, "items": ["lamp"] }]
    /// }))
    /// .unwrap();
    /// let mut state = GameState::new(&map);
    ///
    /// let events = ConcreteAction::Get("lamp".into()).execute(&mut state, &mut map).unwrap();
    /// assert_eq!(events, vec![GameEvent::ItemPickedUp("lamp".into())]);
    /// assert!(state.inventory.contains("lamp"));
    /// ```
    pub fn execute(&self, state: &mut GameState, map: &mut Map) -> AdventureResult<Vec<GameEvent>> {
        match self {
            ConcreteAction::Look => Ok(vec![describe(state.current_room(map)?)]),
            ConcreteAction::Go(direction) => go(direction, state, map),
            ConcreteAction::Get(item) => get(item, state, map),
            ConcreteAction::Drop(item) => drop_item(item, state, map),
            ConcreteAction::Inventory => Ok(vec![GameEvent::InventoryListed(
                state.inventory.items().to_vec(),
            )]),
            ConcreteAction::Help => Ok(vec![GameEvent::HelpShown]),
            ConcreteAction::Quit => {
                info!("Player quit the game");
                state.completion_state = GameCompletionState::Quit;
                Ok(vec![GameEvent::Goodbye])
            }
        }
    }
}

fn describe(room: &Room) -> GameEvent {
    GameEvent::RoomDescribed(RoomView::from(room))
}

fn go(direction: &str, state: &mut GameState, map: &mut Map) -> AdventureResult<Vec<GameEvent>> {
    if direction.is_empty() {
        return Ok(vec![BlockedAction::MissingArgument(Verb::Go).into()]);
    }

    let Some(exit) = state.current_room(map)?.exit(direction) else {
        return Ok(vec![BlockedAction::NoExit(direction.to_string()).into()]);
    };
    let target_id = exit.target.clone();

    let target = map.room_mut(target_id.as_str()).ok_or_else(|| {
        AdventureError::InvalidState(format!("exit leads to missing room {}", target_id))
    })?;

    let mut events = Vec::new();
    if target.locked {
        // The key stays in the inventory and the room stays unlocked.
        match target.unlock_key.as_deref() {
            Some(key) if state.inventory.contains(key) => {
                info!("Unlocked {} with {}", target_id, key);
                events.push(GameEvent::DoorUnlocked {
                    room: target_id.clone(),
                    key: key.to_string(),
                });
                target.locked = false;
            }
            _ => {
                debug!("{} is locked", target_id);
                return Ok(vec![BlockedAction::Locked(target_id).into()]);
            }
        }
    }

    info!("Player moved from {} to {}", state.current_room, target_id);
    state.current_room = target_id;
    events.push(describe(target));

    if let Some(outcome) = evaluate_conditions(target, &state.inventory) {
        info!("Game ended: {:?}", outcome);
        state.completion_state = outcome;
        events.push(match outcome {
            GameCompletionState::Won => GameEvent::GameWon,
            _ => GameEvent::GameLost,
        });
    }

    Ok(events)
}

/// Checks a room's win and lose conditions against the inventory.
///
/// Win is checked first, so a room satisfying both is a win.
pub fn evaluate_conditions(room: &Room, inventory: &Inventory) -> Option<GameCompletionState> {
    let satisfied = |condition: &Option<Condition>| {
        condition
            .as_ref()
            .is_some_and(|condition| inventory.contains(&condition.item))
    };

    if satisfied(&room.win_condition) {
        Some(GameCompletionState::Won)
    } else if satisfied(&room.lose_condition) {
        Some(GameCompletionState::Lost)
    } else {
        None
    }
}

fn get(item: &str, state: &mut GameState, map: &mut Map) -> AdventureResult<Vec<GameEvent>> {
    if item.is_empty() {
        return Ok(vec![BlockedAction::MissingArgument(Verb::Get).into()]);
    }

    let room = state.current_room_mut(map)?;
    match room.take_item(item) {
        Some(taken) => {
            debug!("Picked up {} in {}", taken, room.id);
            state.inventory.add(taken.clone());
            Ok(vec![GameEvent::ItemPickedUp(taken)])
        }
        None => Ok(vec![BlockedAction::ItemNotHere(item.to_string()).into()]),
    }
}

fn drop_item(item: &str, state: &mut GameState, map: &mut Map) -> AdventureResult<Vec<GameEvent>> {
    if item.is_empty() {
        return Ok(vec![BlockedAction::MissingArgument(Verb::Drop).into()]);
    }

    let room = state.current_room_mut(map)?;
    match state.inventory.take(item) {
        Some(dropped) => {
            debug!("Dropped {} in {}", dropped, room.id);
            room.put_item(dropped.clone());
            Ok(vec![GameEvent::ItemDropped(dropped)])
        }
        None => Ok(vec![BlockedAction::NotCarrying(item.to_string()).into()]),
    }
}
