//! # Game Session
//!
//! The read-evaluate-print loop. [`Game`] owns the map and the state and
//! turns one input line into events; [`GameSession`] adds the line source
//! and the display and runs until the game ends.

use crate::game::{ConcreteAction, GameCompletionState, GameEvent, GameState, Map};
use crate::input::{interpret, InputHandler};
use crate::rendering::TextDisplay;
use crate::{AdventureError, AdventureResult};
use log::{debug, info};
use std::io::{BufRead, Write};

/// A running game: one map and the state of the player in it.
#[derive(Debug, Clone)]
pub struct Game {
    map: Map,
    state: GameState,
}

impl Game {
    /// Places the player in the map's start room.
    pub fn new(map: Map) -> Self {
        let state = GameState::new(&map);
        Self { map, state }
    }

    /// Events shown before the first command: the start room.
    ///
    /// Win and lose conditions are not checked here; they only apply when a
    /// room is entered by moving.
    pub fn start(&mut self) -> AdventureResult<Vec<GameEvent>> {
        ConcreteAction::Look.execute(&mut self.state, &mut self.map)
    }

    /// Interprets and executes one line of input.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use wayfarer::{Game, GameEvent, Map};
    ///
    /// let map = Map::from_value(json!({
    ///     "start": "Hall",
    ///     "rooms": [{ "name": "Hall", "desc": "A hall.", "exits": {} }]
    /// }))
    /// .unwrap();
    /// let mut game = Game::new(map);
    /// assert_eq!(game.handle_line("q").unwrap(), vec![GameEvent::Goodbye]);
    /// assert!(game.is_over());
    /// ```
    pub fn handle_line(&mut self, line: &str) -> AdventureResult<Vec<GameEvent>> {
        if self.state.is_game_ended() {
            return Err(AdventureError::InvalidState(
                "the game has already ended".to_string(),
            ));
        }
        self.state.advance_turn();

        let room = self.state.current_room(&self.map)?;
        let command = match interpret(line, room.exit_directions()) {
            Ok(command) => command,
            Err(error) => {
                debug!("Turn {}: unresolved input {:?}", self.state.turn_number, line);
                return Ok(vec![error.into()]);
            }
        };

        debug!("Turn {}: {:?}", self.state.turn_number, command);
        ConcreteAction::from(command).execute(&mut self.state, &mut self.map)
    }

    pub fn is_over(&self) -> bool {
        self.state.is_game_ended()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn map(&self) -> &Map {
        &self.map
    }
}

/// A game wired to a line source and a display.
pub struct GameSession<R, W> {
    game: Game,
    input: InputHandler<R>,
    display: TextDisplay<W>,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    pub fn new(map: Map, input: InputHandler<R>, display: TextDisplay<W>) -> Self {
        Self {
            game: Game::new(map),
            input,
            display,
        }
    }

    /// Runs the loop until the player quits, wins or loses.
    ///
    /// Running out of input counts as quitting.
    pub fn run(&mut self) -> AdventureResult<GameCompletionState> {
        info!("Starting game in {}", self.game.map().start_room());
        let events = self.game.start()?;
        self.display.render_events(&events)?;

        while !self.game.is_over() {
            self.display.render_prompt()?;
            let events = match self.input.read_line()? {
                Some(line) => self.game.handle_line(&line)?,
                None => {
                    info!("Input closed");
                    ConcreteAction::Quit.execute(&mut self.game.state, &mut self.game.map)?
                }
            };
            self.display.render_events(&events)?;
        }

        let outcome = self.game.state.completion_state;
        info!(
            "Game over after {} turns: {:?}",
            self.game.state.turn_number, outcome
        );
        Ok(outcome)
    }

    /// Returns the display, e.g. to inspect captured output.
    pub fn into_display(self) -> TextDisplay<W> {
        self.display
    }

    pub fn game(&self) -> &Game {
        &self.game
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{BlockedAction, RoomId};
    use crate::input::CommandError;
    use serde_json::json;
    use std::io::Cursor;

    fn scenario_map() -> Map {
        Map::from_value(json!({
            "start": "A",
            "rooms": [
                { "name": "A", "desc": "Room A.", "exits": { "north": "B" }, "items": ["brass key"] },
                { "name": "B", "desc": "Room B.", "exits": { "south": "A" }, "locked": true, "unlockKey": "brass key" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_locked_door_scenario() {
        let mut game = Game::new(scenario_map());
        game.handle_line("get brass key").unwrap();
        game.handle_line("go north").unwrap();

        assert_eq!(game.state().inventory.items(), ["brass key".to_string()]);
        assert!(!game.map().room("B").unwrap().locked);
        assert_eq!(game.state().current_room, RoomId::new("B"));
    }

    #[test]
    fn test_unresolved_input_is_reported() {
        let mut game = Game::new(scenario_map());
        assert_eq!(
            game.handle_line("").unwrap(),
            vec![GameEvent::CommandRejected(CommandError::Empty)]
        );
        assert_eq!(
            game.handle_line("xyzzy").unwrap(),
            vec![GameEvent::CommandRejected(CommandError::Unknown)]
        );
        assert_eq!(game.state().current_room, RoomId::new("A"));
        assert_eq!(game.state().turn_number, 2);
    }

    #[test]
    fn test_direction_shorthand() {
        let mut game = Game::new(scenario_map());
        assert_eq!(
            game.handle_line("n").unwrap(),
            vec![GameEvent::Blocked(BlockedAction::Locked(RoomId::new("B")))]
        );
    }

    #[test]
    fn test_no_input_after_game_end() {
        let mut game = Game::new(scenario_map());
        game.handle_line("quit").unwrap();
        assert!(matches!(
            game.handle_line("look"),
            Err(AdventureError::InvalidState(_))
        ));
    }

    #[test]
    fn test_session_ends_at_end_of_input() {
        let input = InputHandler::new(Cursor::new("look\n"));
        let display = TextDisplay::new(Vec::new());
        let mut session = GameSession::new(scenario_map(), input, display);

        assert_eq!(session.run().unwrap(), GameCompletionState::Quit);
        let output = String::from_utf8(session.into_display().into_inner()).unwrap();
        assert!(output.starts_with("> A\n"));
        assert!(output.ends_with("Goodbye!\n\n"));
    }
}
