//! # Display Management
//!
//! The text of every game event, and a display that writes it to a
//! line-oriented sink.

use crate::config;
use crate::game::{BlockedAction, GameEvent, RoomView};
use crate::input::Verb;
use crate::AdventureResult;
use std::fmt;
use std::io::{Stdout, Write};

impl fmt::Display for RoomView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "> {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        if !self.items.is_empty() {
            writeln!(f, "Items: {}", self.items.join(", "))?;
        }
        if self.exits.is_empty() {
            write!(f, "Exits: none")
        } else {
            write!(f, "Exits: {}", self.exits.join(", "))
        }
    }
}

impl fmt::Display for BlockedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockedAction::NoExit(direction) => write!(f, "There's no way to go {}.", direction),
            BlockedAction::Locked(room) => write!(f, "The door to {} is locked.", room),
            BlockedAction::ItemNotHere(item) => write!(f, "There's no {} here.", item),
            BlockedAction::NotCarrying(item) => write!(f, "You aren't carrying {}.", item),
            BlockedAction::MissingArgument(Verb::Go) => write!(f, "Where would you like to go?"),
            BlockedAction::MissingArgument(verb) => write!(f, "What would you like to {}?", verb),
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::RoomDescribed(view) => write!(f, "{}", view),
            GameEvent::DoorUnlocked { room, key } => {
                write!(f, "You unlock the door to {} with the {}.", room, key)
            }
            GameEvent::ItemPickedUp(item) => write!(f, "You pick up the {}.", item),
            GameEvent::ItemDropped(item) => write!(f, "You drop the {}.", item),
            GameEvent::InventoryListed(items) if items.is_empty() => {
                write!(f, "You aren't carrying anything.")
            }
            GameEvent::InventoryListed(items) => {
                write!(f, "Inventory:")?;
                for item in items {
                    write!(f, "\n  {}", item)?;
                }
                Ok(())
            }
            GameEvent::HelpShown => {
                let verbs: Vec<_> = Verb::ALL.iter().map(|verb| verb.as_str()).collect();
                writeln!(f, "You can run the following commands:")?;
                writeln!(f, "  {}", verbs.join(", "))?;
                writeln!(f)?;
                write!(f, "You can also use exit directions as verbs.")
            }
            GameEvent::Blocked(blocked) => write!(f, "{}", blocked),
            GameEvent::CommandRejected(error) => write!(f, "{}", error),
            GameEvent::Goodbye => write!(f, "Goodbye!"),
            GameEvent::GameWon => write!(f, "Congratulations, you win!"),
            GameEvent::GameLost => write!(f, "You lose. Game over."),
        }
    }
}

/// Writes game output to a line-oriented sink.
pub struct TextDisplay<W> {
    writer: W,
}

impl TextDisplay<Stdout> {
    /// Creates a display writing to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TextDisplay<W> {
    /// Creates a display over any writer.
    ///
    /// # Examples
    ///
    /// ```
    /// use wayfarer::{GameEvent, TextDisplay};
    ///
    /// let mut display = TextDisplay::new(Vec::new());
    /// display.render_events(&[GameEvent::Goodbye]).unwrap();
    /// assert_eq!(display.into_inner(), b"Goodbye!\n\n");
    /// ```
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes each event followed by a blank line.
    pub fn render_events(&mut self, events: &[GameEvent]) -> AdventureResult<()> {
        for event in events {
            writeln!(self.writer, "{}", event)?;
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Writes the input prompt without a line break.
    pub fn render_prompt(&mut self) -> AdventureResult<()> {
        write!(self.writer, "{}", config::PROMPT)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RoomId;
    use crate::input::CommandError;

    fn hall() -> RoomView {
        RoomView {
            name: "Hall".to_string(),
            description: "A long hall.".to_string(),
            items: vec!["lamp".to_string(), "rope".to_string()],
            exits: vec!["north".to_string(), "east".to_string()],
        }
    }

    #[test]
    fn test_room_text() {
        assert_eq!(
            GameEvent::RoomDescribed(hall()).to_string(),
            "> Hall\n\nA long hall.\n\nItems: lamp, rope\nExits: north, east"
        );
    }

    #[test]
    fn test_room_text_without_items_or_exits() {
        let view = RoomView {
            items: Vec::new(),
            exits: Vec::new(),
            ..hall()
        };
        assert_eq!(view.to_string(), "> Hall\n\nA long hall.\n\nExits: none");
    }

    #[test]
    fn test_blocked_text() {
        assert_eq!(
            BlockedAction::NoExit("south".into()).to_string(),
            "There's no way to go south."
        );
        assert_eq!(
            BlockedAction::Locked(RoomId::new("Vault")).to_string(),
            "The door to Vault is locked."
        );
        assert_eq!(
            BlockedAction::ItemNotHere("lamp".into()).to_string(),
            "There's no lamp here."
        );
        assert_eq!(
            BlockedAction::NotCarrying("lamp".into()).to_string(),
            "You aren't carrying lamp."
        );
        assert_eq!(
            BlockedAction::MissingArgument(Verb::Get).to_string(),
            "What would you like to get?"
        );
        assert_eq!(
            BlockedAction::MissingArgument(Verb::Go).to_string(),
            "Where would you like to go?"
        );
    }

    #[test]
    fn test_inventory_text() {
        assert_eq!(
            GameEvent::InventoryListed(Vec::new()).to_string(),
            "You aren't carrying anything."
        );
        assert_eq!(
            GameEvent::InventoryListed(vec!["lamp".into(), "brass key".into()]).to_string(),
            "Inventory:\n  lamp\n  brass key"
        );
    }

    #[test]
    fn test_help_lists_every_verb() {
        let text = GameEvent::HelpShown.to_string();
        assert!(text.contains("go, look, get, drop, inventory, help, quit"));
        assert!(text.ends_with("You can also use exit directions as verbs."));
    }

    #[test]
    fn test_rejected_command_uses_reason() {
        assert_eq!(
            GameEvent::CommandRejected(CommandError::Empty).to_string(),
            "you need to enter a command"
        );
    }

    #[test]
    fn test_prompt() {
        let mut display = TextDisplay::new(Vec::new());
        display.render_prompt().unwrap();
        assert_eq!(display.into_inner(), config::PROMPT.as_bytes());
    }
}
