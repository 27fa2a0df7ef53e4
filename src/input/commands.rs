//! # Command Interpreter
//!
//! Resolves one line of player input into a verb and an argument.
//!
//! The first word is matched as a case-insensitive prefix against the verbs
//! valid in the current room: the core verbs plus the room's exit
//! directions. A bare direction is shorthand for `go <direction>`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A recognized command keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verb {
    Go,
    Look,
    Get,
    Drop,
    Inventory,
    Help,
    Quit,
}

impl Verb {
    /// All core verbs, in the order help lists them.
    pub const ALL: [Verb; 7] = [
        Verb::Go,
        Verb::Look,
        Verb::Get,
        Verb::Drop,
        Verb::Inventory,
        Verb::Help,
        Verb::Quit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Go => "go",
            Verb::Look => "look",
            Verb::Get => "get",
            Verb::Drop => "drop",
            Verb::Inventory => "inventory",
            Verb::Help => "help",
            Verb::Quit => "quit",
        }
    }

    /// Looks up a core verb by its full, lower-case name.
    pub fn from_name(name: &str) -> Option<Verb> {
        Verb::ALL.into_iter().find(|verb| verb.as_str() == name)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCommand {
    pub verb: Verb,
    /// Everything after the verb, lower-cased and rejoined with single
    /// spaces. Empty when absent.
    pub argument: String,
}

impl ResolvedCommand {
    pub fn new(verb: Verb, argument: impl Into<String>) -> Self {
        Self {
            verb,
            argument: argument.into(),
        }
    }
}

/// Why a line could not be resolved. Reported to the player; play goes on.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandError {
    #[error("you need to enter a command")]
    Empty,

    #[error("I don't understand that command.")]
    Unknown,

    /// The prefix matches several verbs; the player must type more of it
    #[error("Did you mean one of: {}?", .0.join(", "))]
    Ambiguous(Vec<String>),
}

/// Interprets one line of input against the exits of the current room.
///
/// A verb token that exactly equals a valid verb resolves to it even when it
/// is also a prefix of other verbs. Otherwise it must prefix exactly one.
///
/// # Examples
///
/// ```
/// use wayfarer::{interpret, CommandError, ResolvedCommand, Verb};
///
/// let exits = ["north", "south"];
/// assert_eq!(
///     interpret("g  Brass   Key", exits),
///     Err(CommandError::Ambiguous(vec!["get".to_string(), "go".to_string()]))
/// );
/// assert_eq!(
///     interpret("ge Brass   Key", exits),
///     Ok(ResolvedCommand::new(Verb::Get, "brass key"))
/// );
/// assert_eq!(interpret("n", exits), Ok(ResolvedCommand::new(Verb::Go, "north")));
/// ```
pub fn interpret<'a>(
    line: &str,
    directions: impl IntoIterator<Item = &'a str>,
) -> Result<ResolvedCommand, CommandError> {
    let normalized = line.trim().to_lowercase();
    let mut words = normalized.split_whitespace();
    let token = words.next().ok_or(CommandError::Empty)?;
    let argument = words.collect::<Vec<_>>().join(" ");

    let mut valid: BTreeSet<String> = Verb::ALL
        .iter()
        .map(|verb| verb.as_str().to_string())
        .collect();
    valid.extend(directions.into_iter().map(str::to_lowercase));

    let matched = if valid.contains(token) {
        token.to_string()
    } else {
        let mut candidates: Vec<String> = valid
            .into_iter()
            .filter(|verb| verb.starts_with(token))
            .collect();
        match candidates.len() {
            0 => return Err(CommandError::Unknown),
            1 => candidates.remove(0),
            _ => return Err(CommandError::Ambiguous(candidates)),
        }
    };

    Ok(match Verb::from_name(&matched) {
        Some(verb) => ResolvedCommand::new(verb, argument),
        // Anything else in the valid set is an exit direction
        None => ResolvedCommand::new(Verb::Go, matched),
    })
}
