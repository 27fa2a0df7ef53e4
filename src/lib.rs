//! # Wayfarer
//!
//! A text-adventure interpreter for user-authored maps.
//!
//! ## Architecture Overview
//!
//! A map is a graph of named rooms joined by labelled exits. The interpreter
//! loads one map, places the player in its start room and runs a
//! read-evaluate-print loop until the player quits, wins or loses.
//!
//! - **Game**: the validated map model, the mutable game state, and the
//!   action executor that turns commands into [`GameEvent`]s
//! - **Input**: line input and the command interpreter with verb abbreviation
//! - **Rendering**: the text of every event, written to a line-oriented sink
//! - **Session**: the loop tying input, execution and rendering together
//!
//! Fatal problems (bad arguments, unreadable or invalid maps) are
//! [`AdventureError`]s and stop the process. Problems with a single command
//! are ordinary values reported to the player, and play continues.

pub mod game;
pub mod input;
pub mod rendering;
pub mod session;

pub use game::*;
pub use input::*;
pub use rendering::*;
pub use session::*;

use std::path::PathBuf;

/// Core error type for the interpreter.
///
/// Every variant is fatal. Recoverable in-game failures are modelled by
/// [`CommandError`] and [`BlockedAction`] instead.
#[derive(thiserror::Error, Debug)]
pub enum AdventureError {
    /// Wrong command-line usage
    #[error("{0}")]
    Usage(String),

    /// The map file could not be read
    #[error("could not read map file {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The map document is not well-formed
    #[error("malformed map document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The map document is well-formed but describes an invalid map
    #[error("invalid map: {0}")]
    Map(#[from] MapError),

    /// Terminal I/O failed during play
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An internal invariant was broken
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the Wayfarer codebase.
pub type AdventureResult<T> = Result<T, AdventureError>;

/// Version information for the interpreter.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Interpreter configuration constants.
pub mod config {
    /// Prompt written before each line of player input
    pub const PROMPT: &str = "What would you like to do? ";

    /// Log filter used when `RUST_LOG` is not set
    pub const DEFAULT_LOG_FILTER: &str = "warn";

    /// Usage line printed on argument errors
    pub const USAGE: &str = "Usage: wayfarer <map_file>";
}
