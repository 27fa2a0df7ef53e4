//! # Rendering Module
//!
//! Text output for the interpreter.

pub mod display;

pub use display::*;
