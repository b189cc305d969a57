//! Bleep CLI library.
//!
//! Input resolution and command implementations for the `bleep` binary.

pub mod commands;
pub mod input;
