//! Event handling module.
//!
//! This module contains the handler for terminal events: user input and the
//! render tick.

pub mod terminal;
