//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library. The
//! main area shows one of three screens derived from the store's load state:
//! a spinner while loading, an error message on failure, or the character
//! list/detail views once data is ready.

type Frame<'a> = ratatui::Frame<'a>;

mod render;
pub mod widgets;

pub const SPINNER_FRAME_COUNT: usize = widgets::spinner::FRAMES.len();

pub use render::render;
