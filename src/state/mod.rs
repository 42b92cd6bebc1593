//! Application state management module.
//!
//! This module contains the UI-facing state for the application:
//! - the route stack and list selection
//! - the decoded detail-view character (or its decode failure)
//! - navigation types and the route payload codec

mod navigation;

pub use navigation::{decode_character, PayloadError, Route};

use crate::api::Character;
use crate::store::{CharacterStore, LoadState};
use crate::ui::SPINNER_FRAME_COUNT;
use log::*;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use std::sync::{Arc, Mutex};

/// Upper bound on retained debug log entries.
const MAX_DEBUG_ENTRIES: usize = 500;

/// Houses data representative of application state.
///
pub struct State {
    store: Arc<CharacterStore>,
    log_buffer: Arc<Mutex<Vec<String>>>,
    route_stack: Vec<Route>,
    list_state: ListState,
    detail: Option<Result<Character, PayloadError>>,
    terminal_size: Rect,
    spinner_index: usize,
    debug_mode: bool,
    debug_entries: Vec<String>,
}

impl State {
    /// Return a new instance for the given store and shared log buffer.
    ///
    pub fn new(store: Arc<CharacterStore>, log_buffer: Arc<Mutex<Vec<String>>>) -> State {
        State {
            store,
            log_buffer,
            route_stack: vec![Route::CharacterList],
            list_state: ListState::default(),
            detail: None,
            terminal_size: Rect::default(),
            spinner_index: 0,
            debug_mode: false,
            debug_entries: vec![],
        }
    }

    /// Return a snapshot of the character collection's loading state.
    ///
    pub fn load_state(&self) -> LoadState {
        self.store.state()
    }

    /// Return the route currently on top of the stack.
    ///
    pub fn current_route(&self) -> &Route {
        // The stack always holds at least the list route
        self.route_stack
            .last()
            .unwrap_or(&Route::CharacterList)
    }

    /// Push a route onto the stack. A detail route has its payload decoded
    /// here, before the view's first render; the decode result (success or
    /// failure) is what the detail view consumes.
    ///
    pub fn navigate(&mut self, route: Route) {
        debug!("Navigating to route '{}'...", route);
        if let Route::CharacterDetail { payload } = &route {
            let decoded = decode_character(payload);
            if let Err(e) = &decoded {
                error!("Failed to decode navigation payload: {}", e);
            }
            self.detail = Some(decoded);
        }
        self.route_stack.push(route);
    }

    /// Pop the current route, staying on the root list route.
    ///
    pub fn navigate_back(&mut self) {
        if self.route_stack.len() > 1 {
            let left = self.route_stack.pop();
            if matches!(left, Some(Route::CharacterDetail { .. })) {
                self.detail = None;
            }
        }
    }

    /// Return the decode result for the detail view, if one is open.
    ///
    pub fn detail(&self) -> Option<&Result<Character, PayloadError>> {
        self.detail.as_ref()
    }

    /// Encode the selected character into a detail route and navigate to it.
    ///
    pub fn open_selected(&mut self) {
        if let Some(character) = self.selected_character() {
            self.navigate(Route::detail(&character));
        }
    }

    /// Return the character under the list cursor, if the list is ready and
    /// non-empty.
    ///
    pub fn selected_character(&self) -> Option<Character> {
        match self.load_state() {
            LoadState::Ready(characters) => {
                let index = self.list_state.selected()?;
                characters.get(index).cloned()
            }
            _ => None,
        }
    }

    /// Move the list cursor down one entry.
    ///
    pub fn select_next(&mut self) {
        let count = self.ready_count();
        if count == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(index) if index + 1 < count => index + 1,
            Some(index) => index,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    /// Move the list cursor up one entry.
    ///
    pub fn select_previous(&mut self) {
        let count = self.ready_count();
        if count == 0 {
            return;
        }
        let previous = match self.list_state.selected() {
            Some(index) if index > 0 => index - 1,
            Some(index) => index,
            None => 0,
        };
        self.list_state.select(Some(previous));
    }

    /// Return mutable list selection state for stateful rendering.
    ///
    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }

    /// Advance the spinner and drain newly buffered log entries.
    ///
    pub fn tick(&mut self) {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
        if let Ok(mut buffer) = self.log_buffer.lock() {
            self.debug_entries.append(&mut buffer);
        }
        if self.debug_entries.len() > MAX_DEBUG_ENTRIES {
            let excess = self.debug_entries.len() - MAX_DEBUG_ENTRIES;
            self.debug_entries.drain(..excess);
        }
    }

    pub fn spinner_index(&self) -> usize {
        self.spinner_index
    }

    pub fn set_terminal_size(&mut self, size: Rect) {
        self.terminal_size = size;
    }

    #[allow(dead_code)]
    pub fn terminal_size(&self) -> Rect {
        self.terminal_size
    }

    pub fn toggle_debug_mode(&mut self) {
        self.debug_mode = !self.debug_mode;
    }

    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }

    pub fn debug_entries(&self) -> &[String] {
        &self.debug_entries
    }

    fn ready_count(&self) -> usize {
        match self.load_state() {
            LoadState::Ready(characters) => characters.len(),
            _ => 0,
        }
    }
}
