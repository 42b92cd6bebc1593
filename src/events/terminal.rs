use crate::state::{Route, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            if event::poll(tick_rate).unwrap() {
                if let CrosstermEvent::Key(key) = event::read().unwrap() {
                    if key.kind == KeyEventKind::Press {
                        tx_clone.send(Event::Input(key)).unwrap();
                    }
                }
            }
            tx_clone.send(Event::Tick).unwrap();
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(state, key)),
            Event::Tick => {
                state.tick();
                Ok(true)
            }
        }
    }
}

/// Apply one key press to the state. Returns false if exit was requested.
///
fn handle_key(state: &mut State, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            false
        }
        KeyCode::Char('q') => {
            debug!("Processing exit terminal event '{:?}'...", key);
            false
        }
        KeyCode::Char('d') => {
            state.toggle_debug_mode();
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if matches!(state.current_route(), Route::CharacterList) {
                state.select_next();
            }
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if matches!(state.current_route(), Route::CharacterList) {
                state.select_previous();
            }
            true
        }
        KeyCode::Enter => {
            if matches!(state.current_route(), Route::CharacterList) {
                state.open_selected();
            }
            true
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => {
            state.navigate_back();
            true
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Character;
    use crate::store::{CharacterFuture, CharacterStore, FetchCharacters};
    use fake::{Fake, Faker};
    use std::sync::{Arc, Mutex};

    struct ReadyFetcher(Vec<Character>);

    impl FetchCharacters for ReadyFetcher {
        fn fetch_characters(&self) -> CharacterFuture<'_> {
            let characters = self.0.clone();
            Box::pin(async move { Ok(characters) })
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn ready_state(characters: Vec<Character>) -> State {
        let store = Arc::new(CharacterStore::new(Arc::new(ReadyFetcher(characters))));
        store.run().await;
        State::new(store, Arc::new(Mutex::new(Vec::new())))
    }

    #[tokio::test]
    async fn quit_keys_request_exit() {
        let mut state = ready_state(vec![]).await;
        assert!(!handle_key(&mut state, press(KeyCode::Char('q'))));
        assert!(!handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[tokio::test]
    async fn list_navigation_and_enter_open_the_detail_view() {
        let characters: Vec<Character> = vec![Faker.fake(), Faker.fake()];
        let mut state = ready_state(characters.clone()).await;

        assert!(handle_key(&mut state, press(KeyCode::Down)));
        assert!(handle_key(&mut state, press(KeyCode::Char('j'))));
        assert!(handle_key(&mut state, press(KeyCode::Enter)));

        assert!(matches!(
            state.current_route(),
            Route::CharacterDetail { .. }
        ));
        match state.detail() {
            Some(Ok(character)) => assert_eq!(*character, characters[1]),
            other => panic!("expected decoded character, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn escape_returns_to_the_list() {
        let characters: Vec<Character> = vec![Faker.fake()];
        let mut state = ready_state(characters).await;

        handle_key(&mut state, press(KeyCode::Down));
        handle_key(&mut state, press(KeyCode::Enter));
        handle_key(&mut state, press(KeyCode::Esc));

        assert_eq!(*state.current_route(), Route::CharacterList);
        assert!(state.detail().is_none());
    }

    #[tokio::test]
    async fn enter_does_nothing_without_a_selection() {
        let mut state = ready_state(vec![]).await;
        assert!(handle_key(&mut state, press(KeyCode::Enter)));
        assert_eq!(*state.current_route(), Route::CharacterList);
    }

    #[tokio::test]
    async fn debug_toggle_flips_the_log_pane() {
        let mut state = ready_state(vec![]).await;
        assert!(!state.is_debug_mode());
        handle_key(&mut state, press(KeyCode::Char('d')));
        assert!(state.is_debug_mode());
        handle_key(&mut state, press(KeyCode::Char('d')));
        assert!(!state.is_debug_mode());
    }
}
