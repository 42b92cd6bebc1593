use crate::api::{Api, DEFAULT_BASE_URL};
use crate::config::Config;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::state::State;
use crate::store::{CharacterStore, LoadState};
use crate::{logger, ui};
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Oversees the bootstrap fetch, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    store: Arc<CharacterStore>,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        let log_buffer = logger::init()?;
        info!("Starting application...");

        let base_url = config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let api = Arc::new(Api::new(base_url));
        let store = Arc::new(CharacterStore::new(api));

        // Record every state transition in the debug pane
        let _transitions = store.subscribe(|load_state| match load_state {
            LoadState::Loading => info!("Loading characters..."),
            LoadState::Ready(characters) => info!("Fetched {} characters.", characters.len()),
            LoadState::Failed(message) => error!("{}", message),
        });

        let mut app = App {
            state: Arc::new(Mutex::new(State::new(Arc::clone(&store), log_buffer))),
            store,
        };
        app.start_network();
        app.start_ui().await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread that drives the bootstrap fetch on its own
    /// runtime. The fetch runs to completion even if the UI exits first.
    ///
    fn start_network(&self) {
        debug!("Creating new thread for asynchronous networking...");
        let store = Arc::clone(&self.store);
        std::thread::spawn(move || {
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("Failed to create network runtime")
                .block_on(store.run())
        });
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            if let Ok(size) = terminal.backend().size() {
                state.set_terminal_size(size);
            };
            terminal.draw(|frame| ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

        Ok(())
    }
}
