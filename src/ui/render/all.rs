use super::{detail, footer, list, log, Frame};
use crate::state::{Route, State};
use crate::store::LoadState;
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the full frame according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)].as_ref())
        .split(size);

    main(frame, rows[0], state);
    footer::footer(frame, rows[1], state);

    if state.is_debug_mode() {
        log::log(frame, size, state);
    }
}

/// Render main widget according to state.
///
fn main(frame: &mut Frame, size: Rect, state: &mut State) {
    match state.load_state() {
        LoadState::Loading => loading(frame, size, state),
        LoadState::Failed(message) => failed(frame, size, &message),
        LoadState::Ready(characters) => match state.current_route().clone() {
            Route::CharacterList => list::list(frame, size, &characters, state),
            Route::CharacterDetail { .. } => detail::detail(frame, size, state),
        },
    }
}

fn loading(frame: &mut Frame, size: Rect, state: &State) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Characters")
        .border_style(styling::active_block_border_style());
    let widget = Paragraph::new(format!(
        "{} Loading characters...",
        spinner::frame(state.spinner_index())
    ))
    .style(styling::normal_text_style())
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(widget, size);
}

fn failed(frame: &mut Frame, size: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Error")
        .border_style(styling::error_style());
    let widget = Paragraph::new(message.to_owned())
        .style(styling::error_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(widget, size);
}
