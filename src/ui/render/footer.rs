use super::Frame;
use crate::state::{Route, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
};

/// Render footer widget with key hints for the current route.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let hints = match state.current_route() {
        Route::CharacterList => "↑/↓/j/k select · enter open · d logs · q quit",
        Route::CharacterDetail { .. } => "esc back · d logs · q quit",
    };
    let widget = Paragraph::new(hints)
        .style(styling::dim_text_style())
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, size);
}
