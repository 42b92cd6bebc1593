use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the debug log pane over the lower half of the frame.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(size);
    let pane = rows[1];

    frame.render_widget(Clear, pane);

    let visible = pane.height.saturating_sub(2) as usize;
    let entries = state.debug_entries();
    let start = entries.len().saturating_sub(visible);
    let lines: Vec<Line> = entries[start..]
        .iter()
        .map(|entry| Line::from(entry.as_str()))
        .collect();

    let widget = Paragraph::new(lines)
        .style(styling::dim_text_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Logs")
                .border_style(styling::active_block_border_style()),
        );
    frame.render_widget(widget, pane);
}
