use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the character detail view, or an error screen if the route payload
/// failed to decode.
///
pub fn detail(frame: &mut Frame, size: Rect, state: &State) {
    match state.detail() {
        Some(Ok(character)) => {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(character.name.clone())
                .border_style(styling::active_block_border_style());
            let lines = vec![
                Line::from(""),
                field_line("Name", character.name.clone()),
                field_line("Status", character.status.clone()),
                field_line("Species", character.species.clone()),
                field_line("Gender", character.gender.clone()),
                field_line("Image", character.image.clone()),
                field_line("ID", character.id.to_string()),
            ];
            let widget = Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(block);
            frame.render_widget(widget, size);
        }
        Some(Err(e)) => error_screen(frame, size, &format!("Could not open character: {}", e)),
        None => error_screen(frame, size, "No character selected."),
    }
}

fn field_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {}: ", label), styling::title_style()),
        Span::styled(value, styling::normal_text_style()),
    ])
}

fn error_screen(frame: &mut Frame, size: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Error")
        .border_style(styling::error_style());
    let widget = Paragraph::new(message.to_owned())
        .style(styling::error_style())
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(widget, size);
}
