use super::Frame;
use crate::api::Character;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the character list view.
///
pub fn list(frame: &mut Frame, size: Rect, characters: &[Character], state: &mut State) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Characters ({})", characters.len()))
        .border_style(styling::active_block_border_style());

    if characters.is_empty() {
        // Confirmed zero results, distinct from the loading screen
        let empty = Paragraph::new("No characters found.")
            .style(styling::dim_text_style())
            .block(block);
        frame.render_widget(empty, size);
        return;
    }

    let items: Vec<ListItem> = characters
        .iter()
        .map(|character| {
            ListItem::new(Line::from(vec![
                Span::styled(character.name.clone(), styling::title_style()),
                Span::raw("  "),
                Span::styled(
                    format!("{} · {}", character.species, character.status),
                    styling::dim_text_style(),
                ),
            ]))
        })
        .collect();

    let widget = List::new(items)
        .block(block)
        .highlight_style(styling::highlight_style())
        .highlight_symbol("> ");
    frame.render_stateful_widget(widget, size, state.list_state_mut());
}
