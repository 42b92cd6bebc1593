//! Styling utilities shared across views.

use ratatui::style::{Color, Modifier, Style};

pub fn active_block_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn normal_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn title_style() -> Style {
    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
}

pub fn error_style() -> Style {
    Style::default().fg(Color::Red)
}

pub fn highlight_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::Cyan)
}

pub fn dim_text_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
