//! Text panels shared by the tabs.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use explorer::ExplorerError;

/// Red panel explaining why a section is missing.
pub fn unavailable_panel<'a>(title: &'a str, error: &ExplorerError) -> Paragraph<'a> {
    Paragraph::new(format!("unavailable: {error}"))
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} ")),
        )
}

/// Grey hint shown before anything is loaded.
pub fn placeholder_panel<'a>(title: &'a str, message: &'a str) -> Paragraph<'a> {
    Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} ")),
        )
}

/// Wrapped text panel.
pub fn text_panel<'a>(title: &'a str, text: &'a str) -> Paragraph<'a> {
    Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} ")),
        )
}
