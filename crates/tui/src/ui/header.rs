//! Header bar widget.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Draw the header bar with title and current symbol.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let text = if app.symbol.is_empty() {
        "Financial Data Explorer".to_string()
    } else {
        format!("Financial Data Explorer - {}", app.symbol)
    };

    let title = Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(title, area);
}
