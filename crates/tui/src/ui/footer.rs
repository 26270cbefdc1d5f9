//! Footer bar widget with keyboard shortcuts.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use explorer::Dataset;

use crate::app::{App, InputMode};

/// Draw the footer bar with context-sensitive help.
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = match app.input_mode {
        InputMode::EditingSymbol => "Type symbol | Enter: Load | Esc: Cancel".to_string(),
        InputMode::EditingQuestion => "Type question | Enter: Ask | Esc: Cancel".to_string(),
        InputMode::Normal => {
            let tab_help = match app.current_tab {
                Dataset::Stock => "[s] Symbol  [r] Refresh",
                Dataset::Inflation | Dataset::Gdp => "[r] Refresh",
            };
            format!("{tab_help}  [a] Ask  |  [1-3] Tab  [Tab/←→] Navigate  [q] Quit")
        }
    };

    let display_text = if let Some((status, _)) = &app.status_message {
        format!("{} | {}", status, help_text)
    } else {
        help_text
    };

    let footer = Paragraph::new(display_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));

    frame.render_widget(footer, area);
}
