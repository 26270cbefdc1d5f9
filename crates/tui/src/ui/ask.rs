//! Question panel below the selected tab.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, InputMode};
use crate::widgets::{text_panel, unavailable_panel};

/// Draw the input line (while editing) or the last answer.
pub fn draw_ask_panel(frame: &mut Frame, area: Rect, app: &App) {
    if app.input_mode.is_editing() {
        draw_input(frame, area, app);
        return;
    }

    match &app.answer {
        None => frame.render_widget(
            text_panel("Ask a finance question", "Press [a] to ask"),
            area,
        ),
        Some((question, Ok(answer))) => {
            let text = vec![
                Line::from(Span::styled(
                    format!("Q: {question}"),
                    Style::default().fg(Color::Cyan),
                )),
                Line::from(answer.as_str()),
            ];
            let panel = Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(" Answer "));
            frame.render_widget(panel, area);
        }
        Some((_, Err(e))) => frame.render_widget(unavailable_panel("Answer", e), area),
    }
}

fn draw_input(frame: &mut Frame, area: Rect, app: &App) {
    let title = match app.input_mode {
        InputMode::EditingSymbol => " Ticker symbol ",
        _ => " Ask a finance question ",
    };

    let input = Paragraph::new(format!("{}█", app.input))
        .style(Style::default().fg(Color::Yellow))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(input, area);
}
