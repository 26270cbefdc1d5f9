//! GDP tab UI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::widgets::{placeholder_panel, unavailable_panel};

/// Draw the GDP tab as a single metric.
pub fn draw_gdp_tab(frame: &mut Frame, area: Rect, app: &App) {
    let Some(view) = &app.gdp else {
        frame.render_widget(placeholder_panel("GDP", "Loading..."), area);
        return;
    };

    let reading = match &view.reading {
        Ok(reading) => reading,
        Err(e) => {
            frame.render_widget(unavailable_panel("GDP", e), area);
            return;
        }
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{:.1}", reading.value),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Latest published GDP figure"),
        Line::from(""),
        Line::from(Span::styled(
            format!("Source: {}", reading.source_url),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let metric = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" GDP "));
    frame.render_widget(metric, area);
}
