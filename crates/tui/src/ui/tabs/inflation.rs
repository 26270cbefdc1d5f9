//! Inflation tab UI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::widgets::placeholder_panel;

use super::series::draw_series_with_forecast;

/// Draw the Inflation tab.
pub fn draw_inflation_tab(frame: &mut Frame, area: Rect, app: &App) {
    let Some(view) = &app.inflation else {
        frame.render_widget(placeholder_panel("Inflation", "Loading..."), area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(11)])
        .split(area);

    let summary = match &view.series {
        Ok(series) => {
            let first = series.first().map(|o| (o.date, o.value));
            let last = series.last().map(|o| (o.date, o.value));
            match (first, last) {
                (Some((d0, v0)), Some((d1, v1))) => format!(
                    "{}    {d0}: {v0:.3}    {d1}: {v1:.3}    Change: {:+.1}%",
                    series.name(),
                    (v1 / v0 - 1.0) * 100.0
                ),
                _ => series.name().to_string(),
            }
        }
        Err(_) => "Consumer price index".to_string(),
    };
    let summary = Paragraph::new(summary)
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title(" Inflation "));
    frame.render_widget(summary, chunks[0]);

    draw_series_with_forecast(frame, chunks[1], "CPI", &view.series, &view.forecast);
}
