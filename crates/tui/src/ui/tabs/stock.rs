//! Stock tab UI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::widgets::{placeholder_panel, text_panel, unavailable_panel};

use super::series::draw_series_with_forecast;

/// Draw the Stock tab.
pub fn draw_stock_tab(frame: &mut Frame, area: Rect, app: &App) {
    let Some(view) = &app.stock else {
        frame.render_widget(
            placeholder_panel("Stock", "Press [s] to enter a ticker symbol"),
            area,
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Summary
            Constraint::Min(11),    // Chart and forecast
            Constraint::Length(5),  // Sentiment
        ])
        .split(area);

    let summary = match &view.prices {
        Ok(series) => {
            let s = series.stats();
            let last = series.last().map(|o| o.value).unwrap_or(f64::NAN);
            format!(
                "Symbol: {}    Closes: {}    Last: {last:.2}    Min: {:.2}    Max: {:.2}",
                view.symbol, s.count, s.min, s.max
            )
        }
        Err(_) => format!("Symbol: {}", view.symbol),
    };
    let summary = Paragraph::new(summary)
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title(" Stock "));
    frame.render_widget(summary, chunks[0]);

    let title = format!("{} daily close", view.symbol);
    draw_series_with_forecast(frame, chunks[1], &title, &view.prices, &view.forecast);

    match &view.sentiment {
        Ok(text) => frame.render_widget(text_panel("Sentiment", text), chunks[2]),
        Err(e) => frame.render_widget(unavailable_panel("Sentiment", e), chunks[2]),
    }
}
