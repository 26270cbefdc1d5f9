//! History-plus-forecast section shared by the Stock and Inflation tabs.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use explorer::{Forecast, Section, TimeSeries};

use crate::widgets::{create_forecast_chart, forecast_points, series_points, unavailable_panel};

/// Draw the series chart above a one-line forecast summary.
pub fn draw_series_with_forecast(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    series: &Section<TimeSeries>,
    forecast: &Section<Forecast>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Chart
            Constraint::Length(3), // Forecast summary
        ])
        .split(area);

    draw_chart(frame, chunks[0], title, series, forecast);
    draw_forecast_summary(frame, chunks[1], forecast);
}

fn draw_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    series: &Section<TimeSeries>,
    forecast: &Section<Forecast>,
) {
    let series = match series {
        Ok(series) => series,
        Err(e) => {
            frame.render_widget(unavailable_panel(title, e), area);
            return;
        }
    };

    let history = series_points(&series.values(), 0);
    let projected = match forecast {
        Ok(f) => forecast_points(history.last().copied(), &f.values),
        Err(_) => Vec::new(),
    };

    let first = series.first().map(|o| o.date.to_string()).unwrap_or_default();
    let last = series.last().map(|o| o.date.to_string()).unwrap_or_default();
    let end = match forecast {
        Ok(f) => format!("+{}", f.len()),
        Err(_) => String::new(),
    };

    let chart = create_forecast_chart(title, &history, &projected, [first, last, end]);
    frame.render_widget(chart, area);
}

fn draw_forecast_summary(frame: &mut Frame, area: Rect, forecast: &Section<Forecast>) {
    match forecast {
        Ok(f) => {
            let next = f.values.first().copied().unwrap_or(f64::NAN);
            let last = f.last().unwrap_or(f64::NAN);
            let text = format!(
                "{}  next: {next:.2}  +{}: {last:.2}",
                f.order,
                f.len()
            );
            let summary = Paragraph::new(text)
                .style(Style::default().fg(Color::Green))
                .block(Block::default().borders(Borders::ALL).title(" Forecast "));
            frame.render_widget(summary, area);
        }
        Err(e) => frame.render_widget(unavailable_panel("Forecast", e), area),
    }
}
