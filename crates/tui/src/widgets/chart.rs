//! Chart widgets for time series visualization.
//!
//! Callers own the point buffers and pass slices, so a chart never outlives
//! the frame it is drawn in.

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

/// Points for `values` at x = `offset`, `offset + 1`, ...
pub fn series_points(values: &[f64], offset: usize) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| ((offset + i) as f64, v))
        .collect()
}

/// Forecast points joined to the last historical point so the two lines
/// connect.
pub fn forecast_points(last: Option<(f64, f64)>, forecast: &[f64]) -> Vec<(f64, f64)> {
    let offset = last.map_or(0, |(x, _)| x as usize + 1);
    last.into_iter()
        .chain(series_points(forecast, offset))
        .collect()
}

/// Y-axis bounds with 5% padding. A flat line gets a unit band.
pub fn value_bounds(points: &[(f64, f64)]) -> [f64; 2] {
    let min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let pad = (max - min) * 0.05;
    if pad == 0.0 {
        [min - 1.0, max + 1.0]
    } else {
        [min - pad, max + pad]
    }
}

/// Line chart of a history followed by its forecast.
///
/// `x_labels` are drawn at the start, the forecast origin and the end.
pub fn create_forecast_chart<'a>(
    title: &'a str,
    history: &'a [(f64, f64)],
    forecast: &'a [(f64, f64)],
    x_labels: [String; 3],
) -> Chart<'a> {
    let mut datasets = vec![Dataset::default()
        .name("History")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(history)];

    if !forecast.is_empty() {
        datasets.push(
            Dataset::default()
                .name("Forecast")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Yellow))
                .data(forecast),
        );
    }

    let all: Vec<(f64, f64)> = history.iter().chain(forecast.iter()).copied().collect();
    let [y_min, y_max] = value_bounds(&all);
    let x_max = all.iter().map(|p| p.0).fold(1.0, f64::max);

    let [start, origin, end] = x_labels;

    Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} ")),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(vec![
                    Span::raw(start),
                    Span::styled(origin, Style::default().fg(Color::Yellow)),
                    Span::raw(end),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::raw(format!("{y_min:.1}")),
                    Span::raw(format!("{:.1}", (y_min + y_max) / 2.0)),
                    Span::raw(format!("{y_max:.1}")),
                ]),
        )
}
