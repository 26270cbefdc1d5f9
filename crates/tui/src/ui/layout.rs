//! Main layout for the TUI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};

use explorer::Dataset;

use super::ask::draw_ask_panel;
use super::footer::draw_footer;
use super::header::draw_header;
use super::tabs::{draw_gdp_tab, draw_inflation_tab, draw_stock_tab};
use crate::app::App;

/// Draw the main UI layout.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Header, tabs, content, ask panel, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Tab bar
            Constraint::Min(12),   // Content
            Constraint::Length(7), // Ask panel
            Constraint::Length(2), // Footer
        ])
        .split(size);

    draw_header(frame, chunks[0], app);
    draw_tab_bar(frame, chunks[1], app);

    let content_area = chunks[2];
    match app.current_tab {
        Dataset::Stock => draw_stock_tab(frame, content_area, app),
        Dataset::Inflation => draw_inflation_tab(frame, content_area, app),
        Dataset::Gdp => draw_gdp_tab(frame, content_area, app),
    }

    draw_ask_panel(frame, chunks[3], app);
    draw_footer(frame, chunks[4], app);
}

/// Draw the tab bar.
fn draw_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Dataset::ALL
        .iter()
        .enumerate()
        .map(|(i, dataset)| Line::from(format!(" {} {} ", i + 1, dataset.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Data "))
        .select(app.current_tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");

    frame.render_widget(tabs, area);
}
