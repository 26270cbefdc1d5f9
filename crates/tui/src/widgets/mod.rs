//! Reusable widgets for the TUI.

mod chart;
mod panel;

pub use chart::{create_forecast_chart, forecast_points, series_points};
pub use panel::{placeholder_panel, text_panel, unavailable_panel};
