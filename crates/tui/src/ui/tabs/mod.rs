//! Tab-specific UI modules.

mod gdp;
mod inflation;
mod series;
mod stock;

pub use gdp::draw_gdp_tab;
pub use inflation::draw_inflation_tab;
pub use stock::draw_stock_tab;
