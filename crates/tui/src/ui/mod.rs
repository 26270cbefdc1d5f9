//! UI module for the TUI.

mod ask;
mod footer;
mod header;
mod layout;
pub mod tabs;

pub use layout::draw_ui;
