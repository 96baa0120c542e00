pub mod commands;
pub mod config;
pub mod events;
pub mod fixtures;
pub mod formatting;
pub mod layout_constants;
pub mod timeline;
pub mod tui;
