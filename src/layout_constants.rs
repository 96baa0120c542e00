//! Shared layout constants used across CLI and TUI renderers.
//!
//! This module centralizes common layout values to ensure consistency
//! and make it easier to adjust layouts globally.

/// Width of the hour-label gutter on the left of the grid ("13:00 ")
pub const TIME_GUTTER_WIDTH: u16 = 6;

/// Height of the day-heading row above the hour grid
pub const DAY_HEADER_HEIGHT: u16 = 2;

/// Height of the title bar (month/year + page indicator)
pub const TITLE_BAR_HEIGHT: u16 = 2;

/// Height of the bottom status bar
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Hours in a day; upper bound for grid rows and scroll offsets
pub const HOURS_PER_DAY: u32 = 24;

// CLI-specific formatting constants

/// Content width of one day column in the stdout week table
pub const CLI_DAY_COL_WIDTH: usize = 12;

/// Width of the hour column in the stdout week table
pub const CLI_TIME_COL_WIDTH: usize = 7;

/// Hour rows printed by the stdout week table
pub const CLI_VISIBLE_HOURS: u32 = 12;
