use ratatui::style::{Color, Modifier, Style};

pub const MUTED_COLOR: Color = Color::DarkGray;

pub fn title_style(accent: Color) -> Style {
    Style::new().fg(accent).add_modifier(Modifier::BOLD)
}

pub fn page_indicator_style() -> Style {
    Style::new().fg(MUTED_COLOR)
}

// Day heading row
pub fn day_heading_style() -> Style {
    Style::new().fg(Color::White)
}

pub fn today_heading_style(today_fg: Color) -> Style {
    Style::new().fg(today_fg).add_modifier(Modifier::BOLD)
}

pub fn weekend_heading_style() -> Style {
    Style::new().fg(MUTED_COLOR)
}

// Hour grid
pub fn hour_label_style() -> Style {
    Style::new().fg(MUTED_COLOR)
}

pub fn grid_border_style() -> Style {
    Style::new().fg(MUTED_COLOR).add_modifier(Modifier::DIM)
}

pub fn event_style(color: Color) -> Style {
    Style::new().fg(Color::Black).bg(color)
}

// Status bar
pub fn status_hint_style() -> Style {
    Style::new().fg(MUTED_COLOR)
}
