use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::formatting::week_title;
use crate::tui::app::App;
use crate::tui::theme;

/// Render the top bar: month/year of the visible week on the left, the page
/// position within the materialized window on the right.
pub fn render_title_bar(f: &mut Frame, area: Rect, app: &App) {
    let title = week_title(app.current_week());
    let indicator = format!(
        "week {}/{}",
        app.state().current_page + 1,
        app.state().weeks.len()
    );

    let mut spans = vec![Span::styled(title.clone(), theme::title_style(app.theme.accent_fg))];
    let padding = (area.width as usize).saturating_sub(title.len() + indicator.len());
    if padding > 0 {
        spans.push(Span::raw(" ".repeat(padding)));
    }
    spans.push(Span::styled(indicator, theme::page_indicator_style()));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
