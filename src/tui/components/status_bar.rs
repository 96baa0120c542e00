use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::theme;

/// Render the bottom status bar with key hints and window size.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let hint_style = theme::status_hint_style();
    let mut spans = vec![
        Span::styled("←/→ Week", hint_style),
        Span::styled(" │ ", hint_style),
        Span::styled("↑/↓ Hours", hint_style),
        Span::styled(" │ ", hint_style),
        Span::styled("PgUp/PgDn ±4 weeks", hint_style),
        Span::styled(" │ ", hint_style),
        Span::styled("t Today", hint_style),
        Span::styled(" │ ", hint_style),
        Span::styled("q Quit", hint_style),
    ];

    let loaded = format!("{} weeks loaded", app.state().weeks.len());
    let hints_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = (area.width as usize).saturating_sub(hints_len + loaded.len());
    if padding > 0 {
        spans.push(Span::raw(" ".repeat(padding)));
    }
    spans.push(Span::styled(loaded, hint_style));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
