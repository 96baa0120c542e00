use std::rc::Rc;

use chrono::{Datelike, NaiveDate, Timelike, Weekday};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use unicode_width::UnicodeWidthStr;

use crate::events::events_at;
use crate::formatting::{day_heading, fit_to_width};
use crate::layout_constants::{DAY_HEADER_HEIGHT, HOURS_PER_DAY, TIME_GUTTER_WIDTH};
use crate::tui::app::App;
use crate::tui::theme;

/// Render the current week: a day-heading row above an hour-by-hour grid
/// with events drawn into their day/hour cells.
pub fn render_week_grid(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(DAY_HEADER_HEIGHT), Constraint::Min(0)])
        .split(area);

    render_day_headings(f, rows[0], app);
    render_hour_grid(f, rows[1], app);
}

/// Time gutter plus seven equal day columns.
fn day_columns(area: Rect) -> Rc<[Rect]> {
    let mut constraints = vec![Constraint::Length(TIME_GUTTER_WIDTH)];
    constraints.extend(std::iter::repeat(Constraint::Ratio(1, 7)).take(7));
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
}

fn render_day_headings(f: &mut Frame, area: Rect, app: &App) {
    let cols = day_columns(area);
    for (day, col) in app.current_week().days.iter().zip(cols.iter().skip(1)) {
        let style = if day.is_today {
            theme::today_heading_style(app.theme.today_fg)
        } else if is_weekend(day.date) {
            theme::weekend_heading_style()
        } else {
            theme::day_heading_style()
        };
        let paragraph = Paragraph::new(Line::styled(day_heading(day.date), style))
            .block(grid_cell_block());
        f.render_widget(paragraph, *col);
    }
}

fn render_hour_grid(f: &mut Frame, area: Rect, app: &App) {
    let cols = day_columns(area);
    let start = app.hour_offset();
    let visible = (area.height as u32).min(HOURS_PER_DAY - start);

    let labels: Vec<Line> = (start..start + visible)
        .map(|hour| Line::styled(format!("{:02}:00", hour), theme::hour_label_style()))
        .collect();
    f.render_widget(Paragraph::new(labels), cols[0]);

    let events = &app.state().events;
    for (day, col) in app.current_week().days.iter().zip(cols.iter().skip(1)) {
        // The left border eats one column of each day cell.
        let inner_width = col.width.saturating_sub(1) as usize;
        let lines: Vec<Line> = (start..start + visible)
            .map(|hour| event_cell(events, day.date, hour, start, inner_width, &app.time_format))
            .collect();
        let paragraph = Paragraph::new(lines).block(grid_cell_block());
        f.render_widget(paragraph, *col);
    }
}

/// One day/hour cell. Occupied hours get a solid block in the event's
/// color; the title appears on the event's first visible row, with a "+N"
/// suffix when further events overlap the same hour.
fn event_cell(
    events: &[crate::events::Event],
    date: NaiveDate,
    hour: u32,
    first_visible_hour: u32,
    width: usize,
    time_format: &str,
) -> Line<'static> {
    let hits = events_at(events, date, hour);
    match hits.as_slice() {
        [] => Line::raw(""),
        [event, rest @ ..] => {
            let title_row = event.start_time.hour().max(first_visible_hour);
            let label = if hour == title_row {
                let mut label = if rest.is_empty() {
                    event.title.clone()
                } else {
                    format!("{} +{}", event.title, rest.len())
                };
                let start_label = event.start_time.format(time_format).to_string();
                if UnicodeWidthStr::width(label.as_str()) + start_label.len() + 1 <= width {
                    label.push(' ');
                    label.push_str(&start_label);
                }
                label
            } else {
                String::new()
            };
            Line::from(Span::styled(
                fit_to_width(&label, width),
                theme::event_style(event.color),
            ))
        }
    }
}

fn grid_cell_block() -> Block<'static> {
    Block::default()
        .borders(Borders::LEFT)
        .border_style(theme::grid_border_style())
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
