//! `week` command: print the week containing a date as a box-drawn table.

use anyhow::{Context, Result};
use chrono::Local;

use crate::config::Config;
use crate::events::{events_at, Event};
use crate::fixtures;
use crate::formatting::{day_heading, fit_to_width, format_header, week_title, BoxChars};
use crate::layout_constants::{
    CLI_DAY_COL_WIDTH, CLI_TIME_COL_WIDTH, CLI_VISIBLE_HOURS, HOURS_PER_DAY,
};
use crate::timeline::{generate_weeks, Week};

pub fn run(date: Option<&str>, config: &Config) -> Result<()> {
    let today = Local::now().date_naive();
    let date = super::resolve_date(date, today)?;
    let week = generate_weeks(date, 1, today, config.week_start())
        .into_iter()
        .next()
        .context("week generation produced no weeks")?;
    let events = fixtures::sample_events(today);

    print!("{}", render_week_table(&week, &events, config));
    Ok(())
}

/// Build the full table as a string: title, day headings, and one row per
/// visible hour with event titles in their day cells.
fn render_week_table(week: &Week, events: &[Event], config: &Config) -> String {
    let chars = BoxChars::from_use_unicode(config.use_unicode);
    let mut out = format_header(&week_title(week), &chars);

    let headings: Vec<String> = week
        .days
        .iter()
        .map(|day| {
            let mut label = day_heading(day.date);
            if day.is_today {
                label.push_str(" *");
            }
            label
        })
        .collect();

    out.push_str(&border_row(
        &chars.top_left,
        &chars.top_junction,
        &chars.top_right,
        &chars,
    ));
    out.push_str(&content_row("", &headings, &chars));
    out.push_str(&border_row(
        &chars.left_junction,
        &chars.cross,
        &chars.right_junction,
        &chars,
    ));

    let start = config.day_start_hour.min(HOURS_PER_DAY - CLI_VISIBLE_HOURS);
    for hour in start..start + CLI_VISIBLE_HOURS {
        let cells: Vec<String> = week
            .days
            .iter()
            .map(|day| cell_label(events, day.date, hour))
            .collect();
        out.push_str(&content_row(&format!("{:02}:00", hour), &cells, &chars));
    }

    out.push_str(&border_row(
        &chars.bottom_left,
        &chars.bottom_junction,
        &chars.bottom_right,
        &chars,
    ));
    out
}

fn cell_label(events: &[Event], date: chrono::NaiveDate, hour: u32) -> String {
    let hits = events_at(events, date, hour);
    match hits.as_slice() {
        [] => String::new(),
        [only] => only.title.clone(),
        [first, rest @ ..] => format!("{} +{}", first.title, rest.len()),
    }
}

fn content_row(gutter: &str, cells: &[String], chars: &BoxChars) -> String {
    let mut row = chars.vertical.clone();
    row.push_str(&fit_to_width(gutter, CLI_TIME_COL_WIDTH));
    for cell in cells {
        row.push_str(&chars.vertical);
        row.push_str(&fit_to_width(cell, CLI_DAY_COL_WIDTH));
    }
    row.push_str(&chars.vertical);
    row.push('\n');
    row
}

fn border_row(left: &str, junction: &str, right: &str, chars: &BoxChars) -> String {
    let mut row = left.to_string();
    row.push_str(&chars.horizontal.repeat(CLI_TIME_COL_WIDTH));
    for _ in 0..7 {
        row.push_str(junction);
        row.push_str(&chars.horizontal.repeat(CLI_DAY_COL_WIDTH));
    }
    row.push_str(right);
    row.push('\n');
    row
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Weekday};

    use super::*;

    fn fixed_week_and_events() -> (Week, Vec<Event>) {
        let today = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        let week = generate_weeks(today, 1, today, Weekday::Mon)[0];
        (week, fixtures::sample_events(today))
    }

    #[test]
    fn test_table_contains_title_and_today_marker() {
        let (week, events) = fixed_week_and_events();
        let table = render_week_table(&week, &events, &Config::default());
        assert!(table.contains("June 2024"));
        assert!(table.contains("Wed 12 *"));
        assert!(!table.contains("Mon 10 *"));
    }

    #[test]
    fn test_table_places_events_in_day_cells() {
        let (week, events) = fixed_week_and_events();
        let table = render_week_table(&week, &events, &Config::default());
        // 13:00 row carries the afternoon appointment.
        let row = table
            .lines()
            .find(|l| l.contains("13:00"))
            .expect("13:00 row present");
        assert!(row.contains("Ophthalmolog"));
    }

    #[test]
    fn test_ascii_mode_uses_no_unicode_borders() {
        let (week, events) = fixed_week_and_events();
        let mut config = Config::default();
        config.use_unicode = false;
        let table = render_week_table(&week, &events, &config);
        assert!(table.contains('+'));
        assert!(!table.contains('│'));
    }

    #[test]
    fn test_all_rows_share_one_width() {
        let (week, events) = fixed_week_and_events();
        let table = render_week_table(&week, &events, &Config::default());
        let widths: Vec<usize> = table
            .lines()
            .skip(2) // title + underline are text, not table rows
            .map(|l| l.chars().count())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
    }
}
