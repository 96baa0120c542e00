//! `agenda` command: list a single day's events on stdout.

use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::config::Config;
use crate::events::{events_on, Event};
use crate::fixtures;
use crate::formatting::{format_header, BoxChars};

pub fn run(date: Option<&str>, config: &Config) -> Result<()> {
    let today = Local::now().date_naive();
    let date = super::resolve_date(date, today)?;
    let events = fixtures::sample_events(today);

    print!("{}", render_agenda(date, &events, config));
    Ok(())
}

fn render_agenda(date: NaiveDate, events: &[Event], config: &Config) -> String {
    let chars = BoxChars::from_use_unicode(config.use_unicode);
    let mut out = format_header(&date.format("%A, %B %-d, %Y").to_string(), &chars);

    let mut on_day = events_on(events, date);
    on_day.sort_by_key(|e| e.start_time);

    if on_day.is_empty() {
        out.push_str("No events.\n");
        return out;
    }
    for event in on_day {
        out.push_str(&format!(
            "{}  {}\n",
            event.time_range_label(&config.time_format),
            event.title
        ));
    }
    out
}
