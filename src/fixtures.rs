//! Fixture event data.
//!
//! Deterministic demo events anchored to a given day, used by:
//! 1. The interactive TUI and the stdout commands (there is no event
//!    persistence, so this is the only event supply)
//! 2. Unit tests that need a populated schedule
//! 3. Benchmarks

use chrono::{Duration, NaiveDate, NaiveTime};
use ratatui::style::Color;

use crate::events::{Event, EventSource};

/// Event source backed by [`sample_events`].
pub struct FixtureEvents {
    today: NaiveDate,
}

impl FixtureEvents {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl EventSource for FixtureEvents {
    fn events(&self) -> Vec<Event> {
        sample_events(self.today)
    }
}

/// A small schedule spread around `today`: same-day appointments, nearby
/// days, and one event a week out so paging has something to land on.
pub fn sample_events(today: NaiveDate) -> Vec<Event> {
    vec![
        event("Standup", today, (9, 30), (10, 0), Color::Green),
        event("Ophthalmologist", today, (13, 0), (15, 30), Color::Blue),
        event("Gym", today - Duration::days(1), (18, 0), (19, 30), Color::Red),
        event(
            "Design review",
            today + Duration::days(1),
            (11, 0),
            (12, 0),
            Color::Magenta,
        ),
        event(
            "Lunch with Ana",
            today + Duration::days(2),
            (12, 0),
            (13, 0),
            Color::Yellow,
        ),
        event(
            "Release retro",
            today + Duration::days(7),
            (15, 0),
            (16, 0),
            Color::Cyan,
        ),
    ]
}

fn event(
    title: &str,
    date: NaiveDate,
    start: (u32, u32),
    end: (u32, u32),
    color: Color,
) -> Event {
    Event {
        title: title.to_string(),
        date,
        start_time: time(start.0, start.1),
        end_time: time(end.0, end.1),
        color,
    }
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("fixture times are literal and valid")
}
