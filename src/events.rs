//! Calendar events and the seam they arrive through.
//!
//! Events are read-only input to the timeline: they are matched against day
//! cells at render time and never created, mutated, or persisted here.

use chrono::{NaiveDate, NaiveTime, Timelike};
use ratatui::style::Color;

/// A scheduled calendar entry.
///
/// `start_time < end_time` is a responsibility of whatever produced the
/// event; the timeline renders whatever it is given.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub color: Color,
}

impl Event {
    /// True if this event should be shown in the cell for `date` at `hour`.
    ///
    /// The hour range is half-open on the end hour: an event ending at 15:00
    /// does not occupy the 15:00 row.
    pub fn occupies(&self, date: NaiveDate, hour: u32) -> bool {
        self.date == date && hour >= self.start_time.hour() && hour < self.end_time.hour()
    }

    /// "13:00 - 15:30" style label using the configured time format.
    pub fn time_range_label(&self, time_format: &str) -> String {
        format!(
            "{} - {}",
            self.start_time.format(time_format),
            self.end_time.format(time_format)
        )
    }
}

/// Supplier of events. The timeline treats this as an external collaborator;
/// the only built-in implementation is the fixture set in [`crate::fixtures`].
pub trait EventSource {
    fn events(&self) -> Vec<Event>;
}

/// Events scheduled on `date`, in input order.
pub fn events_on(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|e| e.date == date).collect()
}

/// Events occupying the `date`/`hour` cell, in input order.
pub fn events_at(events: &[Event], date: NaiveDate, hour: u32) -> Vec<&Event> {
    events.iter().filter(|e| e.occupies(date, hour)).collect()
}
