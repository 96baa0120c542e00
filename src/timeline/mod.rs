//! The week timeline core: a windowed generator of consecutive calendar
//! weeks plus the store that extends the window as the viewport nears
//! either edge.

use chrono::NaiveDate;

pub mod generator;
pub mod store;

pub use generator::generate_weeks;
pub use store::{
    Direction, TimelineIntent, TimelineState, ViewportCommand, WeekWindowStore, EDGE_THRESHOLD,
    WEEKS_TO_GENERATE,
};

/// A single day cell in the timeline.
///
/// `is_today` is fixed at generation time by comparing against the `today`
/// passed to the generator; it is never re-evaluated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day {
    pub date: NaiveDate,
    pub is_today: bool,
}

/// One calendar week: exactly 7 consecutive days, the first of which falls
/// on the configured week-start day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    pub days: [Day; 7],
}

impl Week {
    pub fn first_day(&self) -> NaiveDate {
        self.days[0].date
    }

    pub fn last_day(&self) -> NaiveDate {
        self.days[6].date
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day() && date <= self.last_day()
    }
}
