use std::fmt;

use chrono::{Duration, NaiveDate, Weekday};
use tracing::debug;

use crate::events::Event;

use super::generator::generate_weeks;
use super::Week;

/// Number of weeks added per extension, and per side of the initial window.
pub const WEEKS_TO_GENERATE: usize = 50;

/// Page-index distance from a window edge at which an extension is due.
pub const EDGE_THRESHOLD: usize = 10;

// A single extension must push the edge back out past the threshold,
// otherwise the viewport could never leave the trigger zone.
const _: () = assert!(EDGE_THRESHOLD < WEEKS_TO_GENERATE);

/// Temporal direction of a window extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Past,
    Future,
}

/// Raw direction value that is neither +1 nor -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDirection(pub i8);

impl fmt::Display for InvalidDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid direction {}, expected +1 or -1", self.0)
    }
}

impl std::error::Error for InvalidDirection {}

impl TryFrom<i8> for Direction {
    type Error = InvalidDirection;

    fn try_from(raw: i8) -> Result<Self, Self::Error> {
        match raw {
            1 => Ok(Self::Future),
            -1 => Ok(Self::Past),
            other => Err(InvalidDirection(other)),
        }
    }
}

impl Direction {
    pub fn delta(self) -> i8 {
        match self {
            Self::Past => -1,
            Self::Future => 1,
        }
    }
}

/// Intents accepted by [`WeekWindowStore::handle_intent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineIntent {
    LoadNewWeeks(Direction),
}

/// Command handed back to the presentation layer when a state change
/// requires a viewport move. Always a non-animated positional jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportCommand {
    JumpToPage(usize),
}

/// Snapshot of the materialized timeline.
///
/// `weeks` is globally ordered by date with no gaps or overlaps between
/// adjacent weeks. `initial_page` is the page the viewport should sit on
/// after a re-anchor; `current_page` tracks the last-observed viewport page.
/// Events are read-only input, matched against days at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineState {
    pub initial_page: usize,
    pub current_page: usize,
    pub weeks: Vec<Week>,
    pub events: Vec<Event>,
}

/// Owner of the week window. Holds the only mutable copy of
/// [`TimelineState`] and applies the two allowed mutations: initialization
/// and extension.
///
/// The window grows monotonically and is never pruned; sustained paging in
/// one direction keeps old weeks around. That is an intentional simplicity
/// trade-off, not an oversight.
#[derive(Debug, Clone)]
pub struct WeekWindowStore {
    state: TimelineState,
    week_start: Weekday,
}

impl WeekWindowStore {
    /// Build the initial window: `2 * WEEKS_TO_GENERATE + 1` weeks centered
    /// on the week containing `today`, with both page pointers on the center.
    ///
    /// `today` and `week_start` are injected so construction stays
    /// deterministic under test; callers read the clock and locale once at
    /// the boundary.
    pub fn new(today: NaiveDate, week_start: Weekday, events: Vec<Event>) -> Self {
        let anchor = today - Duration::weeks(WEEKS_TO_GENERATE as i64);
        let weeks = generate_weeks(anchor, 2 * WEEKS_TO_GENERATE + 1, today, week_start);
        debug!(count = weeks.len(), %today, "initialized week window");
        Self {
            state: TimelineState {
                initial_page: WEEKS_TO_GENERATE,
                current_page: WEEKS_TO_GENERATE,
                weeks,
                events,
            },
            week_start,
        }
    }

    pub fn state(&self) -> &TimelineState {
        &self.state
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Record the viewport page the user is now looking at.
    pub fn set_current_page(&mut self, page: usize) {
        debug_assert!(page < self.state.weeks.len());
        self.state.current_page = page;
    }

    /// Page index of the week containing `date`, if it is materialized.
    pub fn page_of(&self, date: NaiveDate) -> Option<usize> {
        let first = self.state.weeks.first()?.first_day();
        let offset = (date - first).num_days();
        if offset < 0 {
            return None;
        }
        let page = (offset / 7) as usize;
        (page < self.state.weeks.len()).then_some(page)
    }

    /// Proximity policy: which edge, if any, the current page is close
    /// enough to that the window should be extended.
    pub fn extension_needed(&self) -> Option<Direction> {
        let len = self.state.weeks.len();
        if self.state.current_page < EDGE_THRESHOLD {
            Some(Direction::Past)
        } else if self.state.current_page > len - EDGE_THRESHOLD {
            Some(Direction::Future)
        } else {
            None
        }
    }

    /// Apply an intent. Runs to completion synchronously; the state is never
    /// observable mid-mutation.
    ///
    /// Returns a [`ViewportCommand`] when the mutation shifted existing page
    /// indices (a prepend). The caller must execute the jump without
    /// re-entering the proximity check, or a prepend could re-trigger itself.
    pub fn handle_intent(
        &mut self,
        intent: TimelineIntent,
        today: NaiveDate,
    ) -> Option<ViewportCommand> {
        match intent {
            TimelineIntent::LoadNewWeeks(direction) => self.load_new_weeks(direction, today),
        }
    }

    fn load_new_weeks(&mut self, direction: Direction, today: NaiveDate) -> Option<ViewportCommand> {
        debug_assert!(!self.state.weeks.is_empty());
        match direction {
            Direction::Future => {
                let anchor = self.state.weeks[self.state.weeks.len() - 1].last_day()
                    + Duration::days(1);
                let batch = generate_weeks(anchor, WEEKS_TO_GENERATE, today, self.week_start);
                debug!(count = batch.len(), %anchor, "appending weeks");
                self.state.weeks.extend(batch);
                // Appending at the tail never shifts existing indices.
                None
            }
            Direction::Past => {
                let anchor = self.state.weeks[0].first_day()
                    - Duration::weeks(WEEKS_TO_GENERATE as i64);
                let batch = generate_weeks(anchor, WEEKS_TO_GENERATE, today, self.week_start);
                debug!(count = batch.len(), %anchor, "prepending weeks");
                self.state.weeks.splice(0..0, batch);
                // Prepending shifts every existing index forward by the batch
                // size. Both page pointers move with it so the state stays
                // self-consistent, and the explicit jump command lets the
                // viewport follow without the user noticing a move.
                self.state.current_page += WEEKS_TO_GENERATE;
                self.state.initial_page = self.state.current_page;
                Some(ViewportCommand::JumpToPage(self.state.initial_page))
            }
        }
    }
}
