use chrono::NaiveDate;
use tracing::debug;

use crate::config::{Config, ThemeConfig};
use crate::events::EventSource;
use crate::fixtures::FixtureEvents;
use crate::layout_constants::HOURS_PER_DAY;
use crate::timeline::{
    TimelineIntent, TimelineState, ViewportCommand, Week, WeekWindowStore,
};

/// Viewport state for the interactive calendar.
///
/// Wraps the [`WeekWindowStore`] with what the terminal view needs: the hour
/// scroll offset, the startup `today`, and the theme. All paging goes
/// through [`App::page_by`] so the edge-proximity check runs on every page
/// change, exactly once.
pub struct App {
    store: WeekWindowStore,
    today: NaiveDate,
    hour_offset: u32,
    pub theme: ThemeConfig,
    pub time_format: String,
}

impl App {
    pub fn new(today: NaiveDate, config: &Config) -> Self {
        let source = FixtureEvents::new(today);
        let store = WeekWindowStore::new(today, config.week_start(), source.events());
        Self {
            store,
            today,
            hour_offset: config.day_start_hour.min(HOURS_PER_DAY - 1),
            theme: config.theme.clone(),
            time_format: config.time_format.clone(),
        }
    }

    pub fn state(&self) -> &TimelineState {
        self.store.state()
    }

    pub fn current_week(&self) -> &Week {
        let state = self.store.state();
        &state.weeks[state.current_page]
    }

    pub fn hour_offset(&self) -> u32 {
        self.hour_offset
    }

    /// Move the viewport by `delta` pages (clamped to the window), then
    /// extend the window if the new page sits near an edge.
    pub fn page_by(&mut self, delta: i64) {
        let len = self.store.state().weeks.len() as i64;
        let page = (self.store.state().current_page as i64 + delta).clamp(0, len - 1) as usize;
        self.store.set_current_page(page);
        self.maybe_extend();
    }

    /// Jump back to the week containing the startup `today`.
    pub fn jump_to_today(&mut self) {
        if let Some(page) = self.store.page_of(self.today) {
            self.store.set_current_page(page);
            self.maybe_extend();
        }
    }

    pub fn scroll_hours(&mut self, delta: i32) {
        let max = (HOURS_PER_DAY - 1) as i32;
        self.hour_offset = (self.hour_offset as i32 + delta).clamp(0, max) as u32;
    }

    fn maybe_extend(&mut self) {
        if let Some(direction) = self.store.extension_needed() {
            debug!(
                ?direction,
                page = self.store.state().current_page,
                "viewport near window edge, extending"
            );
            let command = self
                .store
                .handle_intent(TimelineIntent::LoadNewWeeks(direction), self.today);
            if let Some(command) = command {
                self.apply_viewport(command);
            }
        }
    }

    /// Execute a store-issued jump. Deliberately does not re-run the
    /// proximity check: a prepend must not be able to re-trigger itself
    /// through the page it just moved.
    fn apply_viewport(&mut self, command: ViewportCommand) {
        match command {
            ViewportCommand::JumpToPage(page) => self.store.set_current_page(page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::WEEKS_TO_GENERATE;

    fn app() -> App {
        let today = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        App::new(today, &Config::default())
    }

    #[test]
    fn test_starts_on_the_week_containing_today() {
        let app = app();
        assert_eq!(app.state().current_page, WEEKS_TO_GENERATE);
        assert!(app.current_week().contains(app.today));
    }

    #[test]
    fn test_paging_clamps_to_window_bounds() {
        let mut app = app();
        app.page_by(-1000);
        assert_eq!(app.state().current_page, 0);
    }

    #[test]
    fn test_paging_toward_future_edge_extends_window() {
        let mut app = app();
        let visible = *app.current_week();

        app.page_by(50); // page 100 of 101: inside the future threshold

        assert_eq!(app.state().weeks.len(), 151);
        assert_eq!(app.state().current_page, 100);
        // An append never moves the page the user is on.
        assert_eq!(
            app.state().weeks[50], visible,
            "existing weeks are undisturbed"
        );
    }

    #[test]
    fn test_paging_toward_past_edge_prepends_and_keeps_view_stable() {
        let mut app = app();
        app.page_by(-45); // page 5: inside the past threshold
        let state = app.state();

        assert_eq!(state.weeks.len(), 151);
        // The jump command moved the viewport with the shifted indices, so
        // the visible week is still the one the user paged to.
        assert_eq!(state.current_page, 5 + WEEKS_TO_GENERATE);
        assert_eq!(state.initial_page, state.current_page);
        assert!(state.weeks[state.current_page]
            .contains(NaiveDate::from_ymd_opt(2024, 6, 12).unwrap() - chrono::Duration::weeks(45)));
    }

    #[test]
    fn test_jump_to_today_returns_to_center() {
        let mut app = app();
        app.page_by(30);
        app.jump_to_today();
        assert!(app.current_week().contains(app.today));
    }

    #[test]
    fn test_scroll_hours_clamps_to_day() {
        let mut app = app();
        app.scroll_hours(-100);
        assert_eq!(app.hour_offset(), 0);
        app.scroll_hours(100);
        assert_eq!(app.hour_offset(), 23);
    }
}
