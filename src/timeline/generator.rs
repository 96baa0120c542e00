use chrono::{Duration, NaiveDate, Weekday};

use super::{Day, Week};

/// Generate `week_count` consecutive weeks starting from the week containing
/// `anchor`.
///
/// The anchor is normalized to its week's first day before any weeks are
/// built, so a mid-week anchor never produces a partial leading week. Each
/// day's `is_today` flag is `date == today`.
///
/// Pure and deterministic: identical inputs always yield identical output,
/// which is what lets the window-extension path splice batches together
/// without gaps and lets tests run without mocking time.
pub fn generate_weeks(
    anchor: NaiveDate,
    week_count: usize,
    today: NaiveDate,
    week_start: Weekday,
) -> Vec<Week> {
    let start = anchor.week(week_start).first_day();
    (0..week_count as i64)
        .map(|i| {
            let first = start + Duration::weeks(i);
            let days = std::array::from_fn(|j| {
                let date = first + Duration::days(j as i64);
                Day {
                    date,
                    is_today: date == today,
                }
            });
            Week { days }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2024-06-12 is a Wednesday; its Monday-start week begins 2024-06-10.
    const Y: i32 = 2024;

    #[test]
    fn test_anchor_is_normalized_to_week_start() {
        let weeks = generate_weeks(date(Y, 6, 12), 1, date(Y, 6, 12), Weekday::Mon);
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].first_day(), date(Y, 6, 10));
        assert_eq!(weeks[0].last_day(), date(Y, 6, 16));
    }

    #[test]
    fn test_anchor_already_on_week_start_is_unchanged() {
        let weeks = generate_weeks(date(Y, 6, 10), 1, date(Y, 6, 12), Weekday::Mon);
        assert_eq!(weeks[0].first_day(), date(Y, 6, 10));
    }

    #[test]
    fn test_sunday_week_start() {
        let weeks = generate_weeks(date(Y, 6, 12), 1, date(Y, 6, 12), Weekday::Sun);
        assert_eq!(weeks[0].first_day(), date(Y, 6, 9));
        assert_eq!(weeks[0].last_day(), date(Y, 6, 15));
    }

    #[test]
    fn test_zero_weeks_yields_empty() {
        let weeks = generate_weeks(date(Y, 6, 12), 0, date(Y, 6, 12), Weekday::Mon);
        assert!(weeks.is_empty());
    }

    #[test]
    fn test_days_are_contiguous_within_and_across_weeks() {
        let weeks = generate_weeks(date(Y, 6, 12), 8, date(Y, 6, 12), Weekday::Mon);
        let days: Vec<NaiveDate> = weeks.iter().flat_map(|w| w.days.iter().map(|d| d.date)).collect();
        for pair in days.windows(2) {
            assert_eq!(pair[1], pair[0] + Duration::days(1));
        }
    }

    #[test]
    fn test_exactly_one_day_is_today_when_window_covers_it() {
        let weeks = generate_weeks(date(Y, 6, 12), 4, date(Y, 6, 12), Weekday::Mon);
        let today_days: Vec<_> = weeks
            .iter()
            .flat_map(|w| w.days.iter())
            .filter(|d| d.is_today)
            .collect();
        assert_eq!(today_days.len(), 1);
        assert_eq!(today_days[0].date, date(Y, 6, 12));
    }

    #[test]
    fn test_no_day_is_today_when_window_misses_it() {
        let weeks = generate_weeks(date(Y, 6, 12), 2, date(Y, 1, 1), Weekday::Mon);
        assert!(weeks.iter().flat_map(|w| w.days.iter()).all(|d| !d.is_today));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate_weeks(date(Y, 6, 12), 50, date(Y, 6, 12), Weekday::Mon);
        let b = generate_weeks(date(Y, 6, 12), 50, date(Y, 6, 12), Weekday::Mon);
        assert_eq!(a, b);
    }

    #[test]
    fn test_crosses_month_and_year_boundaries() {
        // Week of 2024-12-30 runs into January 2025.
        let weeks = generate_weeks(date(Y, 12, 30), 2, date(Y, 6, 12), Weekday::Mon);
        assert_eq!(weeks[0].first_day(), date(Y, 12, 30));
        assert_eq!(weeks[0].last_day(), date(2025, 1, 5));
        assert_eq!(weeks[1].first_day(), date(2025, 1, 6));
    }
}
