use chrono::{Datelike, NaiveDate};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::timeline::Week;

/// Box-drawing characters for the stdout week table
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub top_junction: String,
    pub bottom_junction: String,
    pub left_junction: String,
    pub right_junction: String,
    pub cross: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            top_junction: "┬".to_string(),
            bottom_junction: "┴".to_string(),
            left_junction: "├".to_string(),
            right_junction: "┤".to_string(),
            cross: "┼".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            top_junction: "+".to_string(),
            bottom_junction: "+".to_string(),
            left_junction: "+".to_string(),
            right_junction: "+".to_string(),
            cross: "+".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Format a header with text and an underline matching its display width.
pub fn format_header(text: &str, box_chars: &BoxChars) -> String {
    format!(
        "{}\n{}\n",
        text,
        box_chars.horizontal.repeat(UnicodeWidthStr::width(text))
    )
}

/// Month/year title for a week: "June 2024", or a spanning form when the
/// week crosses a month or year boundary ("June - July 2024",
/// "December 2024 - January 2025").
pub fn week_title(week: &Week) -> String {
    let first = week.first_day();
    let last = week.last_day();
    if first.month() == last.month() {
        first.format("%B %Y").to_string()
    } else if first.year() == last.year() {
        format!("{} - {}", first.format("%B"), last.format("%B %Y"))
    } else {
        format!("{} - {}", first.format("%B %Y"), last.format("%B %Y"))
    }
}

/// Short column heading for a day: "Mon 10".
pub fn day_heading(date: NaiveDate) -> String {
    format!("{} {}", date.format("%a"), date.day())
}

/// Truncate a string to at most `max_width` display columns.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(ch);
    }
    out
}

/// Pad or truncate to exactly `width` display columns.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let truncated = truncate_to_width(text, width);
    let pad = width.saturating_sub(UnicodeWidthStr::width(truncated.as_str()));
    format!("{}{}", truncated, " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;
    use crate::timeline::generate_weeks;

    fn week_of(y: i32, m: u32, d: u32) -> Week {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        generate_weeks(date, 1, date, Weekday::Mon)[0]
    }

    #[test]
    fn test_week_title_single_month() {
        assert_eq!(week_title(&week_of(2024, 6, 12)), "June 2024");
    }

    #[test]
    fn test_week_title_spanning_months() {
        // Week of Mon 2024-04-29 ends Sun 2024-05-05.
        assert_eq!(week_title(&week_of(2024, 4, 29)), "April - May 2024");
    }

    #[test]
    fn test_week_title_spanning_years() {
        // Week of Mon 2024-12-30 ends Sun 2025-01-05.
        assert_eq!(
            week_title(&week_of(2024, 12, 30)),
            "December 2024 - January 2025"
        );
    }

    #[test]
    fn test_day_heading() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(day_heading(date), "Mon 10");
        let single_digit = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        assert_eq!(day_heading(single_digit), "Sun 9");
    }

    #[test]
    fn test_format_header_underline_matches_width() {
        let chars = BoxChars::unicode();
        assert_eq!(format_header("June 2024", &chars), "June 2024\n─────────\n");
        let ascii = BoxChars::ascii();
        assert_eq!(format_header("June 2024", &ascii), "June 2024\n---------\n");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Ophthalmologist", 6), "Ophtha");
        assert_eq!(truncate_to_width("Gym", 6), "Gym");
        assert_eq!(truncate_to_width("", 6), "");
    }

    #[test]
    fn test_truncate_respects_wide_characters() {
        // Each CJK character is two columns wide.
        assert_eq!(truncate_to_width("会議あり", 5), "会議");
    }

    #[test]
    fn test_fit_to_width_pads_and_truncates() {
        assert_eq!(fit_to_width("Gym", 6), "Gym   ");
        assert_eq!(fit_to_width("Ophthalmologist", 6), "Ophtha");
    }
}
