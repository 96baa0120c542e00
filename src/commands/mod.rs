pub mod agenda;
pub mod week;

use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Resolve an optional `YYYY-MM-DD` argument, defaulting to `today`.
fn resolve_date(date: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", s)),
        None => Ok(today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_date_defaults_to_today() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        assert_eq!(resolve_date(None, today).unwrap(), today);
    }

    #[test]
    fn test_resolve_date_parses_iso_dates() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        assert_eq!(
            resolve_date(Some("2024-01-31"), today).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
        );
    }

    #[test]
    fn test_resolve_date_rejects_garbage() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        assert!(resolve_date(Some("06/12/2024"), today).is_err());
        assert!(resolve_date(Some("2024-13-01"), today).is_err());
    }
}
