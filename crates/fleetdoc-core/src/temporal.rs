//! # Expiry Dates
//!
//! Defines `ExpiryDate`, a calendar-date wrapper for document expiry.
//! Expiry is a whole date with no time component: a document expires at
//! the end of its expiry day, and "days left" is a whole-day count.
//!
//! Only the strict `YYYY-MM-DD` form is accepted on parse, so every date
//! that enters the system renders back identically. A slot can never hold
//! an unparsable date: malformed input is rejected at the boundary, which
//! is what keeps the expiry evaluator total.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The expiry date of a document, at day precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExpiryDate(NaiveDate);

impl ExpiryDate {
    /// Create an expiry date from a `chrono::NaiveDate`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse an expiry date from its `YYYY-MM-DD` form.
    ///
    /// # Errors
    ///
    /// Returns an error for any other format, including datetime strings.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| CoreError::InvalidDate(format!("{s:?}: {e}")))
    }

    /// Access the inner `NaiveDate`.
    pub fn as_date(&self) -> &NaiveDate {
        &self.0
    }

    /// Whole days from `today` until this expiry date.
    ///
    /// Positive while the document is still valid, zero on the expiry day,
    /// negative once expired. A document expiring 2026-02-15 evaluated on
    /// 2026-02-18 yields -3.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        self.0.signed_duration_since(today).num_days()
    }
}

impl std::fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        let exp = ExpiryDate::parse("2026-02-15").unwrap();
        assert_eq!(exp.as_date(), &date(2026, 2, 15));
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert!(ExpiryDate::parse("15.02.2026").is_err());
        assert!(ExpiryDate::parse("2026-02-15T00:00:00Z").is_err());
        assert!(ExpiryDate::parse("not-a-date").is_err());
        assert!(ExpiryDate::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(ExpiryDate::parse("2026-02-30").is_err());
        assert!(ExpiryDate::parse("2026-13-01").is_err());
    }

    #[test]
    fn test_days_until_future() {
        let exp = ExpiryDate::parse("2026-02-25").unwrap();
        assert_eq!(exp.days_until(date(2026, 2, 18)), 7);
    }

    #[test]
    fn test_days_until_past_is_negative() {
        let exp = ExpiryDate::parse("2026-02-15").unwrap();
        assert_eq!(exp.days_until(date(2026, 2, 18)), -3);
    }

    #[test]
    fn test_days_until_same_day_is_zero() {
        let exp = ExpiryDate::parse("2026-02-18").unwrap();
        assert_eq!(exp.days_until(date(2026, 2, 18)), 0);
    }

    #[test]
    fn test_display_roundtrip() {
        let exp = ExpiryDate::parse("2026-02-15").unwrap();
        assert_eq!(exp.to_string(), "2026-02-15");
    }

    #[test]
    fn test_ordering() {
        let earlier = ExpiryDate::parse("2026-02-15").unwrap();
        let later = ExpiryDate::parse("2026-03-01").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_serde_roundtrip() {
        let exp = ExpiryDate::parse("2026-02-15").unwrap();
        let json = serde_json::to_string(&exp).unwrap();
        let parsed: ExpiryDate = serde_json::from_str(&json).unwrap();
        assert_eq!(exp, parsed);
    }
}
