//! Serde helpers for the quirks of the CSV schema.
//!
//! The source dataset stores nullable columns as empty cells, timestamps in
//! a handful of near-ISO shapes, and nullable integer columns in float form
//! (`"13.0"`). These modules normalize all of that at deserialize time so
//! the rest of the crate only sees clean domain types.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::de::{self, Deserialize, Deserializer};

use crate::domain::entities::Weekday;

/// Timestamps in `YYYY-MM-DD`, `YYYY-MM-DD HH:MM[:SS[.f]]`, or RFC 3339
/// `T`-separated form.
pub mod flexible_timestamp {
    use super::{Deserialize, Deserializer, NaiveDate, NaiveDateTime, NaiveTime, de};

    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    /// Parses a timestamp cell. Date-only values land at midnight.
    #[must_use]
    pub fn parse(value: &str) -> Option<NaiveDateTime> {
        let trimmed = value.trim().trim_end_matches(['Z', 'z']);
        for format in DATETIME_FORMATS {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Some(parsed);
            }
        }
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .map(|date| date.and_time(NaiveTime::MIN))
    }

    /// Deserializes a required timestamp cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is empty or not a recognized timestamp.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp `{raw}`")))
    }

    /// Deserializes an optional timestamp cell; empty cells become `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if a non-empty cell is not a recognized timestamp.
    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        parse(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp `{raw}`")))
    }
}

/// Nullable hour-of-day column (0-23), possibly in float form.
pub mod optional_hour {
    use super::{Deserialize, Deserializer, de};

    fn parse(value: &str) -> Option<u8> {
        let trimmed = value.trim();
        let whole = trimmed.strip_suffix(".0").unwrap_or(trimmed);
        if let Ok(hour) = whole.parse::<u8>() {
            return Some(hour);
        }
        // Pandas exports nullable ints as e.g. "13.0"; anything with a
        // genuine fraction is rejected below by the range check failing.
        let as_float = trimmed.parse::<f64>().ok()?;
        if as_float.fract() == 0.0 && (0.0..=255.0).contains(&as_float) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Some(as_float as u8)
        } else {
            None
        }
    }

    /// Deserializes the hour cell, validating the 0-23 range.
    ///
    /// # Errors
    ///
    /// Returns an error if a non-empty cell is not an integer in 0-23.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        match parse(&raw) {
            Some(hour) if hour < 24 => Ok(Some(hour)),
            _ => Err(de::Error::custom(format!("invalid hour of day `{raw}`"))),
        }
    }
}

/// Nullable weekday-name column.
pub mod optional_weekday {
    use super::{Deserialize, Deserializer, Weekday, de};

    /// Deserializes the weekday cell; empty cells become `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if a non-empty cell is not a weekday name.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Weekday>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        raw.parse::<Weekday>().map(Some).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use test_case::test_case;

    #[test_case("2024-03-05"; "date only")]
    #[test_case("2024-03-05 00:00:00"; "space separated")]
    #[test_case("2024-03-05T00:00:00"; "t separated")]
    #[test_case("2024-03-05T00:00:00.000Z"; "rfc3339 utc")]
    #[test_case(" 2024-03-05 "; "padded")]
    fn test_timestamp_forms_parse(input: &str) {
        let parsed = flexible_timestamp::parse(input).unwrap();
        assert_eq!(
            (parsed.year(), parsed.month(), parsed.day()),
            (2024, 3, 5)
        );
    }

    #[test]
    fn test_date_only_lands_at_midnight() {
        let parsed = flexible_timestamp::parse("2023-12-31").unwrap();
        assert_eq!((parsed.hour(), parsed.minute(), parsed.second()), (0, 0, 0));
    }

    #[test]
    fn test_time_of_day_is_preserved() {
        let parsed = flexible_timestamp::parse("2023-12-31 18:45:10").unwrap();
        assert_eq!((parsed.hour(), parsed.minute(), parsed.second()), (18, 45, 10));
    }

    #[test]
    fn test_garbage_timestamp_is_rejected() {
        assert!(flexible_timestamp::parse("last tuesday").is_none());
        assert!(flexible_timestamp::parse("2024-13-40").is_none());
    }
}
