//! Day-of-week categorical used by the purchase-trend charts.

use serde::Deserialize;

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum Weekday {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl Weekday {
    /// All days, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Zero-based index with Monday as 0.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Three-letter abbreviation.
    #[must_use]
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
            Self::Sunday => "Sun",
        }
    }

    /// Full English name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl std::str::FromStr for Weekday {
    type Err = String;

    /// Accepts full names and three-letter abbreviations, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "monday" | "mon" => Ok(Self::Monday),
            "tuesday" | "tue" | "tues" => Ok(Self::Tuesday),
            "wednesday" | "wed" => Ok(Self::Wednesday),
            "thursday" | "thu" | "thur" | "thurs" => Ok(Self::Thursday),
            "friday" | "fri" => Ok(Self::Friday),
            "saturday" | "sat" => Ok(Self::Saturday),
            "sunday" | "sun" => Ok(Self::Sunday),
            _ => Err(format!("unknown weekday `{s}`")),
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Monday", Weekday::Monday; "capitalized monday")]
    #[test_case("monday", Weekday::Monday; "lowercase monday")]
    #[test_case("SATURDAY", Weekday::Saturday)]
    #[test_case("wed", Weekday::Wednesday)]
    #[test_case(" Sunday ", Weekday::Sunday)]
    fn test_parse_weekday(input: &str, expected: Weekday) {
        assert_eq!(input.parse::<Weekday>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_weekday_is_rejected() {
        assert!("Someday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_index_is_monday_based() {
        assert_eq!(Weekday::Monday.index(), 0);
        assert_eq!(Weekday::Sunday.index(), 6);
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
        }
    }
}
