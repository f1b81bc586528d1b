//! Wall-clock "HH:MM" values used for entry bounds and slot markers

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("expected a time like \"09:30\", got {0:?}")]
    Format(String),
}

/// A time of day with no date or timezone.
///
/// Fields are not range-checked: "99:99" parses, and `add_duration` never
/// carries minutes into hours or wraps past midnight, so values like
/// "25:75" are representable and render as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    pub const fn hourly(hour: u32) -> Self {
        Self::new(hour, 0)
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Adds hours and minutes field by field, with no carry or rollover.
    pub fn add_duration(self, hours: u32, minutes: u32) -> Self {
        Self {
            hour: self.hour + hours,
            minute: self.minute + minutes,
        }
    }

    /// True when the fields describe a real time of day (00:00..=23:59)
    pub fn is_within_day(&self) -> bool {
        self.hour < 24 && self.minute < 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 5
            && bytes[2] == b':'
            && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
        if !well_formed {
            return Err(ClockError::Format(s.to_string()));
        }

        let digit = |i: usize| (bytes[i] - b'0') as u32;
        Ok(Self {
            hour: digit(0) * 10 + digit(1),
            minute: digit(3) * 10 + digit(4),
        })
    }
}

// Ordered by the canonical padded string, matching how the times are
// compared on screen. Numeric order only agrees while fields stay two digits.
impl Ord for ClockTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_string().cmp(&other.to_string())
    }
}

impl PartialOrd for ClockTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn format_pads_both_fields() {
        assert_eq!(ClockTime::new(9, 5).to_string(), "09:05");
        assert_eq!(ClockTime::hourly(0).to_string(), "00:00");
    }

    #[test]
    fn parse_format_round_trip_for_every_minute_of_the_day() {
        for hour in 0..24 {
            for minute in 0..60 {
                let time = ClockTime::new(hour, minute);
                assert_eq!(t(&time.to_string()), time);
            }
        }
    }

    #[test]
    fn parse_rejects_malformed_strings() {
        for bad in ["9:00", "09-00", "0900", "ab:cd", "09:0", "09:000", "", " 09:00"] {
            assert!(
                matches!(bad.parse::<ClockTime>(), Err(ClockError::Format(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn parse_does_not_range_check() {
        let time = t("99:99");
        assert_eq!((time.hour(), time.minute()), (99, 99));
        assert!(!time.is_within_day());
    }

    #[test]
    fn add_duration_never_carries() {
        assert_eq!(t("23:30").add_duration(2, 45).to_string(), "25:75");
        assert_eq!(t("12:00").add_duration(1, 0).to_string(), "13:00");
        assert_eq!(t("10:45").add_duration(0, 30).to_string(), "10:75");
    }

    #[test]
    fn ordering_follows_padded_string() {
        assert!(t("09:00") < t("10:00"));
        assert!(t("23:00") < t("25:75"));
        assert!(t("10:75") > t("10:59"));
        assert_eq!(t("08:30").cmp(&t("08:30")), Ordering::Equal);
    }
}
