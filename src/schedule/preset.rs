use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::palette::Swatch;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("duration {0:?} has no 'h' separator")]
    MissingHours(String),
    #[error("duration {0:?} has a non-numeric part")]
    NotANumber(String),
}

/// Whole hours plus optional whole minutes, written "3h" or "1h30"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl PresetDuration {
    pub const fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }
}

impl FromStr for PresetDuration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) = s
            .split_once('h')
            .ok_or_else(|| DurationError::MissingHours(s.to_string()))?;

        let number = |part: &str| {
            part.parse::<u32>()
                .map_err(|_| DurationError::NotANumber(s.to_string()))
        };

        Ok(Self {
            hours: number(hours)?,
            minutes: if minutes.is_empty() { 0 } else { number(minutes)? },
        })
    }
}

impl fmt::Display for PresetDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minutes == 0 {
            write!(f, "{}h", self.hours)
        } else {
            write!(f, "{}h{}", self.hours, self.minutes)
        }
    }
}

/// A reusable activity card that can be dropped onto the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub duration: PresetDuration,
    pub color: Swatch,
}

const CATALOG: [PresetTemplate; 5] = [
    PresetTemplate {
        id: "preset1",
        title: "Morning Routine",
        duration: PresetDuration::new(1, 0),
        color: Swatch::Yellow,
    },
    PresetTemplate {
        id: "preset2",
        title: "Work Session",
        duration: PresetDuration::new(3, 0),
        color: Swatch::Blue,
    },
    PresetTemplate {
        id: "preset3",
        title: "Lunch Break",
        duration: PresetDuration::new(1, 0),
        color: Swatch::Green,
    },
    PresetTemplate {
        id: "preset4",
        title: "Exercise",
        duration: PresetDuration::new(1, 0),
        color: Swatch::Orange,
    },
    PresetTemplate {
        id: "preset5",
        title: "Evening Relaxation",
        duration: PresetDuration::new(2, 0),
        color: Swatch::Purple,
    },
];

pub fn presets() -> &'static [PresetTemplate] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hours_only_and_hours_with_minutes() {
        assert_eq!("3h".parse::<PresetDuration>(), Ok(PresetDuration::new(3, 0)));
        assert_eq!("1h30".parse::<PresetDuration>(), Ok(PresetDuration::new(1, 30)));
    }

    #[test]
    fn rejects_durations_without_hours_marker_or_digits() {
        assert!(matches!("90m".parse::<PresetDuration>(), Err(DurationError::MissingHours(_))));
        assert!(matches!("xh".parse::<PresetDuration>(), Err(DurationError::NotANumber(_))));
        assert!(matches!("1hxx".parse::<PresetDuration>(), Err(DurationError::NotANumber(_))));
    }

    #[test]
    fn display_matches_card_text() {
        assert_eq!(PresetDuration::new(2, 0).to_string(), "2h");
        assert_eq!(PresetDuration::new(1, 30).to_string(), "1h30");
    }

    #[test]
    fn catalog_is_fixed_and_ordered() {
        let titles: Vec<_> = presets().iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            ["Morning Routine", "Work Session", "Lunch Break", "Exercise", "Evening Relaxation"]
        );

        let lunch = &presets()[2];
        assert_eq!(lunch.id, "preset3");
        assert_eq!(lunch.duration.to_string(), "1h");
        assert_eq!(lunch.color.token(), "bg-green-200");
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<_> = presets().iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), presets().len());
    }
}
