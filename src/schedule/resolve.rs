use chrono::NaiveDate;

use super::clock::ClockTime;
use super::store::{ScheduleStore, TimeEntry};

const MINUTES_PER_DAY: u32 = 24 * 60;
pub const DEFAULT_SLOT_MINUTES: u32 = 60;

/// The 24 hourly markers "00:00" through "23:00"
pub fn hourly_markers() -> Vec<ClockTime> {
    slot_markers(DEFAULT_SLOT_MINUTES)
}

/// Evenly spaced markers across one day.
///
/// The interval must divide an hour or be a whole number of hours dividing
/// the day; anything else falls back to hourly markers.
pub fn slot_markers(interval_minutes: u32) -> Vec<ClockTime> {
    let interval = if is_valid_interval(interval_minutes) {
        interval_minutes
    } else {
        DEFAULT_SLOT_MINUTES
    };

    (0..MINUTES_PER_DAY)
        .step_by(interval as usize)
        .map(|m| ClockTime::new(m / 60, m % 60))
        .collect()
}

pub fn is_valid_interval(minutes: u32) -> bool {
    match minutes {
        0 => false,
        m if m <= 60 => 60 % m == 0,
        m => m % 60 == 0 && MINUTES_PER_DAY % m == 0,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Slot<'a> {
    pub marker: ClockTime,
    pub entry: Option<&'a TimeEntry>,
}

/// Per-marker view of one day, in marker order
#[derive(Debug)]
pub struct SlotGrid<'a> {
    slots: Vec<Slot<'a>>,
}

impl<'a> SlotGrid<'a> {
    /// A grid with every marker empty, used when no date is selected
    pub fn empty(markers: &[ClockTime]) -> Self {
        let slots = markers
            .iter()
            .map(|&marker| Slot { marker, entry: None })
            .collect();
        Self { slots }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot<'a>> {
        self.slots.iter()
    }

    pub fn entry_at(&self, marker: ClockTime) -> Option<&'a TimeEntry> {
        self.slots
            .iter()
            .find(|s| s.marker == marker)
            .and_then(|s| s.entry)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}

/// Resolves which entry occupies each marker on `date`.
///
/// A marker is covered by an entry when `start <= marker < end`. When several
/// entries cover the same marker the earliest inserted one wins, so the grid
/// is stable no matter how entries overlap.
pub fn resolve_grid<'a>(
    store: &'a ScheduleStore,
    date: NaiveDate,
    markers: &[ClockTime],
) -> SlotGrid<'a> {
    let day: Vec<&TimeEntry> = store.for_date(date).collect();

    let slots = markers
        .iter()
        .map(|&marker| Slot {
            marker,
            entry: day.iter().copied().find(|e| e.covers(marker)),
        })
        .collect();

    SlotGrid { slots }
}
