use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;

use super::clock::ClockTime;
use super::palette::Swatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry-{}", self.0)
    }
}

/// A block of time placed on one calendar day.
///
/// `start < end` is not guaranteed: end times come from unchecked form input
/// or from no-carry addition and may sort before the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntry {
    pub id: EntryId,
    pub date: NaiveDate,
    pub title: String,
    pub start: ClockTime,
    pub end: ClockTime,
    pub details: String,
    pub color: Swatch,
}

impl TimeEntry {
    /// Whether `marker` falls in `[start, end)`
    pub fn covers(&self, marker: ClockTime) -> bool {
        self.start <= marker && marker < self.end
    }
}

/// Everything an entry needs except its id, which the store assigns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub title: String,
    pub start: ClockTime,
    pub end: ClockTime,
    pub details: String,
    pub color: Swatch,
}

/// Session-scoped, append-only collection of entries across all dates.
#[derive(Debug, Default)]
pub struct ScheduleStore {
    entries: Vec<TimeEntry>,
    next_id: u64,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, assigning it a fresh id
    pub fn add(&mut self, new: NewEntry) -> &TimeEntry {
        let id = EntryId(self.next_id);
        self.next_id += 1;

        self.entries.push(TimeEntry {
            id,
            date: new.date,
            title: new.title,
            start: new.start,
            end: new.end,
            details: new.details,
            color: new.color,
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Entries on `date`, in insertion order
    pub fn for_date(&self, date: NaiveDate) -> impl Iterator<Item = &TimeEntry> + '_ {
        self.entries.iter().filter(move |e| e.date == date)
    }

    pub fn dates_with_entries(&self) -> BTreeSet<NaiveDate> {
        self.entries.iter().map(|e| e.date).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn entry(date: NaiveDate, title: &str, start: &str, end: &str) -> NewEntry {
        NewEntry {
            date,
            title: title.to_string(),
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
            details: String::new(),
            color: Swatch::Blue,
        }
    }

    #[test]
    fn add_assigns_unique_ids() {
        let mut store = ScheduleStore::new();
        let a = store.add(entry(day(1), "a", "09:00", "10:00")).id;
        let b = store.add(entry(day(2), "b", "09:00", "10:00")).id;
        let c = store.add(entry(day(1), "c", "09:00", "10:00")).id;

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn for_date_filters_and_keeps_insertion_order() {
        let mut store = ScheduleStore::new();
        store.add(entry(day(1), "late", "15:00", "16:00"));
        store.add(entry(day(2), "other day", "09:00", "10:00"));
        store.add(entry(day(1), "early", "08:00", "09:00"));

        let titles: Vec<_> = store.for_date(day(1)).map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["late", "early"]);
        assert_eq!(store.for_date(day(3)).count(), 0);
    }

    #[test]
    fn dates_with_entries_is_deduplicated() {
        let mut store = ScheduleStore::new();
        assert!(store.is_empty());
        store.add(entry(day(4), "a", "09:00", "10:00"));
        store.add(entry(day(4), "b", "11:00", "12:00"));
        store.add(entry(day(9), "c", "09:00", "10:00"));

        let dates: Vec<_> = store.dates_with_entries().into_iter().collect();
        assert_eq!(dates, [day(4), day(9)]);
    }

    #[test]
    fn covers_is_half_open() {
        let mut store = ScheduleStore::new();
        let e = store.add(entry(day(1), "a", "09:00", "11:00"));

        assert!(e.covers("09:00".parse().unwrap()));
        assert!(e.covers("10:00".parse().unwrap()));
        assert!(!e.covers("11:00".parse().unwrap()));
        assert!(!e.covers("08:00".parse().unwrap()));
    }
}
