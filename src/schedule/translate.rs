//! Turning user gestures into store entries: preset drops and the add-entry form

use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info};

use super::clock::ClockTime;
use super::palette::Swatch;
use super::preset::PresetTemplate;
use super::store::{NewEntry, ScheduleStore, TimeEntry};
use super::{Field, ScheduleError};

/// Places `preset` on `date` starting at `slot_start`.
///
/// The end time is `slot_start` plus the preset duration without carry, so a
/// 3h preset dropped at "22:00" ends at "25:00". Overlaps are not checked.
pub fn translate<'s>(
    store: &'s mut ScheduleStore,
    preset: &PresetTemplate,
    slot_start: ClockTime,
    date: NaiveDate,
) -> &'s TimeEntry {
    let end = slot_start.add_duration(preset.duration.hours, preset.duration.minutes);
    let entry = store.add(NewEntry {
        date,
        title: preset.title.to_string(),
        start: slot_start,
        end,
        details: String::new(),
        color: preset.color,
    });
    info!(id = %entry.id, preset = preset.id, %date, start = %entry.start, end = %entry.end, "preset dropped");
    entry
}

/// Form state for the add-entry dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub start: String,
    pub end: String,
    pub details: String,
}

impl EntryDraft {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The first required field left blank, if any
    fn missing_field(&self, date: Option<NaiveDate>) -> Option<Field> {
        if self.title.trim().is_empty() {
            Some(Field::Title)
        } else if self.start.trim().is_empty() {
            Some(Field::Start)
        } else if self.end.trim().is_empty() {
            Some(Field::End)
        } else if date.is_none() {
            Some(Field::Date)
        } else {
            None
        }
    }
}

/// Adds the drafted entry to `date` with a random palette color.
///
/// On any failure the store and the draft are left untouched; on success the
/// draft is cleared.
pub fn create_entry<'s, R: Rng + ?Sized>(
    store: &'s mut ScheduleStore,
    draft: &mut EntryDraft,
    date: Option<NaiveDate>,
    rng: &mut R,
) -> Result<&'s TimeEntry, ScheduleError> {
    if let Some(field) = draft.missing_field(date) {
        debug!(?field, "entry not added, required field missing");
        return Err(ScheduleError::MissingField(field));
    }
    let Some(date) = date else {
        return Err(ScheduleError::MissingField(Field::Date));
    };

    let start: ClockTime = draft.start.trim().parse()?;
    let end: ClockTime = draft.end.trim().parse()?;

    let entry = store.add(NewEntry {
        date,
        title: draft.title.trim().to_string(),
        start,
        end,
        details: draft.details.clone(),
        color: Swatch::random(rng),
    });
    draft.clear();
    info!(id = %entry.id, %date, start = %entry.start, end = %entry.end, "entry added");
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::clock::ClockError;
    use crate::schedule::preset::presets;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
    }

    fn draft(title: &str, start: &str, end: &str) -> EntryDraft {
        EntryDraft {
            title: title.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            details: "notes".to_string(),
        }
    }

    #[test]
    fn lunch_break_dropped_at_noon() {
        let mut store = ScheduleStore::new();
        let lunch = presets().iter().find(|p| p.title == "Lunch Break").unwrap();

        let entry = translate(&mut store, lunch, "12:00".parse().unwrap(), date()).clone();

        assert_eq!(entry.start.to_string(), "12:00");
        assert_eq!(entry.end.to_string(), "13:00");
        assert_eq!(entry.title, "Lunch Break");
        assert_eq!(entry.details, "");
        assert_eq!(entry.color.token(), "bg-green-200");
        assert_eq!(entry.date, date());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn late_drop_runs_past_midnight_without_wrapping() {
        let mut store = ScheduleStore::new();
        let work = presets().iter().find(|p| p.title == "Work Session").unwrap();

        let entry = translate(&mut store, work, ClockTime::hourly(22), date());

        assert_eq!(entry.end.to_string(), "25:00");
    }

    #[test]
    fn empty_title_is_a_no_op() {
        let mut store = ScheduleStore::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut form = draft("", "09:00", "10:00");

        let result = create_entry(&mut store, &mut form, Some(date()), &mut rng);

        assert!(matches!(result, Err(ScheduleError::MissingField(Field::Title))));
        assert_eq!(store.len(), 0);
        assert_eq!(form, draft("", "09:00", "10:00"));
    }

    #[test]
    fn missing_times_or_date_are_rejected() {
        let mut store = ScheduleStore::new();
        let mut rng = StdRng::seed_from_u64(1);

        let mut no_start = draft("Standup", "", "10:00");
        let mut no_end = draft("Standup", "09:00", " ");
        let mut no_date = draft("Standup", "09:00", "10:00");

        assert!(matches!(
            create_entry(&mut store, &mut no_start, Some(date()), &mut rng),
            Err(ScheduleError::MissingField(Field::Start))
        ));
        assert!(matches!(
            create_entry(&mut store, &mut no_end, Some(date()), &mut rng),
            Err(ScheduleError::MissingField(Field::End))
        ));
        assert!(matches!(
            create_entry(&mut store, &mut no_date, None, &mut rng),
            Err(ScheduleError::MissingField(Field::Date))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_time_leaves_store_and_form_untouched() {
        let mut store = ScheduleStore::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut form = draft("Standup", "9am", "10:00");

        let result = create_entry(&mut store, &mut form, Some(date()), &mut rng);

        assert!(matches!(result, Err(ScheduleError::Clock(ClockError::Format(_)))));
        assert!(store.is_empty());
        assert_eq!(form.start, "9am");
    }

    #[test]
    fn success_appends_and_clears_the_form() {
        let mut store = ScheduleStore::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut form = draft("Standup", "09:00", "09:15");

        let entry = create_entry(&mut store, &mut form, Some(date()), &mut rng)
            .unwrap()
            .clone();

        assert_eq!(entry.title, "Standup");
        assert_eq!(entry.start.to_string(), "09:00");
        assert_eq!(entry.end.to_string(), "09:15");
        assert_eq!(entry.details, "notes");
        assert_eq!(store.len(), 1);
        assert_eq!(form, EntryDraft::default());
    }

    #[test]
    fn color_follows_the_injected_rng() {
        let color_with_seed = |seed| {
            let mut store = ScheduleStore::new();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut form = draft("Focus", "14:00", "16:00");
            create_entry(&mut store, &mut form, Some(date()), &mut rng)
                .unwrap()
                .color
        };

        let mut rng = StdRng::seed_from_u64(99);
        assert_eq!(color_with_seed(99), Swatch::random(&mut rng));
        assert_eq!(color_with_seed(5), color_with_seed(5));
    }
}
