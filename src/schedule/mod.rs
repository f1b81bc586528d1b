mod clock;
mod palette;
mod preset;
mod resolve;
mod store;
mod translate;

use std::fmt;

use thiserror::Error;

pub use clock::{ClockError, ClockTime};
pub use palette::{Swatch, PALETTE};
pub use preset::{presets, DurationError, PresetDuration, PresetTemplate};
pub use resolve::{hourly_markers, is_valid_interval, resolve_grid, slot_markers, Slot, SlotGrid};
pub use store::{EntryId, NewEntry, ScheduleStore, TimeEntry};
pub use translate::{create_entry, translate, EntryDraft};

/// Inputs the add-entry form requires before it will create an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Start,
    End,
    Date,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Start => "start time",
            Field::End => "end time",
            Field::Date => "date",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error(transparent)]
    Clock(#[from] ClockError),
}
