mod app;
mod calendar;
mod theme;
mod views;

pub use app::TrackerApp;
pub use theme::{setup_fonts, setup_theme};
