use chrono::{Local, NaiveDate};
use eframe::egui;
use egui::{Color32, RichText};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::config::Config;
use crate::schedule::{
    create_entry, presets, resolve_grid, translate, ClockTime, EntryDraft, ScheduleError,
    ScheduleStore, SlotGrid,
};
use super::calendar::{self, month_start};
use super::views;

pub struct TrackerApp {
    config: Config,

    // Schedule state, owned here and only read by the views
    store: ScheduleStore,
    rng: StdRng,
    markers: Vec<ClockTime>,

    // Calendar
    selected_date: Option<NaiveDate>,
    shown_month: NaiveDate,

    // Add entry dialog
    show_dialog: bool,
    draft: EntryDraft,
    dialog_error: Option<ScheduleError>,
}

impl TrackerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = Config::load().unwrap_or_else(|e| {
            warn!(error = %e, "using default config");
            Config::default()
        });
        super::setup_fonts(&cc.egui_ctx);
        super::setup_theme(&cc.egui_ctx);

        Self::with_config(config)
    }

    fn with_config(config: Config) -> Self {
        let rng = match config.color_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let today = Local::now().date_naive();
        let markers = config.markers();

        Self {
            config,
            store: ScheduleStore::new(),
            rng,
            markers,
            selected_date: Some(today),
            shown_month: month_start(today),
            show_dialog: false,
            draft: EntryDraft::default(),
            dialog_error: None,
        }
    }

    /// Clicking the selected day again clears the selection
    fn select_day(&mut self, day: NaiveDate) {
        if self.selected_date == Some(day) {
            self.selected_date = None;
        } else {
            self.selected_date = Some(day);
            self.shown_month = month_start(day);
        }
        debug!(selected = ?self.selected_date, "date selection changed");
    }

    fn open_add_dialog(&mut self) {
        self.show_dialog = true;
        self.dialog_error = None;
    }

    fn save_dialog(&mut self) {
        match create_entry(&mut self.store, &mut self.draft, self.selected_date, &mut self.rng) {
            Ok(_) => {
                self.show_dialog = false;
                self.dialog_error = None;
            }
            Err(e) => {
                // Leave the dialog open with the draft intact
                self.dialog_error = Some(e);
            }
        }
    }

    fn drop_preset(&mut self, preset: &crate::schedule::PresetTemplate, marker: ClockTime) {
        match self.selected_date {
            Some(date) => {
                translate(&mut self.store, preset, marker, date);
            }
            None => debug!(preset = preset.id, "drop ignored, no date selected"),
        }
    }

    fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.label(
            RichText::new("Colorful Time Tracker")
                .size(24.0)
                .strong()
                .color(super::theme::accent_color()),
        );
        ui.add_space(12.0);

        let marked = self.store.dates_with_entries();
        let result = calendar::render_calendar(
            ui,
            self.shown_month,
            self.selected_date,
            &marked,
            self.config.week_start.weekday(),
        );
        if let Some(month) = result.shown_month {
            debug!(%month, "calendar month changed");
            self.shown_month = month;
        }
        if let Some(day) = result.clicked_day {
            self.select_day(day);
        }

        ui.add_space(12.0);
        let add_button = egui::Button::new(
            RichText::new(format!("{} Add New Entry", egui_phosphor::regular::PLUS))
                .color(Color32::WHITE),
        )
        .fill(super::theme::accent_color())
        .min_size(egui::vec2(ui.available_width(), 36.0));
        if ui.add(add_button).clicked() {
            self.open_add_dialog();
        }

        ui.add_space(20.0);
        ui.heading("Preset Events");
        ui.add_space(4.0);
        views::render_preset_cards(ui, presets());
    }

    fn render_schedule(&mut self, ui: &mut egui::Ui) {
        let heading = match self.selected_date {
            Some(date) => format!("Schedule for {}", date.format("%a %b %d %Y")),
            None => "Schedule".to_string(),
        };
        ui.horizontal(|ui| {
            ui.label(RichText::new(egui_phosphor::regular::CLOCK).size(20.0));
            ui.heading(heading);
        });
        ui.add_space(8.0);

        let result = {
            let grid = match self.selected_date {
                Some(date) => resolve_grid(&self.store, date, &self.markers),
                None => SlotGrid::empty(&self.markers),
            };
            views::render_schedule(ui, &grid, self.config.clock_format)
        };

        if let Some((preset, marker)) = result.dropped {
            self.drop_preset(&preset, marker);
        }
    }

    fn render_dialog(&mut self, ctx: &egui::Context) {
        let mut open = true;
        let mut submit = false;

        let (content_bg, frame_color, error_color) = super::theme::dialog_colors();
        let dialog_frame = egui::Frame::none()
            .fill(content_bg)
            .stroke(egui::Stroke::new(2.0, frame_color))
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(20.0));

        egui::Window::new("Add New Time Entry")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(425.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .frame(dialog_frame)
            .show(ctx, |ui| {
                ui.set_min_width(400.0);

                ui.add(
                    egui::TextEdit::singleline(&mut self.draft.title)
                        .hint_text("Entry title")
                        .desired_width(f32::INFINITY),
                );
                ui.horizontal(|ui| {
                    let half = (ui.available_width() - ui.spacing().item_spacing.x) / 2.0;
                    ui.add(
                        egui::TextEdit::singleline(&mut self.draft.start)
                            .hint_text("Start time (HH:MM)")
                            .desired_width(half),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut self.draft.end)
                            .hint_text("End time (HH:MM)")
                            .desired_width(half),
                    );
                });
                ui.add(
                    egui::TextEdit::multiline(&mut self.draft.details)
                        .hint_text("Details")
                        .desired_rows(3)
                        .desired_width(f32::INFINITY),
                );

                if let Some(error) = &self.dialog_error {
                    ui.label(RichText::new(error.to_string()).color(error_color));
                }

                ui.add_space(6.0);
                let add = egui::Button::new(RichText::new("Add Entry").color(Color32::WHITE))
                    .fill(super::theme::accent_color())
                    .min_size(egui::vec2(ui.available_width(), 34.0));
                if ui.add(add).clicked() {
                    submit = true;
                }
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            open = false;
        }

        if submit {
            self.save_dialog();
        }
        if !open {
            self.show_dialog = false;
            self.dialog_error = None;
        }
    }
}

impl eframe::App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle pinch-to-zoom (trackpad pinch or Ctrl+scroll)
        let zoom_delta = ctx.input(|i| i.zoom_delta());
        if zoom_delta != 1.0 {
            self.config.font_scale = (self.config.font_scale * zoom_delta).clamp(0.75, 2.5);
            // Only persist noticeable changes
            if (zoom_delta - 1.0).abs() > 0.01 {
                if let Err(e) = self.config.save() {
                    warn!(error = %e, "failed to save config");
                }
            }
        }
        ctx.set_pixels_per_point(self.config.font_scale);

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(340.0)
            .show(ctx, |ui| {
                self.render_sidebar(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_schedule(ui);
        });

        if self.show_dialog {
            self.render_dialog(ctx);
        }
    }
}
