use egui::{Color32, RichText, Ui};

use crate::config::ClockFormat;
use crate::schedule::{ClockTime, PresetTemplate, SlotGrid, TimeEntry};
use super::theme::{on_swatch_text, slot_colors, swatch_fill};

/// Result from schedule view interactions
#[derive(Default)]
pub struct ScheduleResult {
    // A preset card released over a slot
    pub dropped: Option<(PresetTemplate, ClockTime)>,
}

/// Format a clock time according to clock format
pub fn format_clock_time(time: ClockTime, clock_format: ClockFormat) -> String {
    match clock_format {
        ClockFormat::Hour24 => time.to_string(),
        // Unreal times like "25:75" are shown as stored
        ClockFormat::Hour12 if !time.is_within_day() => time.to_string(),
        ClockFormat::Hour12 => {
            let hour = time.hour();
            let (h12, ampm) = if hour == 0 {
                (12, "am")
            } else if hour < 12 {
                (hour, "am")
            } else if hour == 12 {
                (12, "pm")
            } else {
                (hour - 12, "pm")
            };
            format!("{}:{:02}{}", h12, time.minute(), ampm)
        }
    }
}

/// Render the preset cards as drag sources, two per row
pub fn render_preset_cards(ui: &mut Ui, presets: &[PresetTemplate]) {
    let card_width = (ui.available_width() - ui.spacing().item_spacing.x) / 2.0;
    let card_size = egui::vec2(card_width, 64.0);
    let (text_color, secondary_color) = on_swatch_text();

    egui::Grid::new("preset_cards")
        .num_columns(2)
        .spacing(ui.spacing().item_spacing)
        .show(ui, |ui| {
            for (idx, preset) in presets.iter().enumerate() {
                let id = egui::Id::new(("preset_card", preset.id));
                let response = ui
                    .dnd_drag_source(id, *preset, |ui| {
                        let (rect, _) = ui.allocate_exact_size(card_size, egui::Sense::hover());
                        let painter = ui.painter_at(rect);
                        painter.rect_filled(rect, 8.0, swatch_fill(preset.color));

                        painter.text(
                            egui::pos2(rect.min.x + 14.0, rect.min.y + 22.0),
                            egui::Align2::LEFT_CENTER,
                            preset.title,
                            egui::FontId::proportional(15.0),
                            text_color,
                        );
                        painter.text(
                            egui::pos2(rect.min.x + 14.0, rect.min.y + 44.0),
                            egui::Align2::LEFT_CENTER,
                            preset.duration.to_string(),
                            egui::FontId::proportional(13.0),
                            secondary_color,
                        );
                        painter.text(
                            egui::pos2(rect.max.x - 12.0, rect.center().y),
                            egui::Align2::RIGHT_CENTER,
                            egui_phosphor::regular::DOTS_SIX_VERTICAL,
                            egui::FontId::proportional(16.0),
                            secondary_color,
                        );
                    })
                    .response;

                if response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
                }

                if idx % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}

/// Render one row per slot marker; each row accepts dropped preset cards
pub fn render_schedule(
    ui: &mut Ui,
    grid: &SlotGrid<'_>,
    clock_format: ClockFormat,
) -> ScheduleResult {
    let mut result = ScheduleResult::default();
    let (label_color, empty_border, drop_highlight) = slot_colors();

    let label_width = 72.0;
    let empty_height = 36.0;
    let filled_height = 68.0;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 6.0;
            let row_width = ui.available_width();

            for slot in grid.iter() {
                let row_height = if slot.entry.is_some() { filled_height } else { empty_height };
                let (row_rect, response) = ui.allocate_exact_size(
                    egui::vec2(row_width, row_height),
                    egui::Sense::hover(),
                );

                let is_drop_target = response.dnd_hover_payload::<PresetTemplate>().is_some();
                if let Some(preset) = response.dnd_release_payload::<PresetTemplate>() {
                    result.dropped = Some((*preset, slot.marker));
                }

                if !ui.is_rect_visible(row_rect) {
                    continue;
                }

                let painter = ui.painter();
                if is_drop_target {
                    painter.rect_filled(row_rect, 6.0, drop_highlight);
                }

                painter.text(
                    egui::pos2(row_rect.min.x + 8.0, row_rect.center().y),
                    egui::Align2::LEFT_CENTER,
                    format_clock_time(slot.marker, clock_format),
                    egui::FontId::proportional(13.0),
                    label_color,
                );

                let content_rect = egui::Rect::from_min_max(
                    egui::pos2(row_rect.min.x + label_width, row_rect.min.y),
                    row_rect.max,
                );

                match slot.entry {
                    Some(entry) => render_entry_block(ui, content_rect, entry, clock_format),
                    None => paint_dashed_rect(ui, content_rect, empty_border),
                }
            }
        });

    result
}

/// Paint an entry as a filled swatch block with title, time range and details
fn render_entry_block(ui: &mut Ui, rect: egui::Rect, entry: &TimeEntry, clock_format: ClockFormat) {
    let painter = ui.painter_at(rect);
    let (text_color, secondary_color) = on_swatch_text();
    painter.rect_filled(rect, 6.0, swatch_fill(entry.color));

    let left = rect.min.x + 10.0;
    painter.text(
        egui::pos2(left, rect.min.y + 16.0),
        egui::Align2::LEFT_CENTER,
        &entry.title,
        egui::FontId::proportional(15.0),
        text_color,
    );

    let range = format!(
        "{} {} - {}",
        egui_phosphor::fill::CLOCK,
        format_clock_time(entry.start, clock_format),
        format_clock_time(entry.end, clock_format),
    );
    painter.text(
        egui::pos2(left, rect.min.y + 36.0),
        egui::Align2::LEFT_CENTER,
        range,
        egui::FontId::new(13.0, super::theme::phosphor_fill_family()),
        text_color,
    );

    if !entry.details.is_empty() {
        // Details are a single line here; the full text is in the tooltip
        let first_line = entry.details.lines().next().unwrap_or_default();
        painter.text(
            egui::pos2(left, rect.min.y + 54.0),
            egui::Align2::LEFT_CENTER,
            first_line,
            egui::FontId::proportional(12.0),
            secondary_color,
        );
        ui.interact(rect, ui.id().with(("entry_details", entry.id)), egui::Sense::hover())
            .on_hover_text(RichText::new(&entry.details).color(Color32::WHITE));
    }
}

fn paint_dashed_rect(ui: &Ui, rect: egui::Rect, color: Color32) {
    let rect = rect.shrink(1.0);
    let points = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    ui.painter().extend(egui::Shape::dashed_line(
        &points,
        egui::Stroke::new(1.0, color),
        6.0,
        4.0,
    ));
}
