//! Month date-picker

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, Local, Months, NaiveDate, Weekday};
use egui::{Color32, RichText, Ui};

use super::theme::{accent_color, calendar_colors};

/// Result from calendar interactions
#[derive(Default)]
pub struct CalendarResult {
    pub clicked_day: Option<NaiveDate>,
    pub shown_month: Option<NaiveDate>,
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

/// Moves a month start forwards or backwards by whole months
pub fn shift_month(month: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let months = Months::new(delta.unsigned_abs());
    if delta >= 0 {
        month.checked_add_months(months)
    } else {
        month.checked_sub_months(months)
    }
}

/// Every date shown for `month`: whole weeks beginning on `week_start`,
/// padded with days from the neighbouring months.
pub fn month_grid(month: NaiveDate, week_start: Weekday) -> Vec<NaiveDate> {
    let first = month_start(month);
    let leading = (7 + first.weekday().num_days_from_monday()
        - week_start.num_days_from_monday())
        % 7;
    let days_in_month = shift_month(first, 1)
        .map(|next| (next - first).num_days())
        .unwrap_or(31);
    let weeks = (leading as i64 + days_in_month + 6) / 7;

    let grid_start = first - Duration::days(leading as i64);
    (0..weeks * 7)
        .map(|offset| grid_start + Duration::days(offset))
        .collect()
}

fn weekday_initials(week_start: Weekday) -> [&'static str; 7] {
    const FROM_MONDAY: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];
    let offset = week_start.num_days_from_monday() as usize;
    std::array::from_fn(|i| FROM_MONDAY[(i + offset) % 7])
}

pub fn render_calendar(
    ui: &mut Ui,
    month: NaiveDate,
    selected: Option<NaiveDate>,
    marked: &BTreeSet<NaiveDate>,
    week_start: Weekday,
) -> CalendarResult {
    let mut result = CalendarResult::default();
    let today = Local::now().date_naive();
    let (day_text, outside_text, today_ring) = calendar_colors();
    let cell = egui::vec2(40.0, 34.0);

    egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_fill))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing = egui::vec2(0.0, 2.0);

            // Month header with navigation
            ui.horizontal(|ui| {
                ui.set_width(cell.x * 7.0);
                let prev = ui.add(egui::Label::new(
                    RichText::new(egui_phosphor::regular::CARET_LEFT).size(16.0)
                ).sense(egui::Sense::click()));
                if prev.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                if prev.clicked() {
                    result.shown_month = shift_month(month, -1);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let next = ui.add(egui::Label::new(
                        RichText::new(egui_phosphor::regular::CARET_RIGHT).size(16.0)
                    ).sense(egui::Sense::click()));
                    if next.hovered() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    }
                    if next.clicked() {
                        result.shown_month = shift_month(month, 1);
                    }

                    ui.centered_and_justified(|ui| {
                        ui.label(RichText::new(month.format("%B %Y").to_string()).strong());
                    });
                });
            });

            ui.add_space(6.0);

            ui.horizontal(|ui| {
                for initial in weekday_initials(week_start) {
                    let (rect, _) = ui.allocate_exact_size(cell, egui::Sense::hover());
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        initial,
                        egui::FontId::proportional(12.0),
                        outside_text,
                    );
                }
            });

            let days = month_grid(month, week_start);
            for week in days.chunks(7) {
                ui.horizontal(|ui| {
                    for &day in week {
                        let (rect, response) = ui.allocate_exact_size(cell, egui::Sense::click());
                        let in_month = day.month() == month.month();
                        let is_selected = selected == Some(day);
                        let painter = ui.painter();
                        let inner = rect.shrink(2.0);

                        if is_selected {
                            painter.rect_filled(inner, 6.0, accent_color());
                        } else if response.hovered() {
                            painter.rect_filled(inner, 6.0, ui.visuals().widgets.hovered.bg_fill);
                        }
                        if day == today && !is_selected {
                            painter.rect_stroke(inner, 6.0, egui::Stroke::new(1.0, today_ring));
                        }

                        let color = if is_selected {
                            Color32::WHITE
                        } else if in_month {
                            day_text
                        } else {
                            outside_text
                        };
                        painter.text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            day.day().to_string(),
                            egui::FontId::proportional(14.0),
                            color,
                        );

                        // Dot under days that already hold entries
                        if marked.contains(&day) {
                            painter.circle_filled(
                                egui::pos2(rect.center().x, inner.max.y - 4.0),
                                2.0,
                                if is_selected { Color32::WHITE } else { today_ring },
                            );
                        }

                        if response.hovered() {
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                        }
                        if response.clicked() {
                            result.clicked_day = Some(day);
                        }
                    }
                });
            }
        });

    result
}
