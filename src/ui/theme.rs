use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

use crate::schedule::Swatch;

/// Font family for filled Phosphor icons
pub fn phosphor_fill_family() -> FontFamily {
    FontFamily::Name("phosphor-fill".into())
}

pub fn setup_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();

    // Add Phosphor Regular icons as fallback in Proportional family
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    // Phosphor Fill as a separate family, falling back to the default text font
    fonts.font_data.insert(
        "phosphor-fill".into(),
        egui_phosphor::Variant::Fill.font_data(),
    );
    let mut fill_family = vec!["phosphor-fill".to_owned()];
    if let Some(proportional) = fonts.families.get(&FontFamily::Proportional) {
        fill_family.extend(proportional.iter().cloned());
    }
    fonts.families.insert(phosphor_fill_family(), fill_family);

    ctx.set_fonts(fonts);
}

pub fn setup_theme(ctx: &egui::Context) {
    let mut style = Style::default();

    let mut visuals = Visuals::dark();

    let bg = Color32::from_rgb(18, 16, 22);
    visuals.panel_fill = bg;
    visuals.window_fill = bg;
    visuals.faint_bg_color = Color32::from_rgb(28, 26, 34);
    visuals.extreme_bg_color = Color32::from_rgb(10, 9, 12);

    visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(40, 38, 46);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, Color32::from_rgb(176, 172, 184));

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(54, 50, 62);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Color32::from_rgb(204, 200, 212));

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(78, 72, 90);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Color32::WHITE);

    // Purple-to-pink accent
    let accent = accent_color();
    visuals.widgets.active.bg_fill = accent;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);

    visuals.selection.bg_fill = accent;
    visuals.selection.stroke = Stroke::new(1.0, Color32::WHITE);
    visuals.hyperlink_color = accent;

    visuals.widgets.noninteractive.rounding = Rounding::same(6.0);
    visuals.widgets.inactive.rounding = Rounding::same(6.0);
    visuals.widgets.hovered.rounding = Rounding::same(6.0);
    visuals.widgets.active.rounding = Rounding::same(6.0);
    visuals.window_rounding = Rounding::same(8.0);

    style.visuals = visuals;

    style.text_styles = [
        (TextStyle::Small, FontId::new(12.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(14.0, 8.0);
    style.spacing.window_margin = egui::Margin::same(20.0);

    ctx.set_style(style);
}

pub fn accent_color() -> Color32 {
    Color32::from_rgb(0xa8, 0x55, 0xf7)
}

/// Pastel fill for a palette swatch (the 200 shade)
pub fn swatch_fill(swatch: Swatch) -> Color32 {
    match swatch {
        Swatch::Pink => Color32::from_rgb(0xfb, 0xcf, 0xe8),
        Swatch::Purple => Color32::from_rgb(0xe9, 0xd5, 0xff),
        Swatch::Indigo => Color32::from_rgb(0xc7, 0xd2, 0xfe),
        Swatch::Blue => Color32::from_rgb(0xbf, 0xdb, 0xfe),
        Swatch::Green => Color32::from_rgb(0xbb, 0xf7, 0xd0),
        Swatch::Yellow => Color32::from_rgb(0xfe, 0xf0, 0x8a),
        Swatch::Orange => Color32::from_rgb(0xfe, 0xd7, 0xaa),
        Swatch::Red => Color32::from_rgb(0xfe, 0xca, 0xca),
        Swatch::Teal => Color32::from_rgb(0x99, 0xf6, 0xe4),
        Swatch::Cyan => Color32::from_rgb(0xa5, 0xf3, 0xfc),
    }
}

/// Returns (primary, secondary) text colors for content drawn on a swatch
pub fn on_swatch_text() -> (Color32, Color32) {
    (
        Color32::from_rgb(24, 24, 27),
        Color32::from_rgb(63, 63, 70),
    )
}

/// Returns (label_color, empty_border, drop_highlight) for schedule rows
pub fn slot_colors() -> (Color32, Color32, Color32) {
    (
        Color32::from_rgb(140, 136, 150),
        Color32::from_rgb(72, 68, 82),
        Color32::from_rgb(44, 40, 54),
    )
}

/// Returns (day_text, outside_month_text, today_ring) for the calendar
pub fn calendar_colors() -> (Color32, Color32, Color32) {
    (
        Color32::from_rgb(220, 216, 228),
        Color32::from_rgb(96, 92, 104),
        Color32::from_rgb(0xec, 0x48, 0x99),
    )
}

/// Returns (content_bg, frame_color, error_text) for dialogs
pub fn dialog_colors() -> (Color32, Color32, Color32) {
    (
        Color32::from_rgb(18, 16, 22),
        Color32::from_rgb(54, 50, 62),
        Color32::from_rgb(224, 108, 117),
    )
}
