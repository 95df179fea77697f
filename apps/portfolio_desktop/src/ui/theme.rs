//! Dark portfolio palette and the egui style derived from it.

use std::collections::BTreeMap;

use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    // Backgrounds:
    pub page_background: egui::Color32,
    pub nav_background: egui::Color32,
    pub card_background: egui::Color32,
    pub card_stroke: egui::Color32,
    pub chip_background: egui::Color32,

    // Text:
    pub title_text: egui::Color32,
    pub body_text: egui::Color32,
    pub muted_text: egui::Color32,

    // Accents:
    pub accent: egui::Color32,
    pub accent_text: egui::Color32,
    pub highlight: egui::Color32,
    pub success: egui::Color32,
    pub error: egui::Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            page_background: egui::Color32::from_rgb(17, 24, 39),
            nav_background: egui::Color32::from_rgb(17, 24, 39),
            card_background: egui::Color32::from_rgb(31, 41, 55),
            card_stroke: egui::Color32::from_rgb(55, 65, 81),
            chip_background: egui::Color32::from_rgb(30, 58, 138),

            title_text: egui::Color32::from_rgb(243, 244, 246),
            body_text: egui::Color32::from_rgb(209, 213, 219),
            muted_text: egui::Color32::from_rgb(156, 163, 175),

            accent: egui::Color32::from_rgb(37, 99, 235),
            accent_text: egui::Color32::from_rgb(96, 165, 250),
            highlight: egui::Color32::from_rgb(192, 132, 252),
            success: egui::Color32::from_rgb(74, 222, 128),
            error: egui::Color32::from_rgb(248, 113, 113),
        }
    }
}

pub fn visuals_for_palette(palette: &Palette) -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(palette.body_text);
    visuals.window_fill = palette.card_background;
    visuals.panel_fill = palette.page_background;
    visuals.extreme_bg_color = palette.nav_background;
    visuals.faint_bg_color = palette.card_background;
    visuals.hyperlink_color = palette.accent_text;
    visuals.selection.bg_fill = palette.accent;
    visuals.window_corner_radius = egui::CornerRadius::same(10);
    visuals.window_stroke = egui::Stroke::new(1.0, palette.card_stroke);

    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, palette.card_stroke);
    visuals.widgets.inactive.bg_fill = palette.card_background;
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, palette.card_stroke);
    visuals.widgets.hovered.bg_fill = palette.accent.gamma_multiply(0.85);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, palette.accent_text);
    visuals.widgets.active.bg_fill = palette.accent;
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.2, palette.accent_text);
    visuals
}

pub fn scaled_text_styles(text_scale: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for font in styles.values_mut() {
        font.size *= text_scale;
    }
    styles
}

pub fn apply(ctx: &egui::Context, palette: &Palette) {
    let mut style = (*ctx.style()).clone();
    style.visuals = visuals_for_palette(palette);
    style.text_styles = scaled_text_styles(1.1);
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.interact_size = egui::vec2(40.0, 30.0);
    ctx.set_style(style);
}
