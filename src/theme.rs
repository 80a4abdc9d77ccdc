use eframe::egui::{self, Color32, FontFamily, FontId};

/// Fixed palette: translucent black shell, white foreground, red close
/// button, blue clear button.
pub const SHELL_FILL: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 180);
pub const TEXT: Color32 = Color32::WHITE;
pub const CLOSE_FILL: Color32 = Color32::RED;
pub const CLEAR_FILL: Color32 = Color32::from_rgb(0, 150, 255);

/// Scale a palette color by the current window opacity.
///
/// Neither egui nor winit expose a whole-window alpha, so the window surface
/// stays fully transparent and everything painted on it fades instead.
pub fn faded(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity)
}

/// The note font: fixed proportional family, point size driven by the slider.
pub fn note_font(size: u8) -> FontId {
    FontId::new(f32::from(size), FontFamily::Proportional)
}

/// Widget visuals faded to the current opacity.
pub fn visuals(opacity: f32) -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = faded(SHELL_FILL, opacity);
    visuals.window_fill = faded(SHELL_FILL, opacity);
    visuals.override_text_color = Some(faded(TEXT, opacity));

    visuals.widgets.noninteractive.bg_fill = faded(visuals.widgets.noninteractive.bg_fill, opacity);
    visuals.widgets.inactive.bg_fill = faded(visuals.widgets.inactive.bg_fill, opacity);
    visuals.widgets.hovered.bg_fill = faded(visuals.widgets.hovered.bg_fill, opacity);
    visuals.widgets.active.bg_fill = faded(visuals.widgets.active.bg_fill, opacity);
    visuals.selection.bg_fill = faded(visuals.selection.bg_fill, opacity);

    visuals
}
