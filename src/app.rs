use crate::config::{
    DEFAULT_FONT_SIZE, DEFAULT_OPACITY_PCT, DEFAULT_TEXT, DRAG_STRIP_HEIGHT, FONT_RANGE,
    OPACITY_RANGE,
};
use crate::drag::DragState;
use crate::drop;
use crate::theme;
use crate::viewport;
use eframe::egui;

/// Map a slider percentage to the window opacity.
pub fn opacity_from_pct(pct: u8) -> f32 {
    let lo = f32::from(*OPACITY_RANGE.start()) / 100.0;
    let hi = f32::from(*OPACITY_RANGE.end()) / 100.0;
    (f32::from(pct) / 100.0).clamp(lo, hi)
}

/// The floating note window: one text buffer plus the opacity, font and drag
/// state mutated by the widget callbacks.
pub struct PadApp {
    pub text: String,
    pub opacity_pct: u8,
    pub font_size: u8,
    pub drag: DragState,
}

impl Default for PadApp {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_owned(),
            opacity_pct: DEFAULT_OPACITY_PCT,
            font_size: DEFAULT_FONT_SIZE,
            drag: DragState::default(),
        }
    }
}

impl PadApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(&self) -> f32 {
        opacity_from_pct(self.opacity_pct)
    }

    /// Reset the text buffer to the placeholder.
    pub fn clear_text(&mut self) {
        self.text = DEFAULT_TEXT.to_owned();
    }

    /// Fold every payload of one drop event into the buffer, in delivery
    /// order. A payload that cannot be read becomes a visible error line
    /// instead of failing the drop.
    pub fn handle_dropped_files(&mut self, files: &[egui::DroppedFile]) {
        for file in files {
            match drop::payload_text(file) {
                Ok(payload) => {
                    tracing::debug!(len = payload.len(), "merging dropped text");
                    drop::merge_text(&mut self.text, &payload);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to read dropped payload");
                    drop::merge_error(&mut self.text);
                }
            }
        }
    }

    fn title_strip(&mut self, ctx: &egui::Context, opacity: f32) {
        egui::TopBottomPanel::top("title_strip")
            .exact_height(DRAG_STRIP_HEIGHT)
            .frame(
                egui::Frame::none()
                    .fill(theme::faded(theme::SHELL_FILL, opacity))
                    .inner_margin(egui::Margin::symmetric(4.0, 2.0)),
            )
            .show(ctx, |ui| {
                let strip = ui.max_rect();

                // Register the drag region first; the buttons added afterwards
                // sit on top of it and keep their clicks.
                let response = ui.interact(strip, ui.id().with("window_drag"), egui::Sense::drag());
                if response.drag_started() {
                    if let Some(press) = response.interact_pointer_pos() {
                        self.drag.begin(press);
                    }
                }
                if response.dragged() {
                    let origin = ctx.input(|i| i.viewport().outer_rect.map(|r| r.min));
                    let pointer = ctx.input(|i| i.pointer.interact_pos());
                    if let (Some(origin), Some(pointer)) = (origin, pointer) {
                        if let Some(target) = self.drag.target(origin, pointer) {
                            viewport::move_window(ctx, target);
                        }
                    }
                }
                if response.drag_released() {
                    self.drag.end();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let close =
                        egui::Button::new("X").fill(theme::faded(theme::CLOSE_FILL, opacity));
                    if ui.add(close).clicked() {
                        tracing::debug!("close requested");
                        viewport::close_window(ctx);
                    }

                    let clear = egui::Button::new("Limpiar")
                        .fill(theme::faded(theme::CLEAR_FILL, opacity));
                    if ui.add(clear).clicked() {
                        self.clear_text();
                    }
                });
            });
    }

    fn slider_panel(&mut self, ctx: &egui::Context, opacity: f32) {
        egui::TopBottomPanel::bottom("sliders")
            .frame(
                egui::Frame::none()
                    .fill(theme::faded(theme::SHELL_FILL, opacity))
                    .inner_margin(egui::Margin::same(6.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Opacidad:");
                    ui.add(egui::Slider::new(&mut self.opacity_pct, OPACITY_RANGE));
                });
                ui.horizontal(|ui| {
                    ui.label("Fuente:");
                    ui.add(egui::Slider::new(&mut self.font_size, FONT_RANGE));
                });
            });
    }

    fn note_area(&mut self, ctx: &egui::Context, opacity: f32, hovering_drop: bool) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(theme::faded(theme::SHELL_FILL, opacity))
                    .inner_margin(egui::Margin::same(10.0)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let editor = egui::TextEdit::multiline(&mut self.text)
                            .font(theme::note_font(self.font_size))
                            .frame(false)
                            .desired_width(f32::INFINITY);
                        ui.add_sized(ui.available_size(), editor);
                    });

                if hovering_drop {
                    ui.painter().rect_stroke(
                        ui.max_rect(),
                        4.0,
                        egui::Stroke::new(2.0, theme::faded(theme::CLEAR_FILL, opacity)),
                    );
                }
            });
    }
}

impl eframe::App for PadApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // Keep the surface itself transparent; the panels paint the shell.
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if !dropped.is_empty() {
            self.handle_dropped_files(&dropped);
        }
        let hovering_drop = ctx.input(|i| !i.raw.hovered_files.is_empty());

        let opacity = self.opacity();
        ctx.set_visuals(theme::visuals(opacity));

        self.title_strip(ctx, opacity);
        self.slider_panel(ctx, opacity);
        self.note_area(ctx, opacity, hovering_drop);
    }
}
