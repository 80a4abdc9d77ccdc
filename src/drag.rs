use eframe::egui;

/// Tracks the pointer position recorded when a drag over the top strip
/// starts. Positions are window-relative, like all egui pointer coordinates.
#[derive(Debug, Default, Clone, Copy)]
pub struct DragState {
    press: Option<egui::Pos2>,
}

impl DragState {
    pub fn begin(&mut self, pointer: egui::Pos2) {
        self.press = Some(pointer);
    }

    pub fn end(&mut self) {
        self.press = None;
    }

    pub fn active(&self) -> bool {
        self.press.is_some()
    }

    /// New outer origin for the window given its live origin and the current
    /// pointer position. The origin must be re-read from the viewport on
    /// every move event, not cached at press time.
    pub fn target(&self, origin: egui::Pos2, pointer: egui::Pos2) -> Option<egui::Pos2> {
        self.press.map(|press| origin + (pointer - press))
    }
}
