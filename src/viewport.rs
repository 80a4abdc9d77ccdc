use eframe::egui;

/// Abstraction over the subset of [`egui::Context`] used to drive the native
/// window. Tests implement it with a mock so the emitted commands can be
/// inspected.
pub trait ViewportCtx {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand);
    fn request_repaint(&self);
}

impl ViewportCtx for egui::Context {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand) {
        egui::Context::send_viewport_cmd(self, cmd);
    }

    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }
}

/// Move the window so its outer origin lands on `pos`. No bounds clamping,
/// the window may be dragged off-screen.
pub fn move_window(ctx: &impl ViewportCtx, pos: egui::Pos2) {
    ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(pos));
    ctx.request_repaint();
}

/// Ask the windowing system to close the window. eframe stops the event loop
/// once the window is gone and the process exits from `main`.
pub fn close_window(ctx: &impl ViewportCtx) {
    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
}
