use eframe::egui;
use floatpad::viewport;

use mock_ctx::MockCtx;

#[test]
fn close_requests_a_window_close() {
    let ctx = MockCtx::default();
    viewport::close_window(&ctx);

    let cmds = ctx.commands.lock().unwrap();
    assert_eq!(cmds.len(), 1);
    match cmds[0] {
        egui::ViewportCommand::Close => {}
        _ => panic!("unexpected command"),
    }
}
