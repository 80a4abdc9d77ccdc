use floatpad::app::PadApp;
use floatpad::config;
use floatpad::logging;

use eframe::egui;

fn main() -> anyhow::Result<()> {
    logging::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config::WINDOW_SIZE.0, config::WINDOW_SIZE.1])
            .with_decorations(false)
            .with_transparent(true)
            .with_resizable(false)
            .with_always_on_top(),
        ..Default::default()
    };

    eframe::run_native(
        "floatpad",
        native_options,
        Box::new(|_cc| Box::new(PadApp::new())),
    )
    .map_err(|err| anyhow::anyhow!("ui event loop failed: {err}"))?;

    Ok(())
}
