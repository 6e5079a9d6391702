//! Queue Visualizer - Main Entry Point
//! Composition root: logging, configuration, window

mod gui;
mod logging;
mod settings;

use anyhow::Result;
use eframe::egui;
use tracing::info;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // 1. Initialize logging (guard flushes buffered lines on exit)
    let _log_guard = logging::init_logging()?;

    info!(
        "Queue Visualizer v{} starting (core v{})...",
        VERSION,
        queue_visualizer_core::VERSION
    );

    // 2. Load configuration
    let config = settings::load().map_err(|e| anyhow::anyhow!("Configuration load failed: {}", e))?;
    info!(
        title = %config.window.title,
        canvas_width = config.layout.canvas_width,
        canvas_height = config.layout.canvas_height,
        "Configuration loaded"
    );

    // 3. Build the window and enter the event loop
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window.title.clone())
            .with_inner_size([config.window.width, config.window.height])
            .with_resizable(false),
        ..Default::default()
    };

    let app = gui::QueueApp::new(&config);
    eframe::run_native(
        &config.window.title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Box::new(app)
        }),
    )
    .map_err(|e| anyhow::anyhow!("Event loop failed: {}", e))?;

    info!("Window closed. Exiting.");

    Ok(())
}
