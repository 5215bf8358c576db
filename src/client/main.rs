//! Noteboard desktop client.
//!
//! Reads `NOTEBOARD_API_URL` for the server (default
//! `http://127.0.0.1:3000`) and `RUST_LOG` for log filtering.

use eframe::egui;
use noteboard::client::app::NoteboardApp;
use noteboard::client::ClientConfig;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Noteboard",
        options,
        Box::new(|cc| {
            let app = NoteboardApp::new(&cc.egui_ctx, ClientConfig::new())?;
            Ok(Box::new(app))
        }),
    )
}
