//! Desktop playground: an egui code editor wired to a host that reacts to
//! its text and typecheck requests.
//!
//! Exposes a `run` helper so the workspace root can launch the window
//! without duplicating initialization logic.

mod app;
/// The embeddable editor component and its host protocol.
pub mod editor;

use app::PlaygroundApp;
use eframe::egui;
use playground_core::constants::DEFAULT_LOG_FILTER;
use playground_core::Config;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A subscriber installed by an embedding process takes precedence.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}

/// Start the playground window with tracing enabled.
///
/// # Returns
/// The result of `eframe::run_native`.
///
/// # Errors
/// Propagates `eframe` initialization/runtime errors, including app creation
/// failures for invalid configuration or an unreadable document.
pub fn run() -> eframe::Result<()> {
    init_tracing();

    let config = Config::from_env().map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;
    let app =
        PlaygroundApp::new(&config).map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title("Playground"),
        ..Default::default()
    };

    eframe::run_native("Playground", options, Box::new(|_cc| Ok(Box::new(app))))
}
