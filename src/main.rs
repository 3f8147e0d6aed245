#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use anyhow::{Context, Result};
use tracing::{debug, info};

use arg::app::App;
use arg::config::load_config;
use arg::logging::setup_logging;

/// The main entry point of the application.
///
/// Sets up logging, reads the configuration, opens the window and runs the state
/// machine until it reaches the quit state.
fn main() -> Result<()> {
    setup_logging();

    let config = load_config().context("Could not load configuration")?;
    debug!(?config, "Configuration loaded");

    let mut app = App::new(&config).context("Could not create app")?;

    info!(frame_time = ?config.frame_time(), "Starting game loop");
    while app.run() {}

    app.shutdown();
    info!("Goodbye");
    Ok(())
}
