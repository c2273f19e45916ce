//! Tabletop still-life host
//!
//! Usage: `tabletop [config.toml|config.ron]`
//!
//! Without an argument `tabletop.toml` in the working directory is used if
//! present, otherwise the built-in defaults. Setting `headless_frames` runs
//! without a window.

mod app;
mod window;

use std::path::Path;

use tabletop_engine::core::{AppConfig, Config};
use tabletop_engine::foundation::logging;

use app::AppError;

/// Config file picked up when no path is given
const DEFAULT_CONFIG: &str = "tabletop.toml";

fn load_config() -> Result<AppConfig, AppError> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load_from_file(&path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => AppConfig::load_from_file(DEFAULT_CONFIG)?,
        None => AppConfig::default(),
    };
    config.validate().map_err(AppError::InvalidConfig)?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    logging::init(&config.log_level);

    log::info!("Starting tabletop still life");

    let result = match config.headless_frames {
        Some(frames) => app::run_headless(&config, frames),
        None => app::run_windowed(&config),
    };

    match result {
        Ok(()) => {
            log::info!("Tabletop exited cleanly");
            Ok(())
        }
        Err(e) => {
            log::error!("Tabletop failed: {}", e);
            Err(e.into())
        }
    }
}
