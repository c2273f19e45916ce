//! Logging utilities

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// `default_level` is used as the filter unless `RUST_LOG` is set, in which
/// case the environment wins. Unknown level names fall back to `info`.
pub fn init(default_level: &str) {
    let level = default_level
        .parse::<log::LevelFilter>()
        .unwrap_or(log::LevelFilter::Info);

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    // A second init (e.g. from tests) is harmless
    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
