//! # Application Configuration
//!
//! Window, camera tuning and asset settings for the tabletop scene host.
//! Everything has a default equal to the values the scene was authored
//! with, so a missing or partial config file changes nothing visible.
//!
//! The scene itself (object placements, lights, material presets) is not
//! configurable; those live as constant tables in [`crate::scene`] and
//! [`crate::render`].

use serde::{Serialize, Deserialize};
use std::path::PathBuf;

pub use crate::config::{Config, ConfigError};

/// # Window Configuration
///
/// The window size also fixes the projection aspect ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Client area width in pixels
    pub width: u32,
    /// Client area height in pixels
    pub height: u32,
    /// Window title
    pub title: String,
}

impl WindowConfig {
    /// Width over height
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            title: "Tabletop Still Life".to_string(),
        }
    }
}

/// # Camera Tuning
///
/// Movement and mouse-look constants for the free-look camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Movement speed in world units per second at a speed scale of 1.0
    pub base_move_speed: f32,
    /// Degrees of yaw/pitch per pixel of pointer motion
    pub mouse_sensitivity: f32,
    /// Speed scale change per scroll notch
    pub scroll_step: f32,
    /// Lower bound of the scroll-adjusted speed scale
    pub min_speed_scale: f32,
    /// Upper bound of the scroll-adjusted speed scale
    pub max_speed_scale: f32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            base_move_speed: 6.0,
            mouse_sensitivity: 0.10,
            scroll_step: 0.10,
            min_speed_scale: 0.10,
            max_speed_scale: 5.00,
        }
    }
}

/// # Asset Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory the scene texture files are resolved against
    pub texture_dir: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            texture_dir: PathBuf::from("Textures"),
        }
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration loaded by the host binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Run this many frames without a window, then exit
    pub headless_frames: Option<u32>,
    /// Write the last recorded frame here (RON) after a headless run
    pub frame_dump: Option<PathBuf>,
    // Tables last so the TOML output stays valid
    /// Window settings
    pub window: WindowConfig,
    /// Camera tuning
    pub view: ViewSettings,
    /// Asset locations
    pub assets: AssetConfig,
}

impl AppConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(format!(
                "Window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            ));
        }

        let view = &self.view;
        for (name, value) in [
            ("base_move_speed", view.base_move_speed),
            ("mouse_sensitivity", view.mouse_sensitivity),
            ("scroll_step", view.scroll_step),
            ("min_speed_scale", view.min_speed_scale),
            ("max_speed_scale", view.max_speed_scale),
        ] {
            if !value.is_finite() {
                return Err(format!("view.{name} must be finite, got {value}"));
            }
        }

        if view.min_speed_scale <= 0.0 || view.min_speed_scale > view.max_speed_scale {
            return Err(format!(
                "Speed scale bounds are invalid: [{}, {}]",
                view.min_speed_scale, view.max_speed_scale
            ));
        }

        if view.base_move_speed < 0.0 {
            return Err("Base move speed cannot be negative".to_string());
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            headless_frames: None,
            frame_dump: None,
            window: WindowConfig::default(),
            view: ViewSettings::default(),
            assets: AssetConfig::default(),
        }
    }
}

impl Config for AppConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.window.aspect_ratio() - 1.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_toml_and_ron_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = AppConfig::default();
        config.log_level = "debug".to_string();
        config.view.base_move_speed = 3.5;
        config.headless_frames = Some(12);

        for name in ["app.toml", "app.ron"] {
            let path = dir.path().join(name);
            config.save_to_file(&path).unwrap();
            let loaded = AppConfig::load_from_file(&path).unwrap();
            assert_eq!(loaded, config, "round trip through {name}");
        }
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[window]\nwidth = 640\n").unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.window.width, 640);
        assert_eq!(loaded.window.height, 800);
        assert_eq!(loaded.view, ViewSettings::default());
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.yaml");
        std::fs::write(&path, "log_level: info").unwrap();

        let result = AppConfig::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_inverted_speed_bounds_fail_validation() {
        let mut config = AppConfig::default();
        config.view.min_speed_scale = 6.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_view_values_fail_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nan.toml");

        for line in [
            "max_speed_scale = nan",
            "min_speed_scale = nan",
            "scroll_step = inf",
            "mouse_sensitivity = nan",
            "base_move_speed = inf",
        ] {
            std::fs::write(&path, format!("[view]\n{line}\n")).unwrap();
            let loaded = AppConfig::load_from_file(&path).unwrap();
            assert!(loaded.validate().is_err(), "{line} should be rejected");
        }
    }
}
