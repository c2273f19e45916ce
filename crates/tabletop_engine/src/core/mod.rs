//! # Core Module
//!
//! Shared configuration for the host and the scene subsystems.

pub mod config;

pub use config::{AppConfig, AssetConfig, Config, ConfigError, ViewSettings, WindowConfig};
