//! Layered configuration: built-in defaults, optional TOML file, environment
//!
//! # Environment Variables
//!
//! Nested keys use `__`, e.g.
//!
//! ```text
//! QUEUE_VISUALIZER__LAYOUT__GAP=40 \
//! QUEUE_VISUALIZER__CLEAR_INPUT_ON_ENQUEUE=false \
//!     ./queue-visualizer
//! ```

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::debug;

use queue_visualizer_core::domain::Layout;
use queue_visualizer_core::{AppError, Result};

const ENV_PREFIX: &str = "QUEUE_VISUALIZER";
const CONFIG_FILE_NAME: &str = "visualizer.toml";

/// Main window settings (the window is never resizable)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Queue Visualizer".to_string(),
            width: 800.0,
            height: 500.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub window: WindowConfig,
    pub layout: Layout,
    /// Empty the text field after a successful enqueue
    pub clear_input_on_enqueue: bool,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            layout: Layout::default(),
            clear_input_on_enqueue: true,
        }
    }
}

/// `visualizer.toml` in the platform config directory, if one exists
pub fn config_file_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "queue-visualizer")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Load configuration from the default file location and the process environment
pub fn load() -> Result<VisualizerConfig> {
    let path = config_file_path();
    debug!(path = ?path, "Loading configuration");
    load_from(path.as_deref(), environment())
}

/// Load configuration from an optional file plus the given environment source
pub fn load_from(file: Option<&Path>, env: Environment) -> Result<VisualizerConfig> {
    let mut builder = Config::builder();
    if let Some(path) = file {
        builder = builder.add_source(File::from(path).required(false));
    }
    build(builder.add_source(env))
}

fn build(builder: ConfigBuilder<DefaultState>) -> Result<VisualizerConfig> {
    let config: VisualizerConfig = builder
        .build()
        .and_then(|c| c.try_deserialize())
        .map_err(|e| AppError::Config(e.to_string()))?;

    config.layout.validate()?;
    if !(config.window.width > 0.0 && config.window.height > 0.0) {
        return Err(AppError::Config(format!(
            "window must have a positive size, got {}x{}",
            config.window.width, config.window.height
        )));
    }

    Ok(config)
}
