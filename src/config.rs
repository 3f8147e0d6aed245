//! Runtime configuration, read from `ARG_`-prefixed environment variables.
//!
//! | Variable         | Default                             |
//! |------------------|-------------------------------------|
//! | `ARG_ASSETS_DIR` | `assets`                            |
//! | `ARG_DATA_FILE`  | `arg.json` in the platform data dir |
//! | `ARG_FPS`        | `60`                                |
//! | `ARG_MUTED`      | `false`                             |

use std::path::PathBuf;
use std::time::Duration;

use figment::providers::Env;
use figment::Figment;
use serde::Deserialize;

use crate::asset::ASSETS_DIR;
use crate::constants::{LOOP_TIME, SCORE_FILE_NAME};
use crate::error::{ConfigError, PlatformError};
use crate::platform;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Directory all assets are loaded from.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
    /// The score store; resolved against the platform data directory when unset.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// Target frames per second. Zero means the default.
    #[serde(default = "default_fps")]
    pub fps: u32,
    #[serde(default)]
    pub muted: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            data_file: None,
            fps: default_fps(),
            muted: false,
        }
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(ASSETS_DIR)
}

fn default_fps() -> u32 {
    60
}

impl Config {
    /// The target duration of one frame.
    pub fn frame_time(&self) -> Duration {
        match self.fps {
            0 | 60 => LOOP_TIME,
            fps => Duration::from_secs_f64(1.0 / fps as f64),
        }
    }

    /// The score store path, falling back to the platform data directory.
    pub fn score_file(&self) -> Result<PathBuf, PlatformError> {
        match &self.data_file {
            Some(path) => Ok(path.clone()),
            None => Ok(platform::data_dir()?.join(SCORE_FILE_NAME)),
        }
    }
}

/// Loads the configuration from the environment.
pub fn load_config() -> Result<Config, ConfigError> {
    Ok(Figment::new().merge(Env::prefixed("ARG_")).extract()?)
}
