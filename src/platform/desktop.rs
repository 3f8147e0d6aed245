//! Desktop platform implementation.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::error::PlatformError;

/// Sleeps for `duration`, spinning for precision only while the window has focus.
pub fn sleep(duration: Duration, focused: bool) {
    if focused {
        spin_sleep::sleep(duration);
    } else {
        std::thread::sleep(duration);
    }
}

/// A fast random source seeded from the thread-local generator.
pub fn rng() -> SmallRng {
    SmallRng::from_rng(&mut rand::rng())
}

/// The per-user directory persistent game data is kept in.
///
/// `%APPDATA%\arg` on Windows, `~/Library/Application Support/arg` on macOS and
/// `$XDG_DATA_HOME/arg` (or `~/.local/share/arg`) elsewhere.
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    let base = if cfg!(target_os = "windows") {
        env::var_os("APPDATA").map(PathBuf::from).ok_or(PlatformError::NoHomeDirectory)?
    } else if cfg!(target_os = "macos") {
        home_dir()?.join("Library").join("Application Support")
    } else if cfg!(unix) {
        match env::var_os("XDG_DATA_HOME").filter(|dir| !dir.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => home_dir()?.join(".local").join("share"),
        }
    } else {
        return Err(PlatformError::UnknownPlatform(env::consts::OS));
    };

    Ok(base.join(env!("CARGO_PKG_NAME")))
}

fn home_dir() -> Result<PathBuf, PlatformError> {
    env::var_os("HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .ok_or(PlatformError::NoHomeDirectory)
}
