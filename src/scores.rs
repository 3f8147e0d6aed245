//! Persistent leaderboards.
//!
//! The store is a single JSON object keyed by game mode, loaded fully into memory
//! when opened and written back synchronously on every update:
//!
//! ```json
//! { "math": { "top": [{ "score": 12, "time": 48.5 }], "recent": [...] } }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::LEADERBOARD_SIZE;
use crate::error::StoreError;

/// One finished run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u32,
    /// Elapsed play time, in seconds.
    pub time: f32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    /// Best runs, highest score first.
    #[serde(default)]
    pub top: Vec<ScoreRecord>,
    /// Latest runs, newest first.
    #[serde(default)]
    pub recent: Vec<ScoreRecord>,
}

impl Leaderboard {
    /// Records a run in both lists, keeping at most [`LEADERBOARD_SIZE`] entries in each.
    ///
    /// Ties in `top` keep their insertion order, so an older run outranks a newer one
    /// with the same score.
    pub fn insert(&mut self, record: ScoreRecord) {
        self.recent.insert(0, record);
        self.recent.truncate(LEADERBOARD_SIZE);

        self.top.push(record);
        self.top.sort_by(|a, b| b.score.cmp(&a.score));
        self.top.truncate(LEADERBOARD_SIZE);
    }

    pub fn best(&self) -> Option<ScoreRecord> {
        self.top.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.recent.is_empty()
    }
}

/// Leaderboards for every game mode, optionally backed by a file.
#[derive(Debug, Default)]
pub struct ScoreStore {
    path: Option<PathBuf>,
    boards: BTreeMap<String, Leaderboard>,
}

impl ScoreStore {
    /// A store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Opens the store at `path`, creating it (as `{}`) if it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        debug!(path = %path.display(), "Opening score store");

        let boards = if path.exists() {
            let json = fs::read_to_string(&path)?;
            let boards: BTreeMap<String, Leaderboard> = serde_json::from_str(&json)?;
            debug!("Loaded {} mode(s) from score store", boards.len());
            boards
        } else {
            debug!("Creating new score store");
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, "{}")?;
            BTreeMap::new()
        };

        Ok(Self {
            path: Some(path),
            boards,
        })
    }

    /// Like [`ScoreStore::open`], but falls back to an in-memory store if the file
    /// cannot be read or created. Scores are then lost on exit.
    pub fn open_or_in_memory(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => store,
            Err(e) => {
                warn!(path = %path.display(), "Could not open score store, scores will not be saved: {e}");
                Self::in_memory()
            }
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// A snapshot of the leaderboard for `mode`; empty if the mode has no runs yet.
    pub fn leaderboard(&self, mode: &str) -> Leaderboard {
        self.boards.get(mode).cloned().unwrap_or_default()
    }

    /// Records a run for `mode` and flushes the store.
    ///
    /// The in-memory update happens even if the flush fails.
    pub fn record(&mut self, mode: &str, record: ScoreRecord) -> Result<(), StoreError> {
        self.boards.entry(mode.to_string()).or_default().insert(record);
        debug!(mode, score = record.score, time = record.time, "Recorded score");
        self.flush()
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(path) = &self.path {
            let json = serde_json::to_string(&self.boards)?;
            fs::write(path, json)?;
        }
        Ok(())
    }
}
