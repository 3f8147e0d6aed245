use strum_macros::{Display, IntoStaticStr};

use crate::arithmetic::Difficulty;

/// The game modes offered on the mode select screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum GameMode {
    Math,
    Flashcard,
}

impl GameMode {
    /// The key this mode's leaderboard is stored under.
    pub fn key(self) -> &'static str {
        self.into()
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A fixed-tier run hit an obstacle or answered wrong.
    Lost,
    /// A fixed-tier run covered the whole level.
    Won,
    /// An infinite run ended, by collision or by running out of time.
    Finished,
}

impl RunOutcome {
    pub fn message(self) -> &'static str {
        match self {
            RunOutcome::Lost => "You Lose.",
            RunOutcome::Won => "You Win!",
            RunOutcome::Finished => "Nice Run!",
        }
    }
}

/// Data handed from one handler to another.
///
/// Nothing here is cleared implicitly; every value stays until a handler overwrites it.
///
/// | Field            | Written by                     | Read by              |
/// |------------------|--------------------------------|----------------------|
/// | `live_mode`      | GameMode                       | LevelEnd, Score      |
/// | `difficulty`     | Difficulty                     | LevelPlay, LevelEnd  |
/// | `last_score`     | LevelPlay (`on_exit` to end)   | LevelEnd             |
/// | `last_play_time` | LevelPlay (`on_exit` to end)   | LevelEnd             |
/// | `end_game`       | LevelPlay (`on_exit` to end)   | LevelEnd             |
/// | `reset`          | LevelPause (BACK)              | LevelPlay (`on_enter`) |
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Storage {
    pub live_mode: Option<GameMode>,
    pub difficulty: Option<Difficulty>,
    /// Correct answers plus cleared obstacles.
    pub last_score: Option<u32>,
    /// Seconds.
    pub last_play_time: Option<f32>,
    pub end_game: Option<RunOutcome>,
    /// Set when a paused session was abandoned and must not be resumed.
    pub reset: bool,
}

impl Storage {
    /// The selected difficulty; easy if none was chosen (e.g. a restart from an old save).
    pub fn difficulty_or_default(&self) -> Difficulty {
        self.difficulty.unwrap_or(Difficulty::Easy)
    }

    pub fn live_mode_or_default(&self) -> GameMode {
        self.live_mode.unwrap_or(GameMode::Math)
    }
}
