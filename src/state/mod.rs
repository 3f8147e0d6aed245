//! The game state machine.
//!
//! - [`GameState`]: every state the machine can occupy. The driver uses it to pick
//!   the handler to invoke, and handlers return it to request transitions.
//! - [`StateHandlerContext`]: everything a handler may touch during one frame.
//! - [`StateHandler`]: the enter/process/exit lifecycle each screen implements.
//! - [`Driver`]: owns the handlers and runs one frame at a time.

use strum_macros::{Display, EnumCount, EnumIter};

use crate::audio::{AudioPlayer, NullAudio};
use crate::events::InputEvent;
use crate::gui::GuiManager;
use crate::render::Surface;
use crate::scores::ScoreStore;

mod driver;
mod storage;

pub use self::driver::Driver;
pub use self::storage::{GameMode, RunOutcome, Storage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    /// The program is ending and should exit as quickly as possible.
    GameQuit,
    /// The main menu is shown, waiting for the user to make a choice.
    MainMenu,
    /// The mode select screen (math or flashcards).
    GameMode,
    /// The difficulty select screen of the math mode.
    Difficulty,
    /// A level is being played.
    LevelPlay,
    /// A level is paused, waiting to be resumed or abandoned.
    LevelPause,
    /// A level has ended, by collision, a wrong answer, time or distance.
    LevelEnd,
    /// The leaderboards are shown.
    Score,
}

/// Long-lived collaborators the driver lends to handlers.
pub struct Services {
    pub audio: Box<dyn AudioPlayer>,
    pub scores: ScoreStore,
}

impl Services {
    pub fn new(audio: Box<dyn AudioPlayer>, scores: ScoreStore) -> Self {
        Self { audio, scores }
    }

    /// Silent audio and an in-memory score store.
    pub fn headless() -> Self {
        Self::new(Box::new(NullAudio::default()), ScoreStore::in_memory())
    }
}

/// Everything a handler can see and touch during one frame.
///
/// A new context is built for every frame. Only `storage` (and the services) outlive
/// it; the surface is lent for this frame alone.
pub struct StateHandlerContext<'a> {
    state: GameState,
    events: &'a [InputEvent],
    surface: &'a mut dyn Surface,
    gui: Option<&'a mut GuiManager>,
    delta: f32,
    storage: &'a mut Storage,
    services: &'a mut Services,
}

impl<'a> StateHandlerContext<'a> {
    pub fn new(
        state: GameState,
        events: &'a [InputEvent],
        surface: &'a mut dyn Surface,
        gui: Option<&'a mut GuiManager>,
        delta: f32,
        storage: &'a mut Storage,
        services: &'a mut Services,
    ) -> Self {
        Self {
            state,
            events,
            surface,
            gui,
            delta,
            storage,
            services,
        }
    }

    /// The state being processed.
    ///
    /// During `on_exit` this is the state being transitioned *to*, so the exiting
    /// handler can tell a pause from the end of a run.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Input events since the previous frame, each delivered exactly once.
    pub fn events(&self) -> &'a [InputEvent] {
        self.events
    }

    pub fn surface(&mut self) -> &mut dyn Surface {
        &mut *self.surface
    }

    pub fn gui(&mut self) -> Option<&mut GuiManager> {
        self.gui.as_deref_mut()
    }

    /// Seconds elapsed since the previous frame.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub fn storage(&mut self) -> &mut Storage {
        self.storage
    }

    pub fn audio(&mut self) -> &mut dyn AudioPlayer {
        self.services.audio.as_mut()
    }

    pub fn scores(&mut self) -> &mut ScoreStore {
        &mut self.services.scores
    }

    /// Drops every widget registered with the GUI. This is the default `on_exit`.
    pub fn reset_gui(&mut self) {
        if let Some(gui) = self.gui() {
            gui.clear_and_reset();
        }
    }
}

/// The lifecycle of a single screen.
///
/// For every contiguous stay in a state the driver calls `on_enter` once, then
/// `process` one or more times, then `on_exit` once.
pub trait StateHandler {
    /// Called before the first `process` after the state is entered.
    fn on_enter(&mut self, _ctx: &mut StateHandlerContext<'_>) {}

    /// Called every frame. Returns `ctx.state()` to stay, anything else to transition.
    fn process(&mut self, ctx: &mut StateHandlerContext<'_>) -> GameState;

    /// Called once the state is being left. Overrides should still call
    /// [`StateHandlerContext::reset_gui`] unless they mean to keep their widgets.
    fn on_exit(&mut self, ctx: &mut StateHandlerContext<'_>) {
        ctx.reset_gui();
    }
}
