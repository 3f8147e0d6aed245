use tracing::{debug, info, warn};

use super::{clicked_action, draw_buttons, labeled_button, MenuBackdrop};
use crate::asset::{Asset, AssetLoader};
use crate::error::AssetError;
use crate::gui::Button;
use crate::render::{Color, FontSize};
use crate::scores::ScoreRecord;
use crate::state::{GameState, RunOutcome, StateHandler, StateHandlerContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EndAction {
    Reset,
    Back,
    Quit,
}

/// What the end screen shows, captured once on entry.
#[derive(Debug, Clone, PartialEq)]
struct Summary {
    message: &'static str,
    score: u32,
    time: f32,
    best: Option<u32>,
}

/// The result screen after a run: play again, back to the menu, or quit.
///
/// Infinite runs are recorded in the score store when this screen is entered.
pub struct LevelEndHandler {
    backdrop: MenuBackdrop,
    buttons: [(Button, EndAction); 3],
    summary: Option<Summary>,
}

impl LevelEndHandler {
    pub fn new(assets: &mut dyn AssetLoader) -> Result<Self, AssetError> {
        let backdrop = MenuBackdrop::new(assets)?;
        let image = assets.load(Asset::Button)?;

        Ok(Self {
            backdrop,
            buttons: [
                (labeled_button(image, 125.0, 300.0, "RESET"), EndAction::Reset),
                (labeled_button(image, 350.0, 300.0, "BACK"), EndAction::Back),
                (labeled_button(image, 575.0, 300.0, "QUIT"), EndAction::Quit),
            ],
            summary: None,
        })
    }
}

impl StateHandler for LevelEndHandler {
    fn on_enter(&mut self, ctx: &mut StateHandlerContext<'_>) {
        let storage = ctx.storage();
        let outcome = storage.end_game.unwrap_or(RunOutcome::Lost);
        let score = storage.last_score.unwrap_or(0);
        let time = storage.last_play_time.unwrap_or(0.0);
        let difficulty = storage.difficulty_or_default();
        let mode = storage.live_mode_or_default();

        info!(?outcome, score, time, %difficulty, "Run ended");

        if difficulty.is_infinite() {
            if let Err(e) = ctx.scores().record(mode.key(), ScoreRecord { score, time }) {
                warn!("Could not save the score: {e}");
            }
        }

        let best = ctx.scores().leaderboard(mode.key()).best().map(|record| record.score);
        self.summary = Some(Summary {
            message: outcome.message(),
            score,
            time,
            best,
        });
    }

    fn process(&mut self, ctx: &mut StateHandlerContext<'_>) -> GameState {
        let surface = ctx.surface();
        self.backdrop.draw(surface);
        surface.draw_text_centered("GAME OVER", 20.0, FontSize::Large, Color::WHITE);

        if let Some(summary) = &self.summary {
            surface.draw_text_centered(summary.message, 110.0, FontSize::Medium, Color::WHITE);
            let details = match summary.best {
                Some(best) => format!("SCORE: {}   TIME: {:.1}s   BEST: {}", summary.score, summary.time, best),
                None => format!("SCORE: {}   TIME: {:.1}s", summary.score, summary.time),
            };
            surface.draw_text_centered(&details, 180.0, FontSize::Small, Color::WHITE);
        }

        draw_buttons(surface, &self.buttons);

        match clicked_action(ctx.events(), &self.buttons) {
            Some(EndAction::Reset) => GameState::LevelPlay,
            Some(EndAction::Back) => GameState::MainMenu,
            Some(EndAction::Quit) => {
                debug!("Stopping music before quitting");
                ctx.audio().stop();
                GameState::GameQuit
            }
            None => ctx.state(),
        }
    }

    fn on_exit(&mut self, ctx: &mut StateHandlerContext<'_>) {
        self.summary = None;
        ctx.reset_gui();
    }
}
