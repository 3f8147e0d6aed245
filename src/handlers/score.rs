use glam::Vec2;

use super::{clicked_action, draw_buttons, labeled_button, MenuBackdrop};
use crate::asset::{Asset, AssetLoader};
use crate::constants::LEADERBOARD_SIZE;
use crate::error::AssetError;
use crate::gui::Button;
use crate::render::{Color, FontSize, Surface};
use crate::scores::{Leaderboard, ScoreRecord};
use crate::state::{GameState, StateHandler, StateHandlerContext};

/// Lists the best and the latest infinite runs.
pub struct ScoreHandler {
    backdrop: MenuBackdrop,
    back: [(Button, GameState); 1],
    board: Leaderboard,
}

impl ScoreHandler {
    pub fn new(assets: &mut dyn AssetLoader) -> Result<Self, AssetError> {
        let backdrop = MenuBackdrop::new(assets)?;
        let image = assets.load(Asset::Button)?;

        Ok(Self {
            backdrop,
            back: [(labeled_button(image, 350.0, 375.0, "BACK"), GameState::MainMenu)],
            board: Leaderboard::default(),
        })
    }
}

fn draw_column(surface: &mut dyn Surface, x: f32, title: &str, records: &[ScoreRecord]) {
    surface.draw_text(title, Vec2::new(x, 110.0), FontSize::Small, Color::WHITE);
    for rank in 0..LEADERBOARD_SIZE {
        let line = match records.get(rank) {
            Some(record) => format!("{}. {} ({:.1}s)", rank + 1, record.score, record.time),
            None => format!("{}. -", rank + 1),
        };
        let y = 145.0 + rank as f32 * 40.0;
        surface.draw_text(&line, Vec2::new(x, y), FontSize::Small, Color::WHITE);
    }
}

impl StateHandler for ScoreHandler {
    fn on_enter(&mut self, ctx: &mut StateHandlerContext<'_>) {
        let mode = ctx.storage().live_mode_or_default();
        self.board = ctx.scores().leaderboard(mode.key());
    }

    fn process(&mut self, ctx: &mut StateHandlerContext<'_>) -> GameState {
        let surface = ctx.surface();
        self.backdrop.draw(surface);
        surface.draw_text_centered("SCORES", 20.0, FontSize::Large, Color::WHITE);
        draw_column(surface, 150.0, "TOP", &self.board.top);
        draw_column(surface, 525.0, "RECENT", &self.board.recent);
        draw_buttons(surface, &self.back);

        clicked_action(ctx.events(), &self.back).unwrap_or(ctx.state())
    }
}
