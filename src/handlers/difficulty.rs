use glam::Vec2;
use tracing::debug;

use super::{clicked_action, draw_buttons, labeled_button, MenuBackdrop};
use crate::arithmetic::Difficulty;
use crate::asset::{Asset, AssetLoader};
use crate::constants::BUTTON_SIZE;
use crate::error::AssetError;
use crate::geometry::Rect;
use crate::gui::Button;
use crate::render::{Color, FontSize, ImageHandle};
use crate::state::{GameMode, GameState, StateHandler, StateHandlerContext};

/// Picks the tier of the next math run.
pub struct DifficultyHandler {
    backdrop: MenuBackdrop,
    infinity: ImageHandle,
    buttons: [(Button, Difficulty); 4],
}

impl DifficultyHandler {
    pub fn new(assets: &mut dyn AssetLoader) -> Result<Self, AssetError> {
        let backdrop = MenuBackdrop::new(assets)?;
        let image = assets.load(Asset::Button)?;
        let infinity = assets.load(Asset::Infinity)?;

        Ok(Self {
            backdrop,
            infinity,
            buttons: [
                (labeled_button(image, 125.0, 300.0, "EASY"), Difficulty::Easy),
                (labeled_button(image, 350.0, 300.0, "MEDIUM"), Difficulty::Medium),
                (labeled_button(image, 575.0, 300.0, "HARD"), Difficulty::Hard),
                (Button::new(Vec2::new(350.0, 175.0), BUTTON_SIZE, image), Difficulty::Infinite),
            ],
        })
    }
}

impl StateHandler for DifficultyHandler {
    fn process(&mut self, ctx: &mut StateHandlerContext<'_>) -> GameState {
        let surface = ctx.surface();
        self.backdrop.draw(surface);
        surface.draw_text_centered("DIFFICULTY", 50.0, FontSize::Large, Color::WHITE);
        draw_buttons(surface, &self.buttons);
        surface.blit(&self.infinity, Rect::from_pos_size(Vec2::new(400.0, 200.0), Vec2::new(100.0, 50.0)));

        let Some(difficulty) = clicked_action(ctx.events(), &self.buttons) else {
            return ctx.state();
        };

        debug!(%difficulty, "Difficulty selected");
        let storage = ctx.storage();
        storage.difficulty = Some(difficulty);
        storage.live_mode.get_or_insert(GameMode::Math);
        GameState::LevelPlay
    }
}
