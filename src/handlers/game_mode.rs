use tracing::{debug, info};

use super::{clicked_action, draw_buttons, labeled_button, MenuBackdrop};
use crate::asset::{Asset, AssetLoader};
use crate::error::AssetError;
use crate::gui::Button;
use crate::render::{Color, FontSize};
use crate::state::{GameMode, GameState, StateHandler, StateHandlerContext};

/// Chooses between the math runner and flashcards.
pub struct GameModeHandler {
    backdrop: MenuBackdrop,
    buttons: [(Button, GameMode); 2],
}

impl GameModeHandler {
    pub fn new(assets: &mut dyn AssetLoader) -> Result<Self, AssetError> {
        let backdrop = MenuBackdrop::new(assets)?;
        let image = assets.load(Asset::Button)?;

        Ok(Self {
            backdrop,
            buttons: [
                (labeled_button(image, 225.0, 300.0, "MATH"), GameMode::Math),
                (labeled_button(image, 475.0, 300.0, "CARD"), GameMode::Flashcard),
            ],
        })
    }
}

impl StateHandler for GameModeHandler {
    fn process(&mut self, ctx: &mut StateHandlerContext<'_>) -> GameState {
        let surface = ctx.surface();
        self.backdrop.draw(surface);
        surface.draw_text_centered("GAME MODE", 100.0, FontSize::Large, Color::WHITE);
        draw_buttons(surface, &self.buttons);

        match clicked_action(ctx.events(), &self.buttons) {
            Some(GameMode::Math) => {
                debug!("Math mode selected");
                ctx.storage().live_mode = Some(GameMode::Math);
                GameState::Difficulty
            }
            Some(GameMode::Flashcard) => {
                info!("Flashcard mode is not available yet");
                ctx.state()
            }
            None => ctx.state(),
        }
    }
}
