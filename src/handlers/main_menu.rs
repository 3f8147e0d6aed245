use glam::Vec2;
use tracing::debug;

use super::{clicked_action, draw_buttons, MenuBackdrop};
use crate::asset::{Asset, AssetLoader};
use crate::audio::Clip;
use crate::constants::{BUTTON_SIZE, MENU_VOLUME};
use crate::error::AssetError;
use crate::gui::Button;
use crate::render::{Color, FontSize};
use crate::state::{GameState, StateHandler, StateHandlerContext};

/// The title screen: start, scores or quit.
pub struct MainMenuHandler {
    backdrop: MenuBackdrop,
    buttons: [(Button, GameState); 3],
}

impl MainMenuHandler {
    pub fn new(assets: &mut dyn AssetLoader) -> Result<Self, AssetError> {
        let backdrop = MenuBackdrop::new(assets)?;
        let mut button = |asset, y| -> Result<Button, AssetError> {
            Ok(Button::new(Vec2::new(350.0, y), BUTTON_SIZE, assets.load(asset)?))
        };

        Ok(Self {
            backdrop,
            buttons: [
                (button(Asset::StartButton, 75.0)?, GameState::GameMode),
                (button(Asset::ScoreButton, 200.0)?, GameState::Score),
                (button(Asset::QuitButton, 325.0)?, GameState::GameQuit),
            ],
        })
    }
}

impl StateHandler for MainMenuHandler {
    fn on_enter(&mut self, ctx: &mut StateHandlerContext<'_>) {
        let audio = ctx.audio();
        if !audio.is_playing() {
            debug!("Starting menu music");
            audio.set_volume(MENU_VOLUME);
            audio.play(Clip::MenuTheme);
        }
    }

    fn process(&mut self, ctx: &mut StateHandlerContext<'_>) -> GameState {
        let surface = ctx.surface();
        self.backdrop.draw(surface);
        surface.draw_text_centered("ARG", 10.0, FontSize::Medium, Color::WHITE);
        draw_buttons(surface, &self.buttons);

        clicked_action(ctx.events(), &self.buttons).unwrap_or(ctx.state())
    }
}
