use tracing::debug;

use super::{clicked_action, draw_buttons, labeled_button, MenuBackdrop};
use crate::asset::{Asset, AssetLoader};
use crate::error::AssetError;
use crate::events::{InputEvent, Key};
use crate::gui::Button;
use crate::render::{Color, FontSize};
use crate::state::{GameState, StateHandler, StateHandlerContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PauseAction {
    Resume,
    Back,
    Quit,
}

/// Shown while a run is paused. SPACE or RESUME returns to the run untouched.
pub struct LevelPauseHandler {
    backdrop: MenuBackdrop,
    buttons: [(Button, PauseAction); 3],
}

impl LevelPauseHandler {
    pub fn new(assets: &mut dyn AssetLoader) -> Result<Self, AssetError> {
        let backdrop = MenuBackdrop::new(assets)?;
        let image = assets.load(Asset::Button)?;

        Ok(Self {
            backdrop,
            buttons: [
                (labeled_button(image, 125.0, 300.0, "RESUME"), PauseAction::Resume),
                (labeled_button(image, 350.0, 300.0, "BACK"), PauseAction::Back),
                (labeled_button(image, 575.0, 300.0, "QUIT"), PauseAction::Quit),
            ],
        })
    }
}

impl StateHandler for LevelPauseHandler {
    fn process(&mut self, ctx: &mut StateHandlerContext<'_>) -> GameState {
        let surface = ctx.surface();
        self.backdrop.draw(surface);
        surface.draw_text_centered("PAUSED", 100.0, FontSize::Large, Color::WHITE);
        draw_buttons(surface, &self.buttons);

        let events = ctx.events();
        let resume_key = events
            .iter()
            .any(|event| matches!(event, InputEvent::KeyUp(Key::Space)));

        match clicked_action(events, &self.buttons) {
            Some(PauseAction::Resume) => GameState::LevelPlay,
            Some(PauseAction::Back) => {
                debug!("Abandoning the paused run");
                ctx.storage().reset = true;
                GameState::MainMenu
            }
            Some(PauseAction::Quit) => GameState::GameQuit,
            None if resume_key => GameState::LevelPlay,
            None => ctx.state(),
        }
    }
}
