//! One handler per [`GameState`].
//!
//! Handlers load their images once at construction; everything else they need arrives
//! through the [`StateHandlerContext`](crate::state::StateHandlerContext) every frame.

use glam::{UVec2, Vec2};

use crate::asset::{Asset, AssetLoader};
use crate::constants::BUTTON_SIZE;
use crate::error::AssetError;
use crate::events::InputEvent;
use crate::geometry::Rect;
use crate::gui::Button;
use crate::render::{Color, ImageHandle, Surface};
use crate::state::{GameState, StateHandler};

mod difficulty;
mod game_mode;
mod level_end;
mod level_pause;
mod level_play;
mod main_menu;
mod quit;
mod score;

pub use self::difficulty::DifficultyHandler;
pub use self::game_mode::GameModeHandler;
pub use self::level_end::LevelEndHandler;
pub use self::level_pause::LevelPauseHandler;
pub use self::level_play::{LevelPlayHandler, ANSWER_INPUT_ID};
pub use self::main_menu::MainMenuHandler;
pub use self::quit::QuitHandler;
pub use self::score::ScoreHandler;

/// Builds a handler for every state of the game.
pub fn default_handlers(
    assets: &mut dyn AssetLoader,
    viewport: UVec2,
) -> Result<Vec<(GameState, Box<dyn StateHandler>)>, AssetError> {
    Ok(vec![
        (GameState::GameQuit, Box::new(QuitHandler)),
        (GameState::MainMenu, Box::new(MainMenuHandler::new(assets)?)),
        (GameState::GameMode, Box::new(GameModeHandler::new(assets)?)),
        (GameState::Difficulty, Box::new(DifficultyHandler::new(assets)?)),
        (GameState::LevelPlay, Box::new(LevelPlayHandler::new(assets, viewport)?)),
        (GameState::LevelPause, Box::new(LevelPauseHandler::new(assets)?)),
        (GameState::LevelEnd, Box::new(LevelEndHandler::new(assets)?)),
        (GameState::Score, Box::new(ScoreHandler::new(assets)?)),
    ])
}

/// The framed backdrop shared by every menu screen.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuBackdrop {
    border: ImageHandle,
}

impl MenuBackdrop {
    pub(crate) fn new(assets: &mut dyn AssetLoader) -> Result<Self, AssetError> {
        Ok(Self {
            border: assets.load(Asset::MenuBorder)?,
        })
    }

    pub(crate) fn draw(&self, surface: &mut dyn Surface) {
        let size = surface.size().as_vec2();
        surface.fill_rect(Rect::from_pos_size(Vec2::ZERO, size), Color::DARK_SLATE_GRAY);
        surface.blit(&self.border, Rect::from_pos_size(Vec2::ZERO, size));
    }
}

/// A menu button on the generic button image, with a text label.
pub(crate) fn labeled_button(image: ImageHandle, x: f32, y: f32, label: &'static str) -> Button {
    Button::new(Vec2::new(x, y), BUTTON_SIZE, image).with_label(label)
}

/// The action of the first button clicked this frame, in event order.
pub(crate) fn clicked_action<T: Copy>(events: &[InputEvent], buttons: &[(Button, T)]) -> Option<T> {
    events.iter().find_map(|event| {
        buttons
            .iter()
            .find(|(button, _)| button.is_click(event))
            .map(|(_, action)| *action)
    })
}

pub(crate) fn draw_buttons<T>(surface: &mut dyn Surface, buttons: &[(Button, T)]) {
    for (button, _) in buttons {
        button.draw(surface);
    }
}
