use glam::{UVec2, Vec2};
use rand::rngs::SmallRng;
use tracing::debug;

use crate::asset::{Asset, AssetLoader};
use crate::constants::LEVEL_LENGTH;
use crate::error::AssetError;
use crate::events::{InputEvent, Key};
use crate::geometry::Rect;
use crate::platform;
use crate::play::PlaySession;
use crate::render::{Color, FontSize, ImageHandle, Surface};
use crate::state::{GameState, RunOutcome, StateHandler, StateHandlerContext};

/// The GUI id of the text entry answers are typed into.
pub const ANSWER_INPUT_ID: &str = "answer_input_box";

#[derive(Debug, Clone, Copy)]
struct PlayImages {
    night: ImageHandle,
    day: ImageHandle,
    character: ImageHandle,
    obstacle: ImageHandle,
}

/// Runs a level.
///
/// The session outlives a pause: leaving for [`GameState::LevelPause`] keeps it as is,
/// while leaving for [`GameState::LevelEnd`] hands the results over through storage and
/// drops it. The next run starts on the following `on_enter`, with whatever difficulty
/// is selected by then.
pub struct LevelPlayHandler {
    images: PlayImages,
    viewport: UVec2,
    rng: SmallRng,
    session: Option<PlaySession>,
}

impl LevelPlayHandler {
    pub fn new(assets: &mut dyn AssetLoader, viewport: UVec2) -> Result<Self, AssetError> {
        Self::with_rng(assets, viewport, platform::rng())
    }

    /// Like [`LevelPlayHandler::new`], with a caller-provided random source.
    pub fn with_rng(assets: &mut dyn AssetLoader, viewport: UVec2, rng: SmallRng) -> Result<Self, AssetError> {
        Ok(Self {
            images: PlayImages {
                night: assets.load(Asset::NightBackground)?,
                day: assets.load(Asset::DayBackground)?,
                character: assets.load(Asset::Character)?,
                obstacle: assets.load(Asset::Obstacle)?,
            },
            viewport,
            rng,
            session: None,
        })
    }

    /// The run in progress, if one has started.
    pub fn session(&self) -> Option<&PlaySession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut PlaySession> {
        self.session.as_mut()
    }

    /// Discards the current run; the next `on_enter` starts a fresh one.
    pub fn reset(&mut self) {
        self.session = None;
    }

    fn answer_rect(&self) -> Rect {
        let size = Vec2::new(100.0, 40.0);
        let viewport = self.viewport.as_vec2();
        Rect::centered_x(viewport.x, viewport.y - size.y - 20.0, size)
    }
}

impl StateHandler for LevelPlayHandler {
    fn on_enter(&mut self, ctx: &mut StateHandlerContext<'_>) {
        let storage = ctx.storage();
        if std::mem::take(&mut storage.reset) {
            debug!("Discarding the abandoned run");
            self.reset();
        }

        if self.session.is_none() {
            let difficulty = storage.difficulty_or_default();
            self.session = Some(PlaySession::new(difficulty, self.viewport, &mut self.rng));
        }

        let rect = self.answer_rect();
        if let Some(gui) = ctx.gui() {
            gui.add_text_entry(ANSWER_INPUT_ID, rect);
            gui.focus(ANSWER_INPUT_ID);
        }
    }

    fn process(&mut self, ctx: &mut StateHandlerContext<'_>) -> GameState {
        let difficulty = ctx.storage().difficulty_or_default();
        let (viewport, rng) = (self.viewport, &mut self.rng);
        let session = self
            .session
            .get_or_insert_with(|| PlaySession::new(difficulty, viewport, rng));

        session.tick(ctx.delta(), &mut self.rng);
        draw(&self.images, session, ctx.surface());

        let mut next = ctx.state();
        for event in ctx.events() {
            match event {
                InputEvent::TextEntryFinished { id, text } if *id == ANSWER_INPUT_ID => {
                    session.submit(text, &mut self.rng);
                    if let Some(gui) = ctx.gui() {
                        gui.set_text(ANSWER_INPUT_ID, "");
                    }
                }
                InputEvent::KeyUp(Key::Space) | InputEvent::WindowLeave => next = GameState::LevelPause,
                _ => {}
            }
        }

        if session.resolve().is_some() {
            next = GameState::LevelEnd;
        }

        next
    }

    fn on_exit(&mut self, ctx: &mut StateHandlerContext<'_>) {
        match ctx.state() {
            GameState::LevelEnd => {
                if let Some(session) = self.session.take() {
                    let storage = ctx.storage();
                    storage.last_score = Some(session.score());
                    storage.last_play_time = Some(session.elapsed());
                    storage.end_game = Some(session.outcome().unwrap_or(RunOutcome::Lost));
                }
            }
            GameState::LevelPause => {
                if let Some(session) = self.session.as_mut() {
                    session.pause();
                }
            }
            _ => {}
        }

        ctx.reset_gui();
    }
}

fn draw(images: &PlayImages, session: &PlaySession, surface: &mut dyn Surface) {
    let viewport = session.viewport().as_vec2();

    for tile in session.background().tiles() {
        let image = if tile.is_day() { &images.day } else { &images.night };
        surface.blit(image, Rect::new(tile.x, 0.0, viewport.x, viewport.y));
    }
    surface.blit(&images.obstacle, session.obstacle().rect());
    surface.blit(&images.character, session.character().rect());

    let hint = "Press SPACEBAR To Pause";
    let hint_size = surface.text_size(hint, FontSize::Small);
    surface.draw_text(hint, Vec2::new(viewport.x - hint_size.x - 10.0, 10.0), FontSize::Small, Color::WHITE);

    // Counts correct answers and cleared obstacles
    let score = format!("SCORE: {}", session.score());
    surface.draw_text(&score, Vec2::new(10.0, 10.0), FontSize::Small, Color::WHITE);

    let clock = match session.remaining() {
        Some(remaining) => format!("TIME LEFT: {:.0}", remaining.ceil()),
        None => {
            let progress = (session.distance() / LEVEL_LENGTH * 100.0).min(100.0);
            format!("TIME: {:.1}  DISTANCE: {progress:.0}%", session.elapsed())
        }
    };
    surface.draw_text(&clock, Vec2::new(10.0, 40.0), FontSize::Small, Color::WHITE);

    let equation = format!("{} = ", session.problem());
    let equation_size = surface.text_size(&equation, FontSize::Small);
    let pos = Vec2::new((viewport.x - equation_size.x) / 3.0, viewport.y - 50.0);
    surface.draw_text(&equation, pos, FontSize::Small, Color::WHITE);
}
