#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use arg::asset::{Asset, AssetLoader};
use arg::audio::{AudioPlayer, Clip};
use arg::error::AssetError;
use arg::events::InputEvent;
use arg::geometry::Rect;
use arg::gui::GuiManager;
use arg::render::{Color, FontSize, ImageHandle, Surface};
use arg::scores::ScoreStore;
use arg::state::{GameState, Services, StateHandler, StateHandlerContext, Storage};
use glam::{UVec2, Vec2};

/// One drawing call made on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Fill(Rect, Color),
    Blit(usize, Rect),
    Text(String, Vec2),
}

/// A surface that remembers what was drawn on it. Text is measured as 10 by 20 pixels per character.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text(text, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|text| text.contains(needle))
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> UVec2 {
        arg::constants::VIEWPORT_SIZE
    }

    fn clear(&mut self, color: Color) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::Fill(rect, color));
    }

    fn blit(&mut self, image: &ImageHandle, dest: Rect) {
        self.calls.push(DrawCall::Blit(image.id, dest));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, _size: FontSize, _color: Color) {
        self.calls.push(DrawCall::Text(text.to_string(), pos));
    }

    fn text_size(&mut self, text: &str, _size: FontSize) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * 10.0, 20.0)
    }
}

/// Hands out a distinct 100x100 image per load, optionally failing for one asset.
#[derive(Debug, Default)]
pub struct StaticAssets {
    pub loaded: Vec<Asset>,
    pub missing: Option<Asset>,
}

impl AssetLoader for StaticAssets {
    fn load(&mut self, asset: Asset) -> Result<ImageHandle, AssetError> {
        if self.missing == Some(asset) {
            return Err(AssetError::NotFound(asset.file_name().to_string()));
        }
        self.loaded.push(asset);
        Ok(ImageHandle {
            id: self.loaded.len() - 1,
            size: UVec2::new(100, 100),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AudioCall {
    Play(Clip),
    Stop,
    Volume(f32),
}

/// An audio player whose calls can be inspected after it was boxed into [`Services`].
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    pub calls: Rc<RefCell<Vec<AudioCall>>>,
    playing: Rc<RefCell<bool>>,
}

impl AudioPlayer for RecordingAudio {
    fn play(&mut self, clip: Clip) {
        self.calls.borrow_mut().push(AudioCall::Play(clip));
        *self.playing.borrow_mut() = true;
    }

    fn stop(&mut self) {
        self.calls.borrow_mut().push(AudioCall::Stop);
        *self.playing.borrow_mut() = false;
    }

    fn set_volume(&mut self, level: f32) {
        self.calls.borrow_mut().push(AudioCall::Volume(level));
    }

    fn is_playing(&self) -> bool {
        *self.playing.borrow()
    }
}

/// Services with recording audio and an in-memory score store.
pub fn recording_services() -> (Services, RecordingAudio) {
    let audio = RecordingAudio::default();
    let services = Services::new(Box::new(audio.clone()), ScoreStore::in_memory());
    (services, audio)
}

/// Lifecycle calls observed by a [`SpyHandler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Enter(GameState),
    Process(GameState),
    /// Carries the state being transitioned to.
    Exit(GameState),
}

pub type Journal = Rc<RefCell<Vec<Lifecycle>>>;

/// Plays back a fixed list of results, then stays put. Every call is written to a shared journal.
pub struct SpyHandler {
    pub script: Vec<GameState>,
    pub journal: Journal,
}

impl SpyHandler {
    pub fn new(journal: &Journal, script: &[GameState]) -> Box<Self> {
        Box::new(Self {
            script: script.iter().rev().copied().collect(),
            journal: journal.clone(),
        })
    }
}

impl StateHandler for SpyHandler {
    fn on_enter(&mut self, ctx: &mut StateHandlerContext<'_>) {
        self.journal.borrow_mut().push(Lifecycle::Enter(ctx.state()));
    }

    fn process(&mut self, ctx: &mut StateHandlerContext<'_>) -> GameState {
        self.journal.borrow_mut().push(Lifecycle::Process(ctx.state()));
        self.script.pop().unwrap_or(ctx.state())
    }

    fn on_exit(&mut self, ctx: &mut StateHandlerContext<'_>) {
        self.journal.borrow_mut().push(Lifecycle::Exit(ctx.state()));
        ctx.reset_gui();
    }
}

/// Everything a handler needs to be driven by hand, outside of a driver.
pub struct Harness {
    pub surface: RecordingSurface,
    pub gui: GuiManager,
    pub storage: Storage,
    pub services: Services,
    pub audio: RecordingAudio,
}

impl Default for Harness {
    fn default() -> Self {
        let (services, audio) = recording_services();
        Self {
            surface: RecordingSurface::new(),
            gui: GuiManager::new(),
            storage: Storage::default(),
            services,
            audio,
        }
    }
}

impl Harness {
    pub fn with<T>(
        &mut self,
        state: GameState,
        events: &[InputEvent],
        delta: f32,
        f: impl FnOnce(&mut StateHandlerContext<'_>) -> T,
    ) -> T {
        let mut ctx = StateHandlerContext::new(
            state,
            events,
            &mut self.surface,
            Some(&mut self.gui),
            delta,
            &mut self.storage,
            &mut self.services,
        );
        f(&mut ctx)
    }

    pub fn enter(&mut self, handler: &mut dyn StateHandler, state: GameState) {
        self.with(state, &[], 0.0, |ctx| handler.on_enter(ctx));
    }

    pub fn process(
        &mut self,
        handler: &mut dyn StateHandler,
        state: GameState,
        events: &[InputEvent],
        delta: f32,
    ) -> GameState {
        self.with(state, events, delta, |ctx| handler.process(ctx))
    }

    /// Calls `on_exit` with the state being transitioned to.
    pub fn exit(&mut self, handler: &mut dyn StateHandler, next: GameState) {
        self.with(next, &[], 0.0, |ctx| handler.on_exit(ctx));
    }
}

/// A left click at the center of `rect`.
pub fn click(rect: Rect) -> InputEvent {
    InputEvent::MouseUp {
        pos: rect.pos + rect.size / 2.0,
    }
}

/// A click at an absolute position.
pub fn click_at(x: f32, y: f32) -> InputEvent {
    InputEvent::MouseUp { pos: Vec2::new(x, y) }
}
