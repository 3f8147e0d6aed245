//! The SDL2 front end: window, event pump, drawing and frame pacing.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use glam::{UVec2, Vec2};
use sdl2::event::{Event, WindowEvent};
use sdl2::image::LoadTexture;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels;
use sdl2::rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::{Window, WindowContext};
use sdl2::{AudioSubsystem, EventPump, Sdl};
use strum::IntoEnumIterator;
use tracing::{debug, info, trace, warn};

use crate::asset::{resolve_asset, Asset, AssetKind, AssetLoader};
use crate::audio::SdlAudio;
use crate::config::Config;
use crate::constants::{VIEWPORT_SIZE, WINDOW_TITLE};
use crate::error::{AssetError, GameError, GameResult};
use crate::events::{InputEvent, Key};
use crate::formatter;
use crate::geometry::Rect;
use crate::handlers;
use crate::platform;
use crate::render::{Color, FontSize, ImageHandle, Surface};
use crate::scores::ScoreStore;
use crate::state::{Driver, Services};

/// Frames longer than this are simulated as if they took this long, so a stall (a
/// window drag, a debugger) cannot launch the character through the obstacle.
const MAX_FRAME_DELTA: f32 = 0.25;

/// Owns the SDL contexts and runs the state machine one frame per [`App::run`].
pub struct App {
    driver: Driver,
    surface: SdlSurface,
    event_pump: EventPump,
    frame_time: Duration,
    last_tick: Option<Instant>,
    focused: bool,
    // Keep SDL alive for the app lifetime so subsystems (audio) are not shut down
    _sdl_context: Sdl,
    _audio_subsystem: AudioSubsystem,
}

impl App {
    /// Initializes SDL, opens the window, loads every asset and registers the handlers.
    pub fn new(config: &Config) -> GameResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let audio_subsystem = sdl_context.audio().map_err(GameError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        // Fonts borrow the TTF context, which lives as long as the process
        let ttf_context = Box::leak(Box::new(sdl2::ttf::init().map_err(|e| GameError::Sdl(e.to_string()))?));

        trace!(width = VIEWPORT_SIZE.x, height = VIEWPORT_SIZE.y, "Creating game window");
        let window = video_subsystem
            .window(WINDOW_TITLE, VIEWPORT_SIZE.x, VIEWPORT_SIZE.y)
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        video_subsystem.text_input().start();

        let mut canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        canvas
            .set_logical_size(VIEWPORT_SIZE.x, VIEWPORT_SIZE.y)
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        debug!(renderer_info = ?canvas.info(), "Canvas renderer initialized");

        let font_path = resolve_asset(&config.assets_dir, Asset::Font)?;
        let mut fonts = HashMap::new();
        for size in FontSize::iter() {
            let font = ttf_context
                .load_font(&font_path, size.points())
                .map_err(|reason| AssetError::Load {
                    name: Asset::Font.file_name().to_string(),
                    reason,
                })?;
            fonts.insert(size, font);
        }

        let mut surface = SdlSurface {
            texture_creator: canvas.texture_creator(),
            canvas,
            images: Vec::new(),
            fonts,
            assets_dir: config.assets_dir.clone(),
        };

        let audio = SdlAudio::new(config.assets_dir.clone(), config.muted)?;
        let scores = match config.score_file() {
            Ok(path) => ScoreStore::open_or_in_memory(path),
            Err(e) => {
                warn!("No location for the score store, scores will not be saved: {e}");
                ScoreStore::in_memory()
            }
        };
        info!(path = ?scores.path(), "Score store ready");

        let mut driver = Driver::new(Services::new(Box::new(audio), scores));
        driver.register_all(handlers::default_handlers(&mut surface, VIEWPORT_SIZE)?);
        debug!(images = surface.images.len(), "Handlers registered");

        info!("Application initialization completed successfully");
        Ok(Self {
            driver,
            surface,
            event_pump,
            frame_time: config.frame_time(),
            last_tick: None,
            focused: true,
            _sdl_context: sdl_context,
            _audio_subsystem: audio_subsystem,
        })
    }

    /// Runs a single frame and sleeps off whatever is left of the frame time.
    ///
    /// Returns `false` once the state machine has reached the quit state.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        let dt = match self.last_tick {
            Some(last) => last.elapsed().as_secs_f32().min(MAX_FRAME_DELTA),
            None => 0.0,
        };
        self.last_tick = Some(start);

        formatter::increment_frame();

        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Window {
                    win_event: WindowEvent::FocusGained,
                    ..
                } => self.focused = true,
                Event::Window {
                    win_event: WindowEvent::FocusLost,
                    ..
                } => self.focused = false,
                _ => {}
            }
            events.extend(translate(event));
        }

        self.driver.step(events, &mut self.surface, dt);
        self.surface.canvas.present();

        if !self.driver.is_running() {
            return false;
        }

        let elapsed = start.elapsed();
        if elapsed < self.frame_time {
            platform::sleep(self.frame_time - elapsed, self.focused);
        } else {
            warn!("Game loop behind schedule by: {:?}", elapsed - self.frame_time);
        }

        true
    }

    pub fn shutdown(&mut self) {
        self.driver.shutdown();
        self.surface.destroy_images();
    }
}

/// Maps an SDL event to the events the game understands.
fn translate(event: Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown { keycode: Some(keycode), .. } => Some(InputEvent::KeyDown(key(keycode))),
        Event::KeyUp { keycode: Some(keycode), .. } => Some(InputEvent::KeyUp(key(keycode))),
        Event::MouseButtonUp {
            mouse_btn: MouseButton::Left,
            x,
            y,
            ..
        } => Some(InputEvent::MouseUp {
            pos: Vec2::new(x as f32, y as f32),
        }),
        Event::TextInput { text, .. } => Some(InputEvent::TextInput(text)),
        Event::Window {
            win_event: WindowEvent::Leave | WindowEvent::FocusLost | WindowEvent::Minimized,
            ..
        } => Some(InputEvent::WindowLeave),
        _ => None,
    }
}

fn key(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Space => Key::Space,
        Keycode::Return | Keycode::KpEnter => Key::Return,
        Keycode::Backspace => Key::Backspace,
        Keycode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

fn sdl_color(color: Color) -> pixels::Color {
    pixels::Color::RGB(color.r, color.g, color.b)
}

fn sdl_rect(rect: Rect) -> rect::Rect {
    rect::Rect::new(
        rect.pos.x.round() as i32,
        rect.pos.y.round() as i32,
        rect.size.x.round().max(0.0) as u32,
        rect.size.y.round().max(0.0) as u32,
    )
}

/// The window canvas, with the images and fonts loaded for it.
struct SdlSurface {
    canvas: Canvas<Window>,
    texture_creator: TextureCreator<WindowContext>,
    images: Vec<Texture>,
    fonts: HashMap<FontSize, Font<'static, 'static>>,
    assets_dir: PathBuf,
}

impl SdlSurface {
    fn destroy_images(&mut self) {
        for texture in self.images.drain(..) {
            // SAFETY: the canvas and its texture creator are still alive
            unsafe { texture.destroy() };
        }
    }
}

impl AssetLoader for SdlSurface {
    fn load(&mut self, asset: Asset) -> Result<ImageHandle, AssetError> {
        if asset.kind() != AssetKind::Image {
            return Err(AssetError::Load {
                name: asset.file_name().to_string(),
                reason: format!("{:?} is not an image", asset.kind()),
            });
        }

        let path = resolve_asset(&self.assets_dir, asset)?;
        let texture = self
            .texture_creator
            .load_texture(&path)
            .map_err(|reason| AssetError::Load {
                name: asset.file_name().to_string(),
                reason,
            })?;

        let query = texture.query();
        let handle = ImageHandle {
            id: self.images.len(),
            size: UVec2::new(query.width, query.height),
        };
        trace!(?asset, id = handle.id, "Loaded image");
        self.images.push(texture);
        Ok(handle)
    }
}

impl Surface for SdlSurface {
    fn size(&self) -> UVec2 {
        let (width, height) = self.canvas.logical_size();
        UVec2::new(width, height)
    }

    fn clear(&mut self, color: Color) {
        self.canvas.set_draw_color(sdl_color(color));
        self.canvas.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.canvas.set_draw_color(sdl_color(color));
        if let Err(e) = self.canvas.fill_rect(sdl_rect(rect)) {
            trace!("Could not fill rectangle: {e}");
        }
    }

    fn blit(&mut self, image: &ImageHandle, dest: Rect) {
        let Some(texture) = self.images.get(image.id) else {
            warn!(id = image.id, "Unknown image handle");
            return;
        };
        if let Err(e) = self.canvas.copy(texture, None, sdl_rect(dest)) {
            trace!("Could not draw image: {e}");
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: FontSize, color: Color) {
        if text.is_empty() {
            return;
        }
        let Some(font) = self.fonts.get(&size) else {
            return;
        };

        let rendered = match font.render(text).blended(sdl_color(color)) {
            Ok(rendered) => rendered,
            Err(e) => {
                trace!("Could not render text: {e}");
                return;
            }
        };
        let texture = match self.texture_creator.create_texture_from_surface(&rendered) {
            Ok(texture) => texture,
            Err(e) => {
                trace!("Could not upload text: {e}");
                return;
            }
        };

        let dest = rect::Rect::new(pos.x.round() as i32, pos.y.round() as i32, rendered.width(), rendered.height());
        if let Err(e) = self.canvas.copy(&texture, None, dest) {
            trace!("Could not draw text: {e}");
        }
        // SAFETY: the texture was created from this canvas' creator and is not used again
        unsafe { texture.destroy() };
    }

    fn text_size(&mut self, text: &str, size: FontSize) -> Vec2 {
        self.fonts
            .get(&size)
            .and_then(|font| font.size_of(text).ok())
            .map(|(width, height)| Vec2::new(width as f32, height as f32))
            .unwrap_or(Vec2::ZERO)
    }
}
