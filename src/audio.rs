//! This module handles the audio playback for the game.
//!
//! Audio is fire-and-forget: handlers ask for a clip and never learn whether it played.

use crate::asset::Asset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clip {
    /// Looping background music of the menus.
    MenuTheme,
}

impl Clip {
    pub fn asset(self) -> Asset {
        match self {
            Clip::MenuTheme => Asset::MenuTheme,
        }
    }
}

pub trait AudioPlayer {
    /// Starts `clip` on a loop, replacing whatever was playing.
    fn play(&mut self, clip: Clip);

    fn stop(&mut self);

    /// Sets the volume, from `0.0` (silent) to `1.0`.
    fn set_volume(&mut self, level: f32);

    fn is_playing(&self) -> bool;
}

/// An audio player that plays nothing; used when no audio device is available.
#[derive(Debug, Default)]
pub struct NullAudio {
    playing: Option<Clip>,
}

impl AudioPlayer for NullAudio {
    fn play(&mut self, clip: Clip) {
        self.playing = Some(clip);
    }

    fn stop(&mut self) {
        self.playing = None;
    }

    fn set_volume(&mut self, _level: f32) {}

    fn is_playing(&self) -> bool {
        self.playing.is_some()
    }
}

#[cfg(feature = "sdl")]
pub use self::sdl::SdlAudio;

#[cfg(feature = "sdl")]
mod sdl {
    use std::path::PathBuf;

    use sdl2::mixer::{self, InitFlag, Music, DEFAULT_FORMAT, MAX_VOLUME};
    use tracing::{trace, warn};

    use super::{AudioPlayer, Clip};
    use crate::asset::resolve_asset;
    use crate::error::GameError;

    /// The SDL2_mixer backed audio player.
    ///
    /// Music is streamed from the asset directory on demand; playback failures are logged
    /// and otherwise ignored.
    pub struct SdlAudio {
        _mixer_context: mixer::Sdl2MixerContext,
        assets_dir: PathBuf,
        music: Option<Music<'static>>,
        volume: f32,
        muted: bool,
    }

    impl SdlAudio {
        pub fn new(assets_dir: PathBuf, muted: bool) -> Result<Self, GameError> {
            let frequency = 44100;
            let format = DEFAULT_FORMAT;
            let channels = 2;
            let chunk_size = 1024;

            mixer::open_audio(frequency, format, channels, chunk_size).map_err(GameError::Sdl)?;
            let mixer_context = mixer::init(InitFlag::MP3 | InitFlag::OGG).map_err(GameError::Sdl)?;

            let mut audio = Self {
                _mixer_context: mixer_context,
                assets_dir,
                music: None,
                volume: 0.7,
                muted,
            };
            audio.apply_volume();
            Ok(audio)
        }

        fn apply_volume(&self) {
            let level = if self.muted { 0.0 } else { self.volume };
            Music::set_volume((level * MAX_VOLUME as f32).round() as i32);
        }
    }

    impl AudioPlayer for SdlAudio {
        fn play(&mut self, clip: Clip) {
            let path = match resolve_asset(&self.assets_dir, clip.asset()) {
                Ok(path) => path,
                Err(e) => {
                    warn!("Could not find {clip:?}: {e}");
                    return;
                }
            };

            match Music::from_file(&path) {
                Ok(music) => {
                    if let Err(e) = music.play(-1) {
                        warn!("Could not play {clip:?}: {e}");
                    } else {
                        trace!(?clip, "Playing music");
                    }
                    self.music = Some(music);
                }
                Err(e) => warn!("Could not load {clip:?}: {e}"),
            }
        }

        fn stop(&mut self) {
            Music::halt();
            self.music = None;
        }

        fn set_volume(&mut self, level: f32) {
            self.volume = level.clamp(0.0, 1.0);
            self.apply_volume();
        }

        fn is_playing(&self) -> bool {
            self.music.is_some() && Music::is_playing()
        }
    }
}
