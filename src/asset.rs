//! Named game assets and the single place that maps them to files.
//!
//! Every asset lives in one directory (`assets/` unless configured otherwise). Call
//! sites only ever name an [`Asset`]; if the directory convention changes, only
//! [`asset_path`] has to change.

use std::path::{Path, PathBuf};

use strum_macros::EnumIter;

use crate::error::AssetError;
use crate::render::ImageHandle;

/// The default asset directory, relative to the working directory.
pub const ASSETS_DIR: &str = "assets";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Asset {
    NightBackground,
    DayBackground,
    Character,
    Obstacle,
    MenuBorder,
    Button,
    StartButton,
    ScoreButton,
    QuitButton,
    Infinity,
    MenuTheme,
    Font,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Music,
    Font,
}

impl Asset {
    pub fn file_name(self) -> &'static str {
        match self {
            Asset::NightBackground => "night.jpg",
            Asset::DayBackground => "day.jpg",
            Asset::Character => "stickman.png",
            Asset::Obstacle => "calculator1.jpg",
            Asset::MenuBorder => "menu_border.png",
            Asset::Button => "button.png",
            Asset::StartButton => "start_button.png",
            Asset::ScoreButton => "score_button.png",
            Asset::QuitButton => "quit_button.png",
            Asset::Infinity => "infinity.png",
            Asset::MenuTheme => "song.mp3",
            Asset::Font => "consolas.ttf",
        }
    }

    pub fn kind(self) -> AssetKind {
        match self {
            Asset::MenuTheme => AssetKind::Music,
            Asset::Font => AssetKind::Font,
            _ => AssetKind::Image,
        }
    }
}

/// Maps an asset to its file inside `root`.
pub fn asset_path(root: &Path, asset: Asset) -> PathBuf {
    root.join(asset.file_name())
}

/// Like [`asset_path`], but fails with [`AssetError::NotFound`] if the file is missing.
pub fn resolve_asset(root: &Path, asset: Asset) -> Result<PathBuf, AssetError> {
    let path = asset_path(root, asset);
    if path.is_file() {
        Ok(path)
    } else {
        Err(AssetError::NotFound(path.display().to_string()))
    }
}

/// Turns named image assets into drawable handles.
///
/// Loading happens once while handlers are constructed; a failure there is fatal.
pub trait AssetLoader {
    fn load(&mut self, asset: Asset) -> Result<ImageHandle, AssetError>;
}
