//! The drawing target handed to state handlers.
//!
//! Handlers never talk to SDL directly. They draw onto a [`Surface`], which the
//! driver clears before every frame and the front end presents afterwards.

use glam::{UVec2, Vec2};

use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(100, 100, 100);
    pub const DARK_SLATE_GRAY: Color = Color::rgb(47, 79, 79);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A drawable image resolved by an [`AssetLoader`](crate::asset::AssetLoader).
///
/// The handle is only an index into the loader's storage plus the image's native size;
/// handlers scale it through the destination rectangle of [`Surface::blit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageHandle {
    pub id: usize,
    pub size: UVec2,
}

impl ImageHandle {
    pub fn width(&self) -> u32 {
        self.size.x
    }

    pub fn height(&self) -> u32 {
        self.size.y
    }
}

/// Point sizes the front end prepares fonts for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::EnumIter)]
pub enum FontSize {
    /// In-game HUD text.
    Small,
    /// Button labels and end-of-run summaries.
    Medium,
    /// Screen titles.
    Large,
}

impl FontSize {
    pub fn points(self) -> u16 {
        match self {
            FontSize::Small => 20,
            FontSize::Medium => 50,
            FontSize::Large => 80,
        }
    }
}

pub trait Surface {
    /// The size of the drawable area, in pixels.
    fn size(&self) -> UVec2;

    /// Fills the whole surface with a single color.
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws `image` stretched to `dest`.
    fn blit(&mut self, image: &ImageHandle, dest: Rect);

    /// Draws `text` with its top-left corner at `pos`.
    fn draw_text(&mut self, text: &str, pos: Vec2, size: FontSize, color: Color);

    /// Measures `text` as [`Surface::draw_text`] would render it.
    fn text_size(&mut self, text: &str, size: FontSize) -> Vec2;

    /// Draws `text` horizontally centered at height `y`.
    fn draw_text_centered(&mut self, text: &str, y: f32, size: FontSize, color: Color) {
        let measured = self.text_size(text, size);
        let x = (self.size().x as f32 - measured.x) / 2.0;
        self.draw_text(text, Vec2::new(x, y), size, color);
    }
}
