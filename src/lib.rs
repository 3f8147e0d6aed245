//! ARG, an arithmetic runner game.
//!
//! Everything except [`app`] is independent of SDL and runs headless.

#[cfg(feature = "sdl")]
pub mod app;
pub mod arithmetic;
pub mod asset;
pub mod audio;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod formatter;
pub mod geometry;
pub mod gui;
pub mod handlers;
pub mod logging;
pub mod platform;
pub mod play;
pub mod render;
pub mod scores;
pub mod state;
