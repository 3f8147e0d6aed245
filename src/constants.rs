//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::{UVec2, Vec2};

/// The target duration of a single frame (60 FPS).
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the window and the drawing surface, in pixels.
pub const VIEWPORT_SIZE: UVec2 = UVec2::new(900, 500);

/// The title of the game window.
pub const WINDOW_TITLE: &str = "ARG";

/// The y-coordinate of the ground line; the character's top edge rests here.
pub const GROUND_Y: f32 = 330.0;
/// Downward acceleration applied to the character, in pixels per second squared.
pub const GRAVITY: f32 = 2500.0;
/// The vertical velocity given to the character by a jump, in pixels per second.
pub const JUMP_VELOCITY: f32 = -1100.0;
/// Velocity left over when a session is paused mid-air, so the character settles on resume.
pub const PAUSE_SETTLE_VELOCITY: f32 = -150.0;
/// The character's drawn and collision size.
pub const CHARACTER_SIZE: Vec2 = Vec2::new(100.0, 100.0);

/// The obstacle's drawn and collision size.
pub const OBSTACLE_SIZE: Vec2 = Vec2::new(50.0, 125.0);
/// Where the first obstacle of a session starts.
pub const OBSTACLE_START_X: f32 = 800.0;
/// Once the obstacle's x-coordinate drops below this, it is recycled.
pub const OBSTACLE_RECYCLE_X: f32 = -(OBSTACLE_SIZE.x + 1.0);
/// The inclusive range a recycled obstacle resurfaces in; always right of the viewport.
pub const OBSTACLE_RESURFACE_RANGE: (i32, i32) = (905, 1800);

/// Scroll speed at the start of a session, in pixels per frame.
///
/// Tuned with the jump arc so an answer timed as in `timed_jump_clears_obstacle_for_a_point` clears the obstacle.
pub const BASE_SPEED: f32 = 4.0;
/// Scroll speed gained per correct answer.
pub const SPEED_INCREMENT: f32 = 1.0;

/// Scroll distance the fixed tiers must cover to win.
pub const LEVEL_LENGTH: f32 = 12_000.0;
/// The infinite tier's countdown, in seconds.
pub const INFINITE_TIME_LIMIT: f32 = 60.0;

/// Score from which the infinite tier asks medium problems.
pub const MEDIUM_SCORE_THRESHOLD: u32 = 5;
/// Score from which the infinite tier asks hard problems.
pub const HARD_SCORE_THRESHOLD: u32 = 10;

/// Maximum number of records kept per leaderboard list.
pub const LEADERBOARD_SIZE: usize = 5;
/// File name of the persistent score store inside the data directory.
pub const SCORE_FILE_NAME: &str = "arg.json";

/// Music volume on the menus, from `0.0` to `1.0`.
pub const MENU_VOLUME: f32 = 0.7;

/// The size of menu buttons, in pixels.
pub const BUTTON_SIZE: Vec2 = Vec2::new(200.0, 100.0);
