use rand::Rng;

use crate::constants::{GROUND_Y, OBSTACLE_RECYCLE_X, OBSTACLE_RESURFACE_RANGE, OBSTACLE_SIZE, OBSTACLE_START_X};
use crate::geometry::Rect;

/// The single obstacle of a session.
///
/// Instead of spawning new obstacles, the one that scrolled off the left edge is
/// moved to a random spot past the right edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    rect: Rect,
    scored: bool,
}

impl Default for Obstacle {
    fn default() -> Self {
        Self::at(OBSTACLE_START_X)
    }
}

impl Obstacle {
    pub fn at(x: f32) -> Self {
        Self {
            rect: Rect::new(x, GROUND_Y, OBSTACLE_SIZE.x, OBSTACLE_SIZE.y),
            scored: false,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn x(&self) -> f32 {
        self.rect.pos.x
    }

    /// Whether the player has already been credited for clearing this obstacle.
    pub fn is_scored(&self) -> bool {
        self.scored
    }

    pub fn mark_scored(&mut self) {
        self.scored = true;
    }

    /// Moves the obstacle `speed` pixels left, recycling it once it is past the left edge.
    ///
    /// Returns `true` if the obstacle was recycled.
    pub fn advance<R: Rng>(&mut self, speed: f32, rng: &mut R) -> bool {
        self.rect.pos.x -= speed;

        if self.rect.pos.x < OBSTACLE_RECYCLE_X {
            let (min, max) = OBSTACLE_RESURFACE_RANGE;
            self.rect.pos.x = rng.random_range(min..=max) as f32;
            self.scored = false;
            return true;
        }

        false
    }
}
