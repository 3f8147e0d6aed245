use crate::constants::{CHARACTER_SIZE, GRAVITY, GROUND_Y, JUMP_VELOCITY};
use crate::geometry::Rect;

/// The jumping character, horizontally fixed in the middle of the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    rect: Rect,
    velocity: f32,
}

impl Character {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            rect: Rect::centered_x(viewport_width, GROUND_Y, CHARACTER_SIZE),
            velocity: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn y(&self) -> f32 {
        self.rect.pos.y
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: f32) {
        self.velocity = velocity;
    }

    pub fn is_grounded(&self) -> bool {
        self.rect.pos.y >= GROUND_Y && self.velocity == 0.0
    }

    pub fn jump(&mut self) {
        self.velocity = JUMP_VELOCITY;
    }

    /// Integrates one frame: position from the old velocity first, then velocity from
    /// gravity, then the ground clamp.
    pub fn update(&mut self, dt: f32) {
        self.rect.pos.y += self.velocity * dt;
        self.velocity += GRAVITY * dt;

        if self.rect.pos.y >= GROUND_Y {
            self.rect.pos.y = GROUND_Y;
            self.velocity = 0.0;
        }
    }
}
