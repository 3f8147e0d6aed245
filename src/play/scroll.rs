//! Seamless horizontal wraparound of the background.

/// One background tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    /// Left edge in screen space.
    pub x: f32,
    /// How many tiles have scrolled into view before this one.
    pub lap: u32,
}

impl Tile {
    /// Tiles alternate in pairs: two night tiles, then two day tiles.
    pub fn is_day(&self) -> bool {
        (self.lap / 2) % 2 == 1
    }
}

/// Two tiles of the viewport's width, laid side by side and scrolled left together.
///
/// Whenever the leading tile has scrolled entirely off the left edge it is moved to
/// the right of the trailing one. After every [`advance`](Self::advance) the leading
/// tile starts in `(-width, 0]` and the trailing tile starts exactly `width` later, so
/// together they always cover the viewport with a single seam.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollingBackground {
    tiles: [Tile; 2],
    width: f32,
}

impl ScrollingBackground {
    pub fn new(width: f32) -> Self {
        Self {
            tiles: [Tile { x: 0.0, lap: 0 }, Tile { x: width, lap: 1 }],
            width,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Both tiles, leading tile first.
    pub fn tiles(&self) -> [Tile; 2] {
        let (lead, trail) = self.order();
        [self.tiles[lead], self.tiles[trail]]
    }

    /// Left edges of the leading and trailing tile.
    pub fn positions(&self) -> (f32, f32) {
        let [lead, trail] = self.tiles();
        (lead.x, trail.x)
    }

    /// Scrolls both tiles `speed` pixels to the left, wrapping as needed.
    pub fn advance(&mut self, speed: f32) {
        for tile in self.tiles.iter_mut() {
            tile.x -= speed;
        }

        // A speed wider than a tile can push both off screen; keep wrapping
        loop {
            let (lead, trail) = self.order();
            if self.tiles[lead].x > -self.width {
                break;
            }
            self.tiles[lead] = Tile {
                x: self.tiles[trail].x + self.width,
                lap: self.tiles[trail].lap + 1,
            };
        }

        // Re-anchor so accumulated rounding can never open a gap at the seam
        let (lead, trail) = self.order();
        self.tiles[trail].x = self.tiles[lead].x + self.width;
    }

    /// Returns `true` if the tiles cover `[0, viewport_width)` without a gap.
    pub fn covers(&self, viewport_width: f32) -> bool {
        let (lead, trail) = self.positions();
        lead <= 0.0 && trail == lead + self.width && trail + self.width >= viewport_width
    }

    fn order(&self) -> (usize, usize) {
        if self.tiles[0].x <= self.tiles[1].x {
            (0, 1)
        } else {
            (1, 0)
        }
    }
}
