use super::{BOTTOM_EXIT_Y, ENEMY_SIZE, ENEMY_SPEED, Rect};

/// A descending enemy ship. `id` comes from a session-monotonic counter
/// and is never reused within a game.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl Enemy {
    /// Spawns an enemy fully off-screen above the playfield.
    pub fn spawn(id: u32, x: f32) -> Self {
        Self {
            id,
            x,
            y: -ENEMY_SIZE,
            size: ENEMY_SIZE,
        }
    }

    pub fn step(&mut self) {
        self.y += ENEMY_SPEED;
    }

    /// Whether the enemy has crossed the bottom exit threshold and should
    /// be culled (not scored, not counted as a life lost).
    pub fn has_exited(&self) -> bool {
        self.y >= BOTTOM_EXIT_Y
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            w: self.size,
            h: self.size,
        }
    }
}
