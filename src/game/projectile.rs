use super::{BULLET_SIZE, BULLET_SPEED, PLAYER_SIZE, Rect};

/// A player-fired bullet travelling straight up. The bounding box is
/// `BULLET_SIZE` wide and twice as tall.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

impl Projectile {
    /// Fires a bullet centered horizontally on a player ship whose left
    /// edge is at `player_x`, at height `player_y`.
    pub fn fire(id: u32, player_x: f32, player_y: f32) -> Self {
        Self {
            id,
            x: player_x + PLAYER_SIZE / 2.0 - BULLET_SIZE / 2.0,
            y: player_y,
        }
    }

    pub fn step(&mut self) {
        self.y -= BULLET_SPEED;
    }

    /// Whether the bullet has left the top of the playfield.
    pub fn has_exited(&self) -> bool {
        self.y <= 0.0
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            w: BULLET_SIZE,
            h: BULLET_SIZE * 2.0,
        }
    }
}
