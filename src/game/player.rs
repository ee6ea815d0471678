use super::{PLAYER_SIZE, PLAYER_SPEED, PLAYER_START_X, PLAYER_START_Y, Rect};

/// The player ship: a square bounding box moved horizontally along the
/// bottom of the playfield. Vertical position is fixed for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
        }
    }

    /// Applies one tick of keyboard movement. Both directions may be held
    /// at once; they cancel with no bias. The result is clamped to
    /// `[0, surface_width - PLAYER_SIZE]`.
    pub fn step(&mut self, move_left: bool, move_right: bool, surface_width: f32) {
        if move_left {
            self.x -= PLAYER_SPEED;
        }
        if move_right {
            self.x += PLAYER_SPEED;
        }
        self.x = self.x.clamp(0.0, (surface_width - PLAYER_SIZE).max(0.0));
    }

    /// Snaps the ship so it is centered on `center_x`, clamped to the
    /// surface. Used by pointer movement, which assigns position directly
    /// rather than applying velocity.
    pub fn snap_to(&mut self, center_x: f32, surface_width: f32) {
        let x = center_x - PLAYER_SIZE / 2.0;
        self.x = x.clamp(0.0, (surface_width - PLAYER_SIZE).max(0.0));
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            w: PLAYER_SIZE,
            h: PLAYER_SIZE,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
