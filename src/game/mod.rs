mod collision;
mod enemy;
mod player;
mod projectile;
mod session;

pub use collision::{Rect, find_player_hit, rects_overlap, resolve_projectile_hits};
pub use enemy::Enemy;
pub use player::Player;
pub use projectile::Projectile;
pub use session::{Game, Intent, Phase, TickReport};

/// Tuning constants, in logical pixels and milliseconds.
pub const PLAYER_SIZE: f32 = 40.0;
pub const ENEMY_SIZE: f32 = 30.0;
pub const BULLET_SIZE: f32 = 6.0;
pub const PLAYER_SPEED: f32 = 8.0;
pub const ENEMY_SPEED: f32 = 2.0;
pub const BULLET_SPEED: f32 = 10.0;
pub const ENEMY_SPAWN_INTERVAL: u64 = 1000;
pub const SHOOT_COOLDOWN: u64 = 200;
pub const COLLISION_COOLDOWN: u64 = 1000;
/// Enemies past this y have left the playfield and are culled.
pub const BOTTOM_EXIT_Y: f32 = 500.0;
pub const PLAYER_START_X: f32 = 280.0;
pub const PLAYER_START_Y: f32 = 450.0;
pub const STARTING_LIVES: u8 = 3;
pub const POINTS_PER_KILL: u32 = 10;

/// Current play-surface dimensions in logical pixels, read from the
/// hosting view each frame. Absent until the first frame has been laid
/// out, in which case spawning and player movement are skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

/// Timestamp-difference gate: an action is allowed once, then blocked
/// until `interval` ms have elapsed. A gate that has never triggered is
/// open, so the first shot (or a collision at t=0) registers.
#[derive(Debug, Clone, Copy)]
pub struct CooldownGate {
    last: Option<u64>,
    interval: u64,
}

impl CooldownGate {
    pub fn new(interval: u64) -> Self {
        Self {
            last: None,
            interval,
        }
    }

    /// Whether the gate allows an action at `now`. The comparison is
    /// strict: an action exactly `interval` ms after the last one is
    /// still blocked.
    pub fn is_open(&self, now: u64) -> bool {
        match self.last {
            None => true,
            Some(last) => now.saturating_sub(last) > self.interval,
        }
    }

    pub fn trigger(&mut self, now: u64) {
        self.last = Some(now);
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn last_triggered(&self) -> Option<u64> {
        self.last
    }
}
