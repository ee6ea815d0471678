use rand::Rng;

use super::collision::{find_player_hit, resolve_projectile_hits};
use super::{
    COLLISION_COOLDOWN, CooldownGate, ENEMY_SIZE, ENEMY_SPAWN_INTERVAL, Enemy, POINTS_PER_KILL,
    Player, Projectile, SHOOT_COOLDOWN, STARTING_LIVES, Surface,
};

/// Session lifecycle. `NotStarted` only ever advances to `Running`;
/// `Over` returns to `Running` via an explicit restart, never by resuming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Over,
}

/// Desired actions for one tick, derived from whatever inputs are
/// currently held. Decoupled from the raw events that produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intent {
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
}

/// What happened during a tick, for the front end (sound effects, HUD
/// flashes). Carries no state the simulation depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub fired: bool,
    pub kills: u32,
    pub life_lost: bool,
}

/// The whole game session: score, lives, phase, entity collections, id
/// counters and cooldown gates. All mutation happens on the single tick
/// path, so a plain owned struct is enough; no interior mutability.
#[derive(Debug)]
pub struct Game {
    pub phase: Phase,
    pub score: u32,
    pub lives: u8,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    enemy_id_counter: u32,
    projectile_id_counter: u32,
    spawn_gate: CooldownGate,
    shot_gate: CooldownGate,
    collision_gate: CooldownGate,
}

impl Game {
    pub fn new() -> Self {
        Self {
            phase: Phase::NotStarted,
            score: 0,
            lives: STARTING_LIVES,
            player: Player::new(),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            enemy_id_counter: 0,
            projectile_id_counter: 0,
            spawn_gate: CooldownGate::new(ENEMY_SPAWN_INTERVAL),
            shot_gate: CooldownGate::new(SHOOT_COOLDOWN),
            collision_gate: CooldownGate::new(COLLISION_COOLDOWN),
        }
    }

    /// Starts a fresh session. Used for both the first start and the
    /// restart from game over: score, lives, collections, player
    /// position, gates and id counters all return to their initial
    /// values before the phase flips to `Running`.
    pub fn restart(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.player = Player::new();
        self.enemies.clear();
        self.projectiles.clear();
        self.enemy_id_counter = 0;
        self.projectile_id_counter = 0;
        self.spawn_gate.reset();
        self.shot_gate.reset();
        self.collision_gate.reset();
        self.phase = Phase::Running;
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Pointer movement assigns the player position directly instead of
    /// setting a directional flag, so it applies at event time rather
    /// than on the next tick. Ignored outside of a running session.
    pub fn snap_player_to(&mut self, center_x: f32, surface: Surface) {
        if self.is_running() {
            self.player.snap_to(center_x, surface.width);
        }
    }

    /// Runs one tick with the thread-local RNG.
    pub fn tick(&mut self, intent: Intent, now: u64, surface: Option<Surface>) -> TickReport {
        self.tick_with_rng(intent, now, surface, &mut rand::rng())
    }

    /// One synchronous pass of the update loop: player movement and
    /// firing, enemy spawning, motion integration and culling, then
    /// collision resolution. `now` is a monotonic millisecond timestamp
    /// used only by the cooldown gates; motion itself is one fixed step
    /// per call. When `surface` is unavailable the movement, firing and
    /// spawn stages are skipped and the tick degrades to motion + culling.
    pub fn tick_with_rng(
        &mut self,
        intent: Intent,
        now: u64,
        surface: Option<Surface>,
        rng: &mut impl Rng,
    ) -> TickReport {
        let mut report = TickReport::default();

        if !self.is_running() {
            return report;
        }

        if let Some(surface) = surface {
            self.player
                .step(intent.move_left, intent.move_right, surface.width);

            // Bullets leave from the post-movement position
            if intent.fire && self.shot_gate.is_open(now) {
                let projectile =
                    Projectile::fire(self.projectile_id_counter, self.player.x, self.player.y);
                self.projectile_id_counter += 1;
                self.projectiles.push(projectile);
                self.shot_gate.trigger(now);
                report.fired = true;
            }

            if self.spawn_gate.is_open(now) {
                self.spawn_enemy(surface.width, rng);
                self.spawn_gate.trigger(now);
            }
        }

        for enemy in &mut self.enemies {
            enemy.step();
        }
        self.enemies.retain(|e| !e.has_exited());

        for projectile in &mut self.projectiles {
            projectile.step();
        }
        self.projectiles.retain(|p| !p.has_exited());

        report.kills = resolve_projectile_hits(&mut self.projectiles, &mut self.enemies);
        self.score += report.kills * POINTS_PER_KILL;

        report.life_lost = self.resolve_player_hit(now);

        report
    }

    fn spawn_enemy(&mut self, surface_width: f32, rng: &mut impl Rng) {
        let max_x = (surface_width - ENEMY_SIZE).max(0.0);
        let x = if max_x > 0.0 {
            rng.random_range(0.0..max_x)
        } else {
            0.0
        };
        self.enemies.push(Enemy::spawn(self.enemy_id_counter, x));
        self.enemy_id_counter += 1;
    }

    /// Player damage is gated by a cooldown window: at most one life lost
    /// per window no matter how many enemies overlap. The first
    /// overlapping enemy is removed; hitting zero lives ends the session
    /// in the same step as the decrement.
    fn resolve_player_hit(&mut self, now: u64) -> bool {
        if !self.collision_gate.is_open(now) {
            return false;
        }
        let Some(enemy_id) = find_player_hit(&self.player.rect(), &self.enemies) else {
            return false;
        };

        self.collision_gate.trigger(now);
        self.enemies.retain(|e| e.id != enemy_id);
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.phase = Phase::Over;
        }
        true
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
