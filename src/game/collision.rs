use super::{Enemy, Projectile};

/// Axis-aligned bounding box in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Strict AABB overlap: rectangles that merely touch edges do not
/// collide.
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// Runs the projectile-vs-enemy pass and removes everything that hit.
///
/// Each projectile is tested against enemies in iteration order and
/// destroys at most the first overlapping one. An enemy taken out earlier
/// in the same pass cannot be matched by a later projectile. All removals
/// happen after the full pass so marking never disturbs the iteration.
/// Returns the number of enemies destroyed.
pub fn resolve_projectile_hits(projectiles: &mut Vec<Projectile>, enemies: &mut Vec<Enemy>) -> u32 {
    let mut hit_projectiles = Vec::new();
    let mut hit_enemies = Vec::new();

    for (p_idx, projectile) in projectiles.iter().enumerate() {
        let bullet_rect = projectile.rect();

        for (e_idx, enemy) in enemies.iter().enumerate() {
            if hit_enemies.contains(&e_idx) {
                continue;
            }
            if rects_overlap(&bullet_rect, &enemy.rect()) {
                hit_projectiles.push(p_idx);
                hit_enemies.push(e_idx);
                break;
            }
        }
    }

    let kills = hit_enemies.len() as u32;

    let mut idx = 0;
    projectiles.retain(|_| {
        let keep = !hit_projectiles.contains(&idx);
        idx += 1;
        keep
    });

    let mut idx = 0;
    enemies.retain(|_| {
        let keep = !hit_enemies.contains(&idx);
        idx += 1;
        keep
    });

    kills
}

/// Finds the first enemy overlapping the player, in iteration order.
/// Returns its id; the caller decides whether the damage gate is open.
pub fn find_player_hit(player_rect: &Rect, enemies: &[Enemy]) -> Option<u32> {
    enemies
        .iter()
        .find(|enemy| rects_overlap(player_rect, &enemy.rect()))
        .map(|enemy| enemy.id)
}
