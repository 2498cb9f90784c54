//! Target pool - the opposing entities

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Target maximum health
pub const MAX_HEALTH: i32 = 100;

/// Spawn ranges for randomized target placement
pub const SPAWN_MIN_X: f32 = 50.0;
pub const SPAWN_MAX_X: f32 = 750.0;
pub const SPAWN_MIN_Y: f32 = 50.0;
pub const SPAWN_MAX_Y: f32 = 550.0;

/// An opposing entity; damageable and removable, but inert
#[derive(Debug, Clone)]
pub struct Target {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub health: i32,
    pub max_health: i32,
}

/// Ordered set of live targets with monotonic ids
#[derive(Debug, Clone)]
pub struct TargetPool {
    targets: Vec<Target>,
    next_id: u32,
}

impl TargetPool {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            next_id: 0,
        }
    }

    /// Add a full-health target at a fixed position, returns its id
    pub fn spawn(&mut self, x: f32, y: f32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.targets.push(Target {
            id,
            x,
            y,
            health: MAX_HEALTH,
            max_health: MAX_HEALTH,
        });
        id
    }

    /// Add `count` targets at randomized positions
    pub fn spawn_wave(&mut self, count: usize, rng: &mut ChaCha8Rng) {
        for _ in 0..count {
            let x = rng.gen_range(SPAWN_MIN_X..SPAWN_MAX_X);
            let y = rng.gen_range(SPAWN_MIN_Y..SPAWN_MAX_Y);
            self.spawn(x, y);
        }
    }

    /// Drop every target whose health has reached zero
    pub fn remove_dead(&mut self) {
        self.targets.retain(|t| t.health > 0);
    }

    pub fn get(&self, id: u32) -> Option<&Target> {
        self.targets.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.targets.iter().any(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Target> {
        self.targets.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl Default for TargetPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn spawned_targets_get_monotonic_ids() {
        let mut pool = TargetPool::new();
        assert_eq!(pool.spawn(100.0, 100.0), 0);
        assert_eq!(pool.spawn(200.0, 200.0), 1);
        assert_eq!(pool.spawn(300.0, 300.0), 2);
        assert_eq!(pool.len(), 3);
        assert!(pool.contains(1));
        assert!(!pool.contains(3));
    }

    #[test]
    fn wave_positions_stay_in_spawn_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut pool = TargetPool::new();
        pool.spawn_wave(50, &mut rng);
        assert_eq!(pool.len(), 50);
        for target in pool.iter() {
            assert!(target.x >= SPAWN_MIN_X && target.x < SPAWN_MAX_X);
            assert!(target.y >= SPAWN_MIN_Y && target.y < SPAWN_MAX_Y);
            assert_eq!(target.health, MAX_HEALTH);
        }
    }

    #[test]
    fn same_seed_spawns_the_same_wave() {
        let mut pool_a = TargetPool::new();
        let mut pool_b = TargetPool::new();
        pool_a.spawn_wave(3, &mut ChaCha8Rng::seed_from_u64(99));
        pool_b.spawn_wave(3, &mut ChaCha8Rng::seed_from_u64(99));

        for (a, b) in pool_a.iter().zip(pool_b.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }

    #[test]
    fn remove_dead_drops_only_depleted_targets() {
        let mut pool = TargetPool::new();
        let a = pool.spawn(100.0, 100.0);
        let b = pool.spawn(200.0, 200.0);
        let c = pool.spawn(300.0, 300.0);

        for target in pool.iter_mut() {
            if target.id == b {
                target.health = 0;
            }
            if target.id == c {
                target.health = -15;
            }
        }
        pool.remove_dead();

        assert_eq!(pool.len(), 1);
        assert!(pool.contains(a));
        assert!(!pool.contains(b));
        assert!(!pool.contains(c));
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut pool = TargetPool::new();
        pool.spawn(100.0, 100.0);
        for target in pool.iter_mut() {
            target.health = 0;
        }
        pool.remove_dead();
        assert!(pool.is_empty());

        assert_eq!(pool.spawn(200.0, 200.0), 1);
    }
}
