//! Actor state, movement, and aiming

use super::MoveIntent;

/// Arena bounds, the inclusive clamp range for the actor
pub const ARENA_MIN_X: f32 = 20.0;
pub const ARENA_MAX_X: f32 = 780.0;
pub const ARENA_MIN_Y: f32 = 20.0;
pub const ARENA_MAX_Y: f32 = 580.0;

/// Movement speed in units per tick per axis
pub const MOVE_SPEED: f32 = 3.0;

/// Actor maximum health
pub const MAX_HEALTH: i32 = 100;

/// The controlled entity (authoritative)
#[derive(Debug, Clone)]
pub struct Actor {
    pub x: f32,
    pub y: f32,
    /// Facing angle in radians
    pub angle: f32,
    pub health: i32,
    pub max_health: i32,
}

impl Actor {
    pub fn new() -> Self {
        Self {
            x: 400.0,
            y: 300.0,
            angle: 0.0,
            health: MAX_HEALTH,
            max_health: MAX_HEALTH,
        }
    }

    /// Apply one tick of movement intent
    ///
    /// Opposing flags cancel arithmetically. The bounds clamp runs every
    /// tick whether or not any flag is set.
    pub fn advance(&mut self, intent: &MoveIntent, delta_ticks: f32) {
        let step = MOVE_SPEED * delta_ticks;
        if intent.up {
            self.y -= step;
        }
        if intent.down {
            self.y += step;
        }
        if intent.left {
            self.x -= step;
        }
        if intent.right {
            self.x += step;
        }

        self.x = self.x.clamp(ARENA_MIN_X, ARENA_MAX_X);
        self.y = self.y.clamp(ARENA_MIN_Y, ARENA_MAX_Y);
    }

    /// Face a point in arena coordinates, overwriting the previous angle
    pub fn aim(&mut self, target_x: f32, target_y: f32) {
        self.angle = (target_y - self.y).atan2(target_x - self.x);
    }

    /// Perturb the facing angle after a discharge
    pub fn apply_recoil(&mut self, offset: f32) {
        self.angle += offset;
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new()
    }
}
