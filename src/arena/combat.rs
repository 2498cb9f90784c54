//! Combat resolution - hit detection, damage, recoil

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::actor::Actor;
use super::targets::TargetPool;
use super::weapons::{FireOutcome, WeaponState};

/// Distance within which a discharge strikes a target (strict)
pub const HIT_RADIUS: f32 = 50.0;

/// Scale applied to the recoil perturbation
pub const RECOIL_SCALE: f32 = 0.02;

/// Score awarded per kill
pub const KILL_SCORE: u32 = 100;

/// Hit on a single target from one discharge
#[derive(Debug, Clone, Copy)]
pub struct HitResult {
    pub target_id: u32,
    pub damage: i32,
    pub x: f32,
    pub y: f32,
    pub target_killed: bool,
}

/// Everything one fire command produced
#[derive(Debug, Clone, Default)]
pub struct FireReport {
    /// False when the magazine was empty
    pub discharged: bool,
    pub hits: Vec<HitResult>,
}

impl FireReport {
    pub fn kill_count(&self) -> u32 {
        self.hits.iter().filter(|h| h.target_killed).count() as u32
    }
}

/// Combat system for resolving discharges against the target pool
pub struct CombatResolver;

impl CombatResolver {
    /// Check whether an aim point strikes a target position
    pub fn check_hit(aim_x: f32, aim_y: f32, target_x: f32, target_y: f32) -> bool {
        let dx = aim_x - target_x;
        let dy = aim_y - target_y;
        let dist_sq = dx * dx + dy * dy;
        dist_sq < HIT_RADIUS * HIT_RADIUS
    }

    /// Apply damage to health, returns (new_health, killed)
    pub fn apply_damage(current_health: i32, damage: i32) -> (i32, bool) {
        let new_health = (current_health - damage).max(0);
        (new_health, new_health <= 0)
    }

    /// Angle offset for one discharge, uniform over the recoil band
    pub fn recoil_offset(recoil: f32, rng: &mut ChaCha8Rng) -> f32 {
        (recoil * rng.gen::<f32>() - recoil / 2.0) * RECOIL_SCALE
    }

    /// Resolve one fire command against every live target
    ///
    /// Hit detection is independent per target, so a single discharge can
    /// strike several. Targets driven to zero health are gone before this
    /// returns. The recoil perturbation lands on every discharge, hit or
    /// miss.
    pub fn resolve_fire(
        aim_x: f32,
        aim_y: f32,
        weapon: &mut WeaponState,
        targets: &mut TargetPool,
        actor: &mut Actor,
        rng: &mut ChaCha8Rng,
    ) -> FireReport {
        let mut report = FireReport::default();

        let (damage, recoil) = match weapon.fire() {
            FireOutcome::Discharged { damage, recoil } => (damage, recoil),
            FireOutcome::Empty => return report,
        };
        report.discharged = true;

        for target in targets.iter_mut() {
            if !Self::check_hit(aim_x, aim_y, target.x, target.y) {
                continue;
            }

            let (new_health, killed) = Self::apply_damage(target.health, damage);
            target.health = new_health;

            report.hits.push(HitResult {
                target_id: target.id,
                damage,
                x: target.x,
                y: target.y,
                target_killed: killed,
            });
        }
        targets.remove_dead();

        actor.apply_recoil(Self::recoil_offset(recoil, rng));

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::weapons::profile_by_name;
    use rand::SeedableRng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn test_weapon(name: &str) -> WeaponState {
        WeaponState::new(profile_by_name(name).unwrap())
    }

    #[test]
    fn hit_radius_is_strict() {
        // 30-40-50 triangle puts the aim point at exactly the radius
        assert!(!CombatResolver::check_hit(130.0, 140.0, 100.0, 100.0));
        assert!(CombatResolver::check_hit(129.0, 140.0, 100.0, 100.0));
        assert!(CombatResolver::check_hit(100.0, 100.0, 100.0, 100.0));
    }

    #[test]
    fn damage_floors_at_zero() {
        assert_eq!(CombatResolver::apply_damage(100, 36), (64, false));
        assert_eq!(CombatResolver::apply_damage(28, 28), (0, true));
        assert_eq!(CombatResolver::apply_damage(10, 115), (0, true));
    }

    #[test]
    fn awp_shot_kills_a_full_health_target() {
        let mut weapon = test_weapon("AWP");
        let mut targets = TargetPool::new();
        let id = targets.spawn(400.0, 300.0);
        let mut actor = Actor::new();
        let mut rng = test_rng();

        let report = CombatResolver::resolve_fire(
            410.0,
            300.0,
            &mut weapon,
            &mut targets,
            &mut actor,
            &mut rng,
        );

        assert!(report.discharged);
        assert_eq!(report.hits.len(), 1);
        assert!(report.hits[0].target_killed);
        assert_eq!(report.kill_count(), 1);
        assert_eq!(weapon.ammo, 9);
        assert!(!targets.contains(id));
    }

    #[test]
    fn glock_shot_wounds_and_leaves_the_target() {
        let mut weapon = test_weapon("Glock-18");
        let mut targets = TargetPool::new();
        let id = targets.spawn(400.0, 300.0);
        let mut actor = Actor::new();
        let mut rng = test_rng();

        let report = CombatResolver::resolve_fire(
            400.0,
            300.0,
            &mut weapon,
            &mut targets,
            &mut actor,
            &mut rng,
        );

        assert!(report.discharged);
        assert_eq!(report.hits.len(), 1);
        assert!(!report.hits[0].target_killed);
        assert_eq!(report.kill_count(), 0);
        assert_eq!(weapon.ammo, 19);
        assert_eq!(targets.get(id).unwrap().health, 72);
    }

    #[test]
    fn empty_weapon_resolves_to_nothing() {
        let mut weapon = test_weapon("Glock-18");
        weapon.ammo = 0;
        let mut targets = TargetPool::new();
        let id = targets.spawn(400.0, 300.0);
        let mut actor = Actor::new();
        actor.aim(450.0, 300.0);
        let mut rng = test_rng();

        let report = CombatResolver::resolve_fire(
            400.0,
            300.0,
            &mut weapon,
            &mut targets,
            &mut actor,
            &mut rng,
        );

        assert!(!report.discharged);
        assert!(report.hits.is_empty());
        assert_eq!(weapon.ammo, 0);
        assert_eq!(targets.get(id).unwrap().health, 100);
        // No discharge, no recoil
        assert_eq!(actor.angle, 0.0);
    }

    #[test]
    fn one_discharge_can_kill_two_targets() {
        let mut weapon = test_weapon("AWP");
        let mut targets = TargetPool::new();
        targets.spawn(390.0, 300.0);
        targets.spawn(410.0, 300.0);
        let survivor = targets.spawn(700.0, 500.0);
        let mut actor = Actor::new();
        let mut rng = test_rng();

        let report = CombatResolver::resolve_fire(
            400.0,
            300.0,
            &mut weapon,
            &mut targets,
            &mut actor,
            &mut rng,
        );

        assert_eq!(report.hits.len(), 2);
        assert_eq!(report.kill_count(), 2);
        assert_eq!(weapon.ammo, 9);
        assert_eq!(targets.len(), 1);
        assert!(targets.contains(survivor));
    }

    #[test]
    fn a_miss_still_spends_ammo_and_recoil() {
        let mut weapon = test_weapon("AK-47");
        let mut targets = TargetPool::new();
        targets.spawn(700.0, 500.0);
        let mut actor = Actor::new();
        actor.aim(450.0, 300.0);
        let mut rng = test_rng();

        let report = CombatResolver::resolve_fire(
            100.0,
            100.0,
            &mut weapon,
            &mut targets,
            &mut actor,
            &mut rng,
        );

        assert!(report.discharged);
        assert!(report.hits.is_empty());
        assert_eq!(weapon.ammo, 29);
        assert_ne!(actor.angle, 0.0);
    }

    #[test]
    fn recoil_offsets_stay_inside_the_scaled_band() {
        let mut rng = test_rng();
        let recoil = 12.0;
        let bound = recoil / 2.0 * RECOIL_SCALE;
        for _ in 0..1000 {
            let offset = CombatResolver::recoil_offset(recoil, &mut rng);
            assert!(offset >= -bound && offset < bound);
        }
    }
}
