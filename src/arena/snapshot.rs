//! Snapshot building for the host surface

use crate::host::protocol::{
    ActorSnapshot, ArenaEvent, HostMsg, SessionSnapshot, TargetSnapshot, WeaponSnapshot,
};

use super::session::{ArenaState, SessionPhase};

/// Decides when snapshots go out and assembles them from live state
pub struct SnapshotBuilder {
    ticks_since_snapshot: u32,
    snapshot_interval: u32,
}

impl SnapshotBuilder {
    pub fn new(snapshot_interval: u32) -> Self {
        Self {
            ticks_since_snapshot: 0,
            snapshot_interval,
        }
    }

    /// Check if it's time to send a snapshot
    pub fn should_send(&mut self) -> bool {
        self.ticks_since_snapshot += 1;
        if self.ticks_since_snapshot >= self.snapshot_interval {
            self.ticks_since_snapshot = 0;
            true
        } else {
            false
        }
    }

    /// Force snapshot on next check (used for important events)
    pub fn force_next(&mut self) {
        self.ticks_since_snapshot = self.snapshot_interval;
    }

    /// Assemble a snapshot message from the current state
    pub fn build(&self, state: &ArenaState, events: Vec<ArenaEvent>) -> HostMsg {
        let weapon = state.arsenal.active();

        HostMsg::Snapshot {
            tick: state.tick,
            actor: ActorSnapshot {
                x: state.actor.x,
                y: state.actor.y,
                angle: state.actor.angle,
                health: state.actor.health,
                max_health: state.actor.max_health,
            },
            targets: state
                .targets
                .iter()
                .map(|target| TargetSnapshot {
                    id: target.id,
                    x: target.x,
                    y: target.y,
                    health: target.health,
                    max_health: target.max_health,
                })
                .collect(),
            weapon: WeaponSnapshot {
                name: weapon.profile.name.to_string(),
                ammo: weapon.ammo,
                capacity: weapon.profile.capacity,
                damage: weapon.profile.damage,
                recoil: weapon.profile.recoil,
                fire_rate: weapon.profile.fire_rate,
            },
            session: SessionSnapshot {
                kills: state.stats.kills,
                score: state.stats.score,
                round: state.stats.round,
                running: state.phase == SessionPhase::Running,
            },
            events,
        }
    }
}
