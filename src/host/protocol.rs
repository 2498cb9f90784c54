//! Host protocol message definitions
//! These are the wire types for communication with the embedding host

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Commands sent from the host to the simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostCommand {
    /// Begin the session (sessions stay idle until this arrives)
    Start,

    /// Replace the current movement intent
    Move {
        up: bool,
        down: bool,
        left: bool,
        right: bool,
    },

    /// Aim at a point in arena coordinates
    Aim { x: f32, y: f32 },

    /// Fire the active weapon at a point
    Fire { x: f32, y: f32 },

    /// Refill the active weapon's magazine
    Reload,

    /// Switch the active weapon by catalog index
    SelectWeapon { index: usize },
}

/// Messages sent from the simulation to the host
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostMsg {
    /// Session is up and accepting commands
    Ready { session_id: Uuid, seed: u64 },

    /// Session has started
    Started { tick: u64 },

    /// Simulation state snapshot (sent at regular intervals)
    Snapshot {
        /// Session tick number
        tick: u64,
        actor: ActorSnapshot,
        targets: Vec<TargetSnapshot>,
        /// Active weapon only
        weapon: WeaponSnapshot,
        session: SessionSnapshot,
        /// Events that occurred since last snapshot
        events: Vec<ArenaEvent>,
    },
}

/// Actor state in a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorSnapshot {
    /// Position X
    pub x: f32,
    /// Position Y
    pub y: f32,
    /// Facing angle in radians
    pub angle: f32,
    pub health: i32,
    pub max_health: i32,
}

/// Target state in a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSnapshot {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub health: i32,
    pub max_health: i32,
}

/// Active weapon state in a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponSnapshot {
    pub name: String,
    pub ammo: u32,
    pub capacity: u32,
    /// Damage per confirmed hit
    pub damage: i32,
    /// Recoil magnitude applied per discharge
    pub recoil: f32,
    /// Informational cadence, rounds per minute
    pub fire_rate: u32,
}

/// Session counters in a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub kills: u32,
    pub score: u32,
    pub round: u32,
    /// False until the start command is processed
    pub running: bool,
}

/// Simulation events (hits, kills)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum ArenaEvent {
    /// Discharge struck a target
    Hit {
        target_id: u32,
        damage: i32,
        x: f32,
        y: f32,
    },

    /// Target destroyed
    Kill { target_id: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_decode_from_tagged_json() {
        let cmd: HostCommand =
            serde_json::from_str(r#"{"type":"fire","x":450.0,"y":300.0}"#).unwrap();
        match cmd {
            HostCommand::Fire { x, y } => {
                assert_eq!(x, 450.0);
                assert_eq!(y, 300.0);
            }
            other => panic!("decoded wrong variant: {:?}", other),
        }

        let cmd: HostCommand = serde_json::from_str(
            r#"{"type":"move","up":true,"down":false,"left":false,"right":true}"#,
        )
        .unwrap();
        assert!(matches!(
            cmd,
            HostCommand::Move {
                up: true,
                down: false,
                left: false,
                right: true,
            }
        ));
    }

    #[test]
    fn select_weapon_carries_the_index() {
        let cmd: HostCommand =
            serde_json::from_str(r#"{"type":"select_weapon","index":2}"#).unwrap();
        assert!(matches!(cmd, HostCommand::SelectWeapon { index: 2 }));
    }

    #[test]
    fn messages_encode_with_snake_case_tags() {
        let msg = HostMsg::Ready {
            session_id: Uuid::nil(),
            seed: 7,
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""type":"ready""#));
        assert!(json.contains(r#""seed":7"#));

        let event = ArenaEvent::Kill { target_id: 3 };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""event_type":"kill""#));
        assert!(json.contains(r#""target_id":3"#));
    }
}
