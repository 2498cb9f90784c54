//! Headless simulation core for a top-down arena shooter
//!
//! The crate owns one actor, a pool of static targets, and a small weapon
//! arsenal, all advanced by an authoritative tick loop running as a tokio
//! task. Hosts drive a session through its [`SessionHandle`] and receive
//! state snapshots and combat events over a broadcast channel.

pub mod arena;
pub mod config;
pub mod host;
pub mod util;

pub use arena::{ArenaSession, SessionHandle};
pub use host::protocol::{HostCommand, HostMsg};
