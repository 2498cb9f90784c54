//! Arena simulation modules

pub mod actor;
pub mod combat;
pub mod session;
pub mod snapshot;
pub mod targets;
pub mod weapons;

pub use actor::Actor;
pub use session::{ArenaSession, ArenaState, SessionHandle, SessionPhase};
pub use targets::{Target, TargetPool};

/// Persistent movement intent, replaced wholesale by each move command
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}
