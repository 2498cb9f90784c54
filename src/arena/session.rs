//! Session state and authoritative tick loop

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::{broadcast, mpsc};
use tokio::time::interval;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::host::protocol::{ArenaEvent, HostCommand, HostMsg};
use crate::util::time::{tick_duration, SIMULATION_TPS, SNAPSHOT_TPS};

use super::actor::Actor;
use super::combat::{CombatResolver, FireReport, KILL_SCORE};
use super::snapshot::SnapshotBuilder;
use super::targets::TargetPool;
use super::weapons::Arsenal;
use super::MoveIntent;

/// Number of targets spawned at session start
const TARGET_COUNT: usize = 3;

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for the start command
    Idle,
    /// Simulation advancing, commands accepted
    Running,
}

/// Session counters
#[derive(Debug, Clone, Copy)]
pub struct SessionStats {
    pub kills: u32,
    pub score: u32,
    pub round: u32,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self {
            kills: 0,
            score: 0,
            round: 1,
        }
    }
}

/// Simulation state (owned by the session task)
pub struct ArenaState {
    pub id: Uuid,
    pub seed: u64,
    pub phase: SessionPhase,
    pub tick: u64,
    pub actor: Actor,
    pub targets: TargetPool,
    pub arsenal: Arsenal,
    pub stats: SessionStats,
    pub intent: MoveIntent,
    pub rng: ChaCha8Rng,
}

impl ArenaState {
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut targets = TargetPool::new();
        targets.spawn_wave(TARGET_COUNT, &mut rng);

        Self {
            id: Uuid::new_v4(),
            seed,
            phase: SessionPhase::Idle,
            tick: 0,
            actor: Actor::new(),
            targets,
            arsenal: Arsenal::new(),
            stats: SessionStats::default(),
            intent: MoveIntent::default(),
            rng,
        }
    }

    /// Apply one host command
    ///
    /// Idle sessions drop movement, fire, and reload; aiming and weapon
    /// selection go through in either phase.
    pub fn apply_command(&mut self, command: HostCommand) -> FireReport {
        let mut report = FireReport::default();

        match command {
            HostCommand::Start => {
                if self.phase == SessionPhase::Idle {
                    self.phase = SessionPhase::Running;
                }
            }
            HostCommand::Aim { x, y } => {
                self.actor.aim(x, y);
            }
            HostCommand::SelectWeapon { index } => {
                if !self.arsenal.select(index) {
                    warn!(session_id = %self.id, index, "Ignoring out-of-range weapon selection");
                }
            }
            HostCommand::Move {
                up,
                down,
                left,
                right,
            } => {
                if self.phase == SessionPhase::Running {
                    self.intent = MoveIntent {
                        up,
                        down,
                        left,
                        right,
                    };
                } else {
                    debug!(session_id = %self.id, "Dropping movement while idle");
                }
            }
            HostCommand::Fire { x, y } => {
                if self.phase == SessionPhase::Running {
                    report = CombatResolver::resolve_fire(
                        x,
                        y,
                        self.arsenal.active_mut(),
                        &mut self.targets,
                        &mut self.actor,
                        &mut self.rng,
                    );
                } else {
                    debug!(session_id = %self.id, "Dropping fire while idle");
                }
            }
            HostCommand::Reload => {
                if self.phase == SessionPhase::Running {
                    self.arsenal.active_mut().reload();
                } else {
                    debug!(session_id = %self.id, "Dropping reload while idle");
                }
            }
        }

        report
    }

    /// Fold a fire report into the session counters and the event feed
    pub fn apply_fire_report(&mut self, report: &FireReport, events: &mut Vec<ArenaEvent>) {
        for hit in &report.hits {
            events.push(ArenaEvent::Hit {
                target_id: hit.target_id,
                damage: hit.damage,
                x: hit.x,
                y: hit.y,
            });

            if hit.target_killed {
                self.stats.kills += 1;
                self.stats.score += KILL_SCORE;
                events.push(ArenaEvent::Kill {
                    target_id: hit.target_id,
                });
            }
        }

        if report.kill_count() > 0 && self.targets.is_empty() {
            info!(
                session_id = %self.id,
                kills = self.stats.kills,
                score = self.stats.score,
                "Target pool cleared"
            );
        }
    }

    /// Run a single simulation tick
    pub fn advance_tick(&mut self) {
        self.tick += 1;

        match self.phase {
            SessionPhase::Idle => {
                // Hold position until the start command
            }
            SessionPhase::Running => {
                self.actor.advance(&self.intent, 1.0);
            }
        }
    }
}

/// Handle to a running session
#[derive(Clone)]
pub struct SessionHandle {
    pub id: Uuid,
    pub command_tx: mpsc::Sender<HostCommand>,
    pub msg_tx: broadcast::Sender<HostMsg>,
}

impl SessionHandle {
    /// Open a fresh receiver for session messages
    pub fn subscribe(&self) -> broadcast::Receiver<HostMsg> {
        self.msg_tx.subscribe()
    }
}

/// The authoritative simulation session
pub struct ArenaSession {
    state: ArenaState,
    command_rx: mpsc::Receiver<HostCommand>,
    msg_tx: broadcast::Sender<HostMsg>,
    snapshot_builder: SnapshotBuilder,
    pending_events: Vec<ArenaEvent>,
}

impl ArenaSession {
    /// Create a new session and a handle to drive it
    pub fn new(seed: u64) -> (Self, SessionHandle) {
        let (command_tx, command_rx) = mpsc::channel(256);
        let (msg_tx, _) = broadcast::channel(64);

        let state = ArenaState::new(seed);
        let handle = SessionHandle {
            id: state.id,
            command_tx,
            msg_tx: msg_tx.clone(),
        };

        let snapshot_interval = SIMULATION_TPS / SNAPSHOT_TPS;
        let session = Self {
            state,
            command_rx,
            msg_tx,
            snapshot_builder: SnapshotBuilder::new(snapshot_interval),
            pending_events: Vec::new(),
        };

        (session, handle)
    }

    /// Run the authoritative tick loop
    pub async fn run(mut self) {
        info!(session_id = %self.state.id, seed = self.state.seed, "Session ready");

        let _ = self.msg_tx.send(HostMsg::Ready {
            session_id: self.state.id,
            seed: self.state.seed,
        });

        let mut tick_interval = interval(tick_duration());
        tick_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tick_interval.tick().await;

            // Drain the command queue
            let open = self.process_commands();

            // Run simulation tick
            self.state.advance_tick();

            // Build and broadcast snapshot if due
            if self.snapshot_builder.should_send() {
                let events = std::mem::take(&mut self.pending_events);
                let snapshot = self.snapshot_builder.build(&self.state, events);
                let _ = self.msg_tx.send(snapshot);
            }

            // Every handle dropped, tear the session down
            if !open {
                info!(session_id = %self.state.id, tick = self.state.tick, "Session torn down");
                break;
            }
        }
    }

    /// Process all pending host commands, returns false once the command
    /// channel has closed
    fn process_commands(&mut self) -> bool {
        loop {
            match self.command_rx.try_recv() {
                Ok(command) => self.apply(command),
                Err(TryRecvError::Empty) => return true,
                Err(TryRecvError::Disconnected) => return false,
            }
        }
    }

    fn apply(&mut self, command: HostCommand) {
        let was_idle = self.state.phase == SessionPhase::Idle;
        let report = self.state.apply_command(command);

        if was_idle && self.state.phase == SessionPhase::Running {
            info!(session_id = %self.state.id, tick = self.state.tick, "Session started");
            let _ = self.msg_tx.send(HostMsg::Started {
                tick: self.state.tick,
            });
        }

        // Kills push the next snapshot out early
        if report.kill_count() > 0 {
            self.snapshot_builder.force_next();
        }

        self.state.apply_fire_report(&report, &mut self.pending_events);
    }
}
