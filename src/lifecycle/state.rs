//! Bootstrap state machine.
//!
//! # States
//! ```text
//! Unconfigured → Configured → Listening → DependenciesConnected → Registered
//!       \____________\____________\____________\________________→ Failed
//! ```
//!
//! # Design Decisions
//! - Transitions are monotonic forward; a stale or backward advance is
//!   ignored rather than panicking
//! - Failed is terminal and reachable from any non-terminal stage
//! - Published through a watch channel so tests assert transitions directly
//!   instead of inferring them from side effects

use tokio::sync::watch;

/// The stage the bootstrap sequence has reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapState {
    /// Nothing resolved yet.
    Unconfigured,
    /// Listener port and address resolved from the KV store.
    Configured,
    /// Listener bound; health endpoint answering.
    Listening,
    /// Queue producer and document store connected.
    DependenciesConnected,
    /// Discovery registry accepted the registration.
    Registered,
    /// Startup aborted; terminal.
    Failed { reason: String },
}

impl BootstrapState {
    fn rank(&self) -> u8 {
        match self {
            Self::Unconfigured => 0,
            Self::Configured => 1,
            Self::Listening => 2,
            Self::DependenciesConnected => 3,
            Self::Registered => 4,
            Self::Failed { .. } => 5,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Single-writer tracker for the process-wide bootstrap state.
///
/// Only the orchestrator advances it; everyone else observes through
/// [`subscribe`](StageTracker::subscribe).
pub struct StageTracker {
    tx: watch::Sender<BootstrapState>,
}

impl StageTracker {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(BootstrapState::Unconfigured);
        Self { tx }
    }

    /// Current state snapshot.
    pub fn current(&self) -> BootstrapState {
        self.tx.borrow().clone()
    }

    /// Observe state transitions.
    pub fn subscribe(&self) -> watch::Receiver<BootstrapState> {
        self.tx.subscribe()
    }

    /// Advance to `next` if it is strictly forward of the current stage.
    pub fn advance(&self, next: BootstrapState) {
        self.tx.send_if_modified(|current| {
            if current.is_terminal() || next.rank() <= current.rank() {
                return false;
            }
            *current = next.clone();
            true
        });
    }

    /// Enter the terminal failure state, unless already terminal.
    pub fn fail(&self, reason: impl Into<String>) {
        self.advance(BootstrapState::Failed {
            reason: reason.into(),
        });
    }
}

impl Default for StageTracker {
    fn default() -> Self {
        Self::new()
    }
}
