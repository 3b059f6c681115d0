//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Resolve config → Bind listener → Connect dependencies ∥ Register
//!         → Ready (state.rs tracks every stage)
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain connections → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Startup ordering is the core contract: config before bind, bind before
//!   registration; dependency connects overlap with serving
//! - Fatal startup errors surface to the entry point; no self-healing

pub mod shutdown;
pub mod signals;
pub mod startup;
pub mod state;

pub use shutdown::Shutdown;
pub use startup::{Bootstrap, Ready};
pub use state::{BootstrapState, StageTracker};
