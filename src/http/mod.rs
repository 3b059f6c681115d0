//! HTTP surface subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router, middleware stack, bind/serve split)
//!     → revive.rs (JSON body date revival before handlers)
//!     → GET /health  → fixed "UP" answer, polled by the registry
//!     → /api/...     → routes.rs (domain routing collaborator, out of scope)
//! ```
//!
//! # Design Decisions
//! - Bind and serve are separate steps: the orchestrator needs the bound
//!   address before registration, and the health endpoint must answer as
//!   soon as the socket is open
//! - /health is wired here, not in /api: it must exist independent of any
//!   domain routing

pub mod revive;
pub mod routes;
pub mod server;

pub use server::{BoundServer, HttpServer};
