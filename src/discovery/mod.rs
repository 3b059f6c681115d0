//! Service discovery subsystem.
//!
//! # Data Flow
//! ```text
//! client.rs (Consul agent HTTP API)
//!     → KV reads feed config::resolver during bootstrap
//!     → agent service registration after the listener binds
//!
//! registration.rs
//!     → ServiceRegistration built once, never mutated after send
//!
//! registrar.rs
//!     → wraps the registry call with the non-fatal failure policy
//! ```
//!
//! # Design Decisions
//! - One client instance serves both the KV and the registration surface;
//!   both are reached through the same agent endpoint
//! - Registration failure never aborts startup: the service can serve
//!   traffic without being discoverable

pub mod client;
pub mod registrar;
pub mod registration;

pub use client::ConsulClient;
pub use registrar::{ServiceRegistrar, ServiceRegistry};
pub use registration::ServiceRegistration;
