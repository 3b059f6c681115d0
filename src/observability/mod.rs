//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; every remote step of the bootstrap
//!   logs with fields, not formatted strings
//! - Level seeded from static config, overridable with `RUST_LOG`

pub mod logging;
