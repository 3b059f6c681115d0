//! Flight status service bootstrap library.
//!
//! # Architecture Overview
//!
//! ```text
//!                ┌──────────────────────────────────────────────────────┐
//!                │                 FLIGHT STATUS SERVICE                │
//!                │                                                      │
//!   APP_ENV ─────┼─▶ config::environment ──┐                            │
//!                │                         ▼                            │
//!                │  ┌──────────┐   ┌───────────────┐   ┌─────────────┐  │
//!   Consul KV ◀──┼──│discovery │◀──│   lifecycle   │──▶│    http     │──┼──▶ clients
//!                │  │  client  │   │   startup     │   │ /health /api│  │
//!   Consul ◀─────┼──│ register │   │ (state.rs)    │   └─────────────┘  │
//!   agent        │  └──────────┘   └──────┬────────┘                    │
//!                │                        │ connect (concurrent)        │
//!                │            ┌───────────┴───────────┐                 │
//!                │            ▼                       ▼                 │
//!                │     ┌────────────┐          ┌────────────┐           │
//!   Kafka ◀──────┼─────│   queue    │          │   store    │──────────┼──▶ MongoDB
//!                │     │  producer  │          │ documents  │           │
//!                │     └────────────┘          └────────────┘           │
//!                └──────────────────────────────────────────────────────┘
//! ```
//!
//! The lifecycle module owns the startup sequence: resolve listener config
//! from the KV store, bind, then connect the queue producer and document
//! store while registering with discovery. Everything downstream of `/api`
//! is a domain collaborator, out of scope here.

// Core subsystems
pub mod config;
pub mod discovery;
pub mod http;

// Dependent connections
pub mod queue;
pub mod store;

// Cross-cutting concerns
pub mod errors;
pub mod lifecycle;
pub mod observability;

pub use config::{Environment, ServiceConfig};
pub use errors::BootstrapError;
pub use http::HttpServer;
pub use lifecycle::{Bootstrap, BootstrapState, Ready, Shutdown};
