//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! static config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//!
//! dynamic config (per bootstrap):
//!     environment.rs (APP_ENV → dev | prod, read once)
//!     → resolver.rs (KV store read under config/{service}/{env}/...)
//!     → typed scalars (listener port/address, mongo address)
//! ```
//!
//! # Design Decisions
//! - Static config is immutable once loaded; it only holds what cannot come
//!   from the KV store (where the KV store itself lives, service identity)
//! - Dynamic values are re-fetched on every resolve call; no local caching
//! - Validation separates syntactic (serde) from semantic checks

pub mod environment;
pub mod loader;
pub mod resolver;
pub mod schema;
pub mod validation;

pub use environment::Environment;
pub use loader::{load_config, load_or_default, ConfigError};
pub use resolver::{ConfigResolver, KvStore};
pub use schema::ServiceConfig;
