//! Deployment environment selection.
//!
//! Read once from `APP_ENV` at process start and immutable afterwards.
//! Anything other than `dev` (after trimming) is treated as production, so
//! a typo in the variable can never select a development Consul endpoint.

use std::fmt;

/// Environment variable consulted by [`Environment::from_env`].
pub const APP_ENV: &str = "APP_ENV";

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    Dev,
    #[default]
    Prod,
}

impl Environment {
    /// Select the environment from `APP_ENV`, defaulting to production.
    pub fn from_env() -> Self {
        match std::env::var(APP_ENV) {
            Ok(value) => Self::from_value(&value),
            Err(_) => Self::Prod,
        }
    }

    /// Parse a raw variable value; only a trimmed `dev` selects [`Dev`].
    ///
    /// [`Dev`]: Environment::Dev
    pub fn from_value(value: &str) -> Self {
        if value.trim() == "dev" {
            Self::Dev
        } else {
            Self::Prod
        }
    }

    /// Path segment used in KV namespacing.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Prod => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
