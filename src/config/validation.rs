//! Static configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check endpoints look like base URLs
//! - Validate registration interval syntax
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::ServiceConfig;

/// A single semantic validation failure.
#[derive(Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate the static configuration, collecting every failure.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.service.name.trim().is_empty() {
        errors.push(ValidationError {
            field: "service.name",
            message: "must not be empty".to_string(),
        });
    }

    for (field, endpoint) in [
        ("consul.dev.address", &config.consul.dev),
        ("consul.prod.address", &config.consul.prod),
    ] {
        if !endpoint.address.starts_with("http://") && !endpoint.address.starts_with("https://") {
            errors.push(ValidationError {
                field,
                message: format!("{:?} is not an http(s) base URL", endpoint.address),
            });
        }
    }

    if config.queue.brokers.trim().is_empty() {
        errors.push(ValidationError {
            field: "queue.brokers",
            message: "must list at least one broker".to_string(),
        });
    }

    // Consul duration syntax: integer followed by s/m/h.
    let interval = &config.registration.check_interval;
    let valid_interval = interval
        .strip_suffix(['s', 'm', 'h'])
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()));
    if !valid_interval {
        errors.push(ValidationError {
            field: "registration.check_interval",
            message: format!("{:?} is not a duration like \"10s\"", interval),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
