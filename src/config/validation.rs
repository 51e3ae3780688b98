//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check each route's response type and method against the allow-lists
//! - Check that `file` routes name a path
//! - Check that the CORS table builds a usable layer
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before any socket is opened; any error is fatal

use thiserror::Error;

use crate::config::schema::{RouteDescriptor, ServerConfig};
use crate::http::cors::build_cors_layer;
use crate::routing::method::{join_allowed, HttpMethod, ResponseKind};

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("apis[{index}]: unsupported response type `{value}`, choose one of: {allowed}")]
    UnsupportedType {
        index: usize,
        value: String,
        allowed: String,
    },

    #[error("apis[{index}]: unsupported request method `{value}`, choose one of: {allowed}")]
    UnsupportedMethod {
        index: usize,
        value: String,
        allowed: String,
    },

    #[error("apis[{index}]: url must not be empty")]
    EmptyUrl { index: usize },

    #[error("apis[{index}] ({url}): file routes need `data` to be a file path string")]
    FileDataNotPath { index: usize, url: String },

    #[error("apis[{index}] ({url}): a capture and a catch-all cannot share a position with `{other}`")]
    RouteConflict {
        index: usize,
        url: String,
        other: String,
    },

    #[error("cors: {0}")]
    Cors(String),
}

/// Join errors into one line for display.
pub fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validate one route descriptor, returning its parsed response type and method.
///
/// The response type is checked before the method.
pub fn validate_route(
    index: usize,
    route: &RouteDescriptor,
) -> Result<(ResponseKind, HttpMethod), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let kind = match route.kind.parse::<ResponseKind>() {
        Ok(kind) => Some(kind),
        Err(_) => {
            errors.push(ValidationError::UnsupportedType {
                index,
                value: route.kind.to_lowercase(),
                allowed: join_allowed(ResponseKind::ALLOWED.iter().map(ResponseKind::as_str)),
            });
            None
        }
    };

    let method = match route.method.parse::<HttpMethod>() {
        Ok(method) => Some(method),
        Err(_) => {
            errors.push(ValidationError::UnsupportedMethod {
                index,
                value: route.method.to_lowercase(),
                allowed: join_allowed(HttpMethod::ALLOWED.iter().map(HttpMethod::as_lower)),
            });
            None
        }
    };

    if route.url.trim().is_empty() {
        errors.push(ValidationError::EmptyUrl { index });
    }

    if kind == Some(ResponseKind::File) && !route.data.is_string() {
        errors.push(ValidationError::FileDataNotPath {
            index,
            url: route.url.clone(),
        });
    }

    match (kind, method) {
        (Some(kind), Some(method)) if errors.is_empty() => Ok((kind, method)),
        _ => Err(errors),
    }
}

/// Validate the whole configuration.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors: Vec<ValidationError> = config
        .apis
        .iter()
        .enumerate()
        .filter_map(|(index, route)| validate_route(index, route).err())
        .flatten()
        .collect();

    if let Some(cors) = config.cors.as_ref().filter(|cors| cors.is_enabled()) {
        if let Err(e) = build_cors_layer(cors) {
            errors.push(e);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
