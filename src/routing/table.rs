//! Route table construction.
//!
//! # Responsibilities
//! - Validate every descriptor and convert it into a typed `Route`
//! - Normalize route paths
//! - Record the "METHOD - PATH" startup listing
//!
//! # Design Decisions
//! - Built once by a pure fold over the descriptors; immutable afterwards
//! - Any invalid descriptor rejects the whole table (no partial tables)
//! - One handler per route; a repeated (method, path) keeps the first entry,
//!   and paths differing only in capture names or a trailing slash count as repeats
//! - A capture and a catch-all at the same position are rejected

use std::collections::HashSet;

use serde_json::Value;

use crate::config::schema::RouteDescriptor;
use crate::config::validation::{validate_route, ValidationError};
use crate::routing::method::{HttpMethod, ResponseKind};
use crate::routing::path::{normalize_url, patterns_conflict, to_router_path, trim_trailing_slash};

const BANNER_RULE: &str = "==========";

/// A validated route, ready to be registered.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub method: HttpMethod,
    pub kind: ResponseKind,
    /// Normalized path, relative to the base prefix.
    pub path: String,
    /// Router path without a trailing slash, captures named by position.
    pub pattern: String,
    /// File path (`file`) or template (`mock`).
    pub data: Value,
}

impl Route {
    pub fn listing_line(&self) -> String {
        format!("{} - {}", self.method, self.path)
    }
}

/// Immutable mapping from (method, path) to a response producer.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
    listing: Vec<String>,
    duplicates: usize,
}

impl RouteTable {
    /// Validate all descriptors and build the table in configuration order.
    pub fn build(descriptors: &[RouteDescriptor]) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();
        let mut table = RouteTable::default();
        let mut seen: HashSet<(HttpMethod, String)> = HashSet::new();

        for (index, descriptor) in descriptors.iter().enumerate() {
            let (kind, method) = match validate_route(index, descriptor) {
                Ok(parsed) => parsed,
                Err(mut route_errors) => {
                    errors.append(&mut route_errors);
                    continue;
                }
            };

            let path = normalize_url(&descriptor.url);
            let route = Route {
                method,
                kind,
                pattern: to_router_path(trim_trailing_slash(&path)),
                path,
                data: descriptor.data.clone(),
            };
            table.listing.push(route.listing_line());

            if let Some(other) = table
                .routes
                .iter()
                .find(|other| patterns_conflict(&other.pattern, &route.pattern))
            {
                errors.push(ValidationError::RouteConflict {
                    index,
                    url: descriptor.url.clone(),
                    other: other.path.clone(),
                });
                continue;
            }

            if !seen.insert((method, route.pattern.clone())) {
                tracing::warn!(
                    method = %method,
                    path = %route.path,
                    index,
                    "Duplicate route ignored, the first definition wins"
                );
                table.duplicates += 1;
                continue;
            }

            table.routes.push(route);
        }

        if errors.is_empty() {
            Ok(table)
        } else {
            Err(errors)
        }
    }

    /// Registered routes, in configuration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// One "METHOD - PATH" line per configured route.
    pub fn listing(&self) -> &[String] {
        &self.listing
    }

    /// Number of descriptors skipped as duplicates.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The startup listing block printed before the server binds.
    pub fn banner(&self) -> String {
        let mut lines = vec![BANNER_RULE.to_string(), "[APIURL_LIST]:".to_string()];
        lines.extend(self.listing.iter().cloned());
        lines.push(BANNER_RULE.to_string());
        lines.join("\n")
    }
}
