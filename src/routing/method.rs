//! Route method and response type enumerations.
//!
//! Both are parsed case-insensitively from the raw config strings and
//! map to a fixed allow-list. Anything else is a validation error.

use std::fmt;
use std::str::FromStr;

use axum::handler::Handler;
use axum::routing::MethodRouter;

/// The HTTP verbs a route may be registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub const ALLOWED: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
    ];

    /// Upper-case verb, as used in the route listing.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// Lower-case verb, as written in config files.
    pub fn as_lower(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
        }
    }

    /// Attach `handler` to `router` under this verb.
    pub fn register<H, T, S>(self, router: MethodRouter<S>, handler: H) -> MethodRouter<S>
    where
        H: Handler<T, S>,
        T: 'static,
        S: Clone + Send + Sync + 'static,
    {
        match self {
            HttpMethod::Get => router.get(handler),
            HttpMethod::Post => router.post(handler),
            HttpMethod::Put => router.put(handler),
            HttpMethod::Delete => router.delete(handler),
            HttpMethod::Patch => router.patch(handler),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is outside an allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotAllowed(pub String);

impl FromStr for HttpMethod {
    type Err = NotAllowed;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "get" => Ok(HttpMethod::Get),
            "post" => Ok(HttpMethod::Post),
            "put" => Ok(HttpMethod::Put),
            "delete" => Ok(HttpMethod::Delete),
            "patch" => Ok(HttpMethod::Patch),
            other => Err(NotAllowed(other.to_string())),
        }
    }
}

/// How a route produces its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    /// Serve a file from disk.
    File,
    /// Generate data from a template.
    Mock,
}

impl ResponseKind {
    pub const ALLOWED: [ResponseKind; 2] = [ResponseKind::File, ResponseKind::Mock];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::File => "file",
            ResponseKind::Mock => "mock",
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseKind {
    type Err = NotAllowed;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(ResponseKind::File),
            "mock" => Ok(ResponseKind::Mock),
            other => Err(NotAllowed(other.to_string())),
        }
    }
}

/// Join allow-list entries for diagnostics: "get, post, put".
pub fn join_allowed<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse_is_case_insensitive() {
        assert_eq!("GET".parse::<HttpMethod>(), Ok(HttpMethod::Get));
        assert_eq!("Patch".parse::<HttpMethod>(), Ok(HttpMethod::Patch));
        assert_eq!(" delete ".parse::<HttpMethod>(), Ok(HttpMethod::Delete));
        assert_eq!(
            "OPTIONS".parse::<HttpMethod>(),
            Err(NotAllowed("options".into()))
        );
        assert!("".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("File".parse::<ResponseKind>(), Ok(ResponseKind::File));
        assert_eq!("MOCK".parse::<ResponseKind>(), Ok(ResponseKind::Mock));
        assert!("json".parse::<ResponseKind>().is_err());
    }

    #[test]
    fn test_allowed_lists() {
        assert_eq!(
            join_allowed(HttpMethod::ALLOWED.iter().map(HttpMethod::as_lower)),
            "get, post, put, delete, patch"
        );
        assert_eq!(
            join_allowed(ResponseKind::ALLOWED.iter().map(ResponseKind::as_str)),
            "file, mock"
        );
    }
}
