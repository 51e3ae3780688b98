//! Route path normalization.
//!
//! # Design Decisions
//! - Backslashes count as separators and become forward slashes
//! - `.` and `..` segments resolve like a POSIX path join, never above root
//! - Every path is absolute; a trailing slash is kept
//! - Express-style `:param` and `*` segments translate to positional router captures
//! - Routes answer with and without a trailing slash

/// Normalize a configured URL into an absolute, forward-slash path.
pub fn normalize_url(url: &str) -> String {
    let url = url.trim().replace('\\', "/");
    let trailing = url.len() > 1 && url.ends_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in url.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut path = format!("/{}", segments.join("/"));
    if trailing && path != "/" {
        path.push('/');
    }
    path
}

/// Normalize the base path prefix. Empty and "/" both mean "mount at root".
pub fn normalize_base(base: &str) -> Option<String> {
    let base = normalize_url(base);
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

/// Name of the trailing catch-all capture.
pub const CATCH_ALL: &str = "{*rest}";

/// Join the base prefix and a route path into one normalized path.
pub fn join_base(base: Option<&str>, path: &str) -> String {
    match base {
        Some(base) => normalize_url(&format!("{}/{}", base, path)),
        None => normalize_url(path),
    }
}

/// Drop a trailing slash, keeping the root itself.
pub fn trim_trailing_slash(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Translate a normalized path into the router's capture syntax.
///
/// Captures are named by position (`/user/:id` becomes `/user/{p0}`), so
/// routes that differ only in capture names share one router entry. A final
/// `*` segment becomes the catch-all, any other `:` or `*` segment a single
/// capture. Literal braces are escaped.
pub fn to_router_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').collect();
    let last = segments.len().saturating_sub(1);
    let mut captures = 0;

    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            if i == last && segment.starts_with('*') {
                CATCH_ALL.to_string()
            } else if segment.starts_with(':') || segment.starts_with('*') {
                let capture = format!("{{p{}}}", captures);
                captures += 1;
                capture
            } else {
                segment.replace('{', "{{").replace('}', "}}")
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// The same router path with a trailing slash, when one can be added.
pub fn trailing_slash_form(pattern: &str) -> Option<String> {
    if pattern == "/" || pattern.ends_with(CATCH_ALL) {
        None
    } else {
        Some(format!("{}/", pattern))
    }
}

/// Whether two router paths cannot be registered side by side: at the first
/// segment where they differ, one has the catch-all and the other a capture.
pub fn patterns_conflict(a: &str, b: &str) -> bool {
    let is_capture = |segment: &str| segment.starts_with("{p");
    a.split('/')
        .zip(b.split('/'))
        .find(|(x, y)| x != y)
        .is_some_and(|(x, y)| {
            (x == CATCH_ALL && is_capture(y)) || (y == CATCH_ALL && is_capture(x))
        })
}
