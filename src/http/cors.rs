//! CORS layer construction from the `cors` config table.
//!
//! # Design Decisions
//! - Defaults: any origin, methods
//!   GET,HEAD,PUT,PATCH,POST,DELETE, request headers mirrored
//! - Credentials cannot be combined with a wildcard; this is reported as a
//!   config error instead of failing when the layer is installed

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer, ExposeHeaders};

use crate::config::schema::{CorsConfig, OriginSetting};
use crate::config::validation::ValidationError;

pub const DEFAULT_METHODS: &[&str] = &["GET", "HEAD", "PUT", "PATCH", "POST", "DELETE"];

/// Build a `CorsLayer` for an enabled CORS table.
pub fn build_cors_layer(config: &CorsConfig) -> Result<CorsLayer, ValidationError> {
    let credentials = config.credentials.unwrap_or(false);

    let (origin, wildcard_origin) = match &config.origin {
        None => (AllowOrigin::any(), true),
        Some(OriginSetting::Enabled(true)) => (AllowOrigin::mirror_request(), false),
        Some(OriginSetting::Enabled(false)) => {
            return Err(ValidationError::Cors("origin `false` disables CORS".to_string()))
        }
        Some(OriginSetting::Single(origin)) if origin.trim() == "*" => (AllowOrigin::any(), true),
        Some(OriginSetting::Single(origin)) => (AllowOrigin::exact(header_value(origin)?), false),
        Some(OriginSetting::List(origins)) if origins.iter().any(|o| o.trim() == "*") => {
            (AllowOrigin::any(), true)
        }
        Some(OriginSetting::List(origins)) => {
            let values = origins
                .iter()
                .map(|origin| header_value(origin))
                .collect::<Result<Vec<_>, _>>()?;
            (AllowOrigin::list(values), false)
        }
    };

    let methods = match &config.methods {
        Some(methods) => methods.items(),
        None => DEFAULT_METHODS.iter().map(|m| m.to_string()).collect(),
    };
    let methods = methods
        .iter()
        .map(|method| {
            Method::from_bytes(method.to_uppercase().as_bytes())
                .map_err(|_| ValidationError::Cors(format!("invalid method `{}`", method)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let (headers, wildcard_headers) = match &config.allowed_headers {
        None => (AllowHeaders::mirror_request(), false),
        Some(list) if list.items().iter().any(|h| h == "*") => (AllowHeaders::any(), true),
        Some(list) => (AllowHeaders::list(header_names(&list.items())?), false),
    };

    let mut layer = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::list(methods))
        .allow_headers(headers);

    let mut wildcard_expose = false;
    if let Some(list) = &config.exposed_headers {
        let items = list.items();
        if items.iter().any(|h| h == "*") {
            wildcard_expose = true;
            layer = layer.expose_headers(ExposeHeaders::any());
        } else {
            layer = layer.expose_headers(ExposeHeaders::list(header_names(&items)?));
        }
    }

    if credentials {
        if wildcard_origin || wildcard_headers || wildcard_expose {
            return Err(ValidationError::Cors(
                "`credentials` cannot be combined with a `*` origin or header list".to_string(),
            ));
        }
        layer = layer.allow_credentials(true);
    }

    if let Some(max_age) = config.max_age {
        layer = layer.max_age(Duration::from_secs(max_age));
    }

    Ok(layer)
}

fn header_value(value: &str) -> Result<HeaderValue, ValidationError> {
    HeaderValue::from_str(value.trim())
        .map_err(|_| ValidationError::Cors(format!("invalid origin `{}`", value)))
}

fn header_names(items: &[String]) -> Result<Vec<HeaderName>, ValidationError> {
    items
        .iter()
        .map(|item| {
            HeaderName::from_bytes(item.to_lowercase().as_bytes())
                .map_err(|_| ValidationError::Cors(format!("invalid header name `{}`", item)))
        })
        .collect()
}
