//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum Router from the route table
//! - Mount all routes under the base prefix, with and without a trailing slash
//! - Wire up middleware (request ID, access log, CORS, compression), with the
//!   access log outside CORS so short-circuited preflights are logged
//! - Serve on a bound listener until shutdown

use std::io;
use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::Request,
    routing::MethodRouter,
    Router,
};
use thiserror::Error;
use tokio::sync::broadcast;
use tower_http::compression::CompressionLayer;

use crate::config::validation::join_errors;
use crate::config::{ServerConfig, ValidationError};
use crate::http::cors::build_cors_layer;
use crate::http::request::with_request_id;
use crate::http::response::{mock_response, not_found, serve_file};
use crate::lifecycle::shutdown;
use crate::lifecycle::signals::shutdown_signal;
use crate::lifecycle::BoundListener;
use crate::observability::access_log::with_access_log;
use crate::routing::path::{
    join_base, normalize_base, to_router_path, trailing_slash_form, trim_trailing_slash,
};
use crate::routing::{ResponseKind, Route, RouteTable};

/// Error building the server from a configuration.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

/// The mock API server: an immutable route table plus the router built from it.
pub struct MockServer {
    router: Router,
    config: ServerConfig,
    table: RouteTable,
}

impl MockServer {
    /// Validate the routes and build the router.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let table = RouteTable::build(&config.apis).map_err(ServerError::Validation)?;
        let router = build_router(&config, &table)?;
        Ok(Self {
            router,
            config,
            table,
        })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn routes(&self) -> &RouteTable {
        &self.table
    }

    /// A handle to the router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve until a shutdown signal or `shutdown` fires.
    pub async fn run(
        self,
        listener: BoundListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), io::Error> {
        tracing::info!(
            routes = self.table.len(),
            base_url = %self.config.base_url,
            "HTTP server starting"
        );
        if self.table.is_empty() {
            tracing::warn!("No routes configured, every request gets the fallback");
        }

        let stop = async move {
            tokio::select! {
                _ = shutdown_signal() => {},
                _ = shutdown::wait(shutdown) => {},
            }
        };

        match listener {
            BoundListener::Tcp(listener) => {
                axum::serve(listener, self.router)
                    .with_graceful_shutdown(stop)
                    .await?
            }
            #[cfg(unix)]
            BoundListener::Unix { listener, path } => {
                let result = axum::serve(listener, self.router)
                    .with_graceful_shutdown(stop)
                    .await;
                let _ = std::fs::remove_file(&path);
                result?
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(config: &ServerConfig, table: &RouteTable) -> Result<Router, ServerError> {
    let root = config.asset_root();

    let base = normalize_base(&config.base_url);

    // One MethodRouter per distinct router path, in configuration order.
    let mut paths: Vec<(String, MethodRouter)> = Vec::new();
    for route in table.routes() {
        let full = join_base(base.as_deref(), &route.path);
        let pattern = to_router_path(trim_trailing_slash(&full));
        let index = match paths.iter().position(|(existing, _)| *existing == pattern) {
            Some(index) => index,
            None => {
                paths.push((pattern, MethodRouter::new()));
                paths.len() - 1
            }
        };
        let method_router = std::mem::replace(&mut paths[index].1, MethodRouter::new());
        paths[index].1 = register(method_router, route, &root);
    }

    let mut app = paths
        .into_iter()
        .fold(Router::new(), |router, (pattern, method_router)| {
            match trailing_slash_form(&pattern) {
                Some(alternate) => router
                    .route(&pattern, method_router.clone())
                    .route(&alternate, method_router),
                None => router.route(&pattern, method_router),
            }
        })
        .fallback(not_found);

    app = app.layer(CompressionLayer::new());

    if let Some(cors) = config.cors.as_ref().filter(|cors| cors.is_enabled()) {
        let layer = build_cors_layer(cors).map_err(|e| ServerError::Validation(vec![e]))?;
        app = app.layer(layer);
    }

    app = with_access_log(app);

    Ok(with_request_id(app))
}

/// Attach the response producer for `route` to `router`.
fn register(router: MethodRouter, route: &Route, root: &Path) -> MethodRouter {
    tracing::debug!(method = %route.method, path = %route.path, kind = %route.kind, "Registering route");

    match route.kind {
        ResponseKind::File => {
            let file = Arc::new(root.join(route.data.as_str().unwrap_or_default()));
            route.method.register(router, move |request: Request| {
                let file = Arc::clone(&file);
                async move { serve_file(&file, request).await }
            })
        }
        ResponseKind::Mock => {
            let template = Arc::new(route.data.clone());
            route
                .method
                .register(router, move || std::future::ready(mock_response(&template)))
        }
    }
}
