//! # HTTP Server
//!
//! Combines the restaurant, dish and root routers behind CORS and request
//! tracing. A trailing slash is trimmed before routing, so `/dishes/` and
//! `/dishes` reach the same handler.

use std::net::SocketAddr;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::{Router, ServiceExt};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

use super::config::HttpServerConfig;
use super::dish_routes::dish_routes;
use super::observability_routes::root_routes;
use super::restaurant_routes::restaurant_routes;
use crate::gateway::QueryGateway;

/// Router with trailing-slash normalisation applied ahead of routing
pub type App = NormalizePath<Router>;

/// HTTP server for the query gateway
pub struct HttpServer {
    config: HttpServerConfig,
    app: App,
}

impl HttpServer {
    /// Create a server over an already-initialised gateway.
    ///
    /// The storage handle exists before any route is reachable.
    pub fn new(config: HttpServerConfig, gateway: QueryGateway) -> Self {
        let app = Self::build_app(&config, gateway);
        Self { config, app }
    }

    /// Wrap the router so paths are normalised before route matching.
    ///
    /// Router-level middleware runs after matching, so the normalisation
    /// layer has to sit outside the `Router`.
    pub fn build_app(config: &HttpServerConfig, gateway: QueryGateway) -> App {
        NormalizePath::trim_trailing_slash(Self::build_router(config, gateway))
    }

    /// Build the combined router with all endpoints
    pub fn build_router(config: &HttpServerConfig, gateway: QueryGateway) -> Router {
        Router::new()
            .merge(root_routes())
            .nest("/restaurants", restaurant_routes(gateway.clone()))
            .nest("/dishes", dish_routes(gateway))
            .layer(Self::cors_layer(config))
            .layer(TraceLayer::new_for_http())
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        if config.cors_origins.is_empty() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the app (for testing)
    pub fn app(self) -> App {
        self.app
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("listening at http://{}", listener.local_addr()?);

        axum::serve(listener, ServiceExt::<Request>::into_make_service(self.app)).await
    }
}
