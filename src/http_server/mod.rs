//! # HTTP Server Module
//!
//! Axum front end for the query gateway.
//!
//! # Endpoints
//!
//! - `/` - Welcome text
//! - `/health` - Health check
//! - `/restaurants/*` - Restaurant lookups
//! - `/dishes/*` - Dish lookups

pub mod config;
pub mod dish_routes;
pub mod observability_routes;
pub mod restaurant_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::{App, HttpServer};
