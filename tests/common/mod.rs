//! Shared fixtures for HTTP route tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use gourmet_gateway::gateway::QueryGateway;
use gourmet_gateway::http_server::{App, HttpServer, HttpServerConfig};
use gourmet_gateway::storage::SqliteStore;
use serde_json::Value;
use tower::ServiceExt;

pub const SCHEMA: &str = "
    CREATE TABLE restaurants (
        id INTEGER PRIMARY KEY,
        name TEXT,
        cuisine TEXT,
        isVeg INTEGER,
        rating REAL,
        priceForTwo INTEGER,
        location TEXT,
        hasOutdoorSeating INTEGER,
        isLuxury INTEGER
    );
    CREATE TABLE dishes (
        id INTEGER PRIMARY KEY,
        name TEXT,
        price REAL,
        rating REAL,
        isVeg INTEGER
    );
";

pub const SEED: &str = "
    INSERT INTO restaurants VALUES (1, 'Spice Kitchen', 'Indian', 1, 4.5, 1500, 'MG Road', 1, 0);
    INSERT INTO restaurants VALUES (2, 'Olive Bistro', 'Italian', 0, 4.1, 2000, 'Indiranagar', 0, 1);
    INSERT INTO restaurants VALUES (3, 'Green Leaf', 'Italian', 1, 4.8, 1200, 'Koramangala', 1, 0);
    INSERT INTO restaurants VALUES (4, 'Casa Roma', 'Italian', 0, 3.9, 2500, 'Whitefield', 1, 1);
    INSERT INTO restaurants VALUES (5, 'Dragon Wok', 'Chinese', 0, 4.3, 1800, 'HSR Layout', 0, 0);
    INSERT INTO restaurants VALUES (6, 'Tandoor House', 'North Indian', 1, 4.0, 900, 'Jayanagar', 1, 0);

    INSERT INTO dishes VALUES (1, 'Paneer Butter Masala', 300, 4.5, 1);
    INSERT INTO dishes VALUES (2, 'Chicken Alfredo Pasta', 500, 4.7, 0);
    INSERT INTO dishes VALUES (3, 'Veg Hakka Noodles', 250, 4.3, 1);
    INSERT INTO dishes VALUES (4, 'Grilled Salmon', 650, 4.9, 0);
    INSERT INTO dishes VALUES (5, 'Margherita Pizza', 250, 4.2, 1);
";

/// Gateway over an in-memory database with schema and seed rows
pub fn seeded_gateway() -> QueryGateway {
    let store = SqliteStore::open_in_memory().unwrap();
    store.execute_batch(SCHEMA).unwrap();
    store.execute_batch(SEED).unwrap();
    QueryGateway::new(Arc::new(store))
}

/// Gateway over an in-memory database with schema and no rows
pub fn empty_gateway() -> QueryGateway {
    let store = SqliteStore::open_in_memory().unwrap();
    store.execute_batch(SCHEMA).unwrap();
    QueryGateway::new(Arc::new(store))
}

/// Gateway whose every query fails: the tables do not exist
pub fn broken_gateway() -> QueryGateway {
    QueryGateway::new(Arc::new(SqliteStore::open_in_memory().unwrap()))
}

pub fn router(gateway: QueryGateway) -> App {
    HttpServer::build_app(&HttpServerConfig::default(), gateway)
}

/// Issue a GET and return status plus raw body
pub async fn get_raw(router: App, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Issue a GET and parse the body as JSON
pub async fn get_json(router: App, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get_raw(router, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

/// Pull a numeric field out of every row of a collection
pub fn column(rows: &Value, field: &str) -> Vec<f64> {
    rows.as_array()
        .unwrap()
        .iter()
        .map(|row| row[field].as_f64().unwrap())
        .collect()
}
