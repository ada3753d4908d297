//! gourmet-gateway - A read-only HTTP query gateway over a restaurants and
//! dishes database

pub mod cli;
pub mod gateway;
pub mod http_server;
pub mod storage;
