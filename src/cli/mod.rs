//! CLI module for gourmet-gateway
//!
//! Provides command-line interface for:
//! - serve: Open the database and serve HTTP
//! - query: One-shot lookup printed as JSON

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, Operation};
pub use commands::{execute, load_config, open_gateway, query, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_json, write_json_to};
