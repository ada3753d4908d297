//! CLI command implementations
//!
//! Both commands open the database before doing anything else, so a bad
//! path fails the boot instead of turning every lookup into a 500.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::gateway::{DishFilter, Envelope, GatewayResult, QueryGateway, RestaurantFilter};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::storage::SqliteStore;

use super::args::{Command, Operation};
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Configuration file read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "./gateway.json";

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            port,
            database,
        } => serve(config.as_deref(), port, database),
        Command::Query {
            config,
            database,
            operation,
        } => query(config.as_deref(), database, &operation),
    }
}

/// Resolve configuration: an explicit path must exist, the default path is
/// optional.
pub fn load_config(path: Option<&Path>) -> CliResult<HttpServerConfig> {
    let (path, required) = match path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_PATH), false),
    };

    if !required && !path.exists() {
        return Ok(HttpServerConfig::default());
    }

    HttpServerConfig::load(path).map_err(|e| {
        CliError::config_error(format!("Failed to load config {}: {}", path.display(), e))
    })
}

/// Open the shared store and wrap it in a gateway
pub fn open_gateway(database_path: &Path) -> CliResult<QueryGateway> {
    let store = SqliteStore::open(database_path).map_err(|e| {
        CliError::boot_failed(format!(
            "Failed to open database {}: {}",
            database_path.display(),
            e
        ))
    })?;
    Ok(QueryGateway::new(Arc::new(store)))
}

/// Start the HTTP server
///
/// 1. Load configuration and apply overrides
/// 2. Initialise logging
/// 3. Open the database
/// 4. Bind and serve
pub fn serve(
    config_path: Option<&Path>,
    port: Option<u16>,
    database: Option<PathBuf>,
) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(database) = database {
        config.database_path = database;
    }

    init_tracing(&config.log_filter);
    tracing::info!(
        database = %config.database_path.display(),
        addr = %config.socket_addr(),
        "starting gateway"
    );

    let gateway = open_gateway(&config.database_path)?;
    let server = HttpServer::new(config, gateway);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Execute one lookup and print its JSON body
///
/// A 404 or 500 outcome still prints its body, then fails the command.
pub fn query(
    config_path: Option<&Path>,
    database: Option<PathBuf>,
    operation: &Operation,
) -> CliResult<()> {
    let config = load_config(config_path)?;
    let database = database.unwrap_or(config.database_path);
    let gateway = open_gateway(&database)?;

    match execute(&gateway, operation) {
        Ok(envelope) => write_json(&envelope),
        Err(e) => {
            write_json(&e.body())?;
            Err(CliError::query_failed(format!(
                "{} ({})",
                e,
                e.status_code().as_u16()
            )))
        }
    }
}

/// Dispatch an operation to the gateway
pub fn execute(gateway: &QueryGateway, operation: &Operation) -> GatewayResult<Envelope> {
    match operation {
        Operation::Restaurants => gateway.list_restaurants(),
        Operation::Restaurant { id } => gateway.restaurant_by_id(id),
        Operation::Cuisine { cuisine } => gateway.restaurants_by_cuisine(cuisine),
        Operation::RestaurantFilter {
            is_veg,
            has_outdoor_seating,
            is_luxury,
        } => gateway.restaurants_by_filters(&RestaurantFilter {
            is_veg: is_veg.clone(),
            has_outdoor_seating: has_outdoor_seating.clone(),
            is_luxury: is_luxury.clone(),
        }),
        Operation::RestaurantsByRating => gateway.restaurants_sorted_by_rating(),
        Operation::Dishes => gateway.list_dishes(),
        Operation::Dish { id } => gateway.dish_by_id(id),
        Operation::DishFilter { is_veg } => gateway.dishes_by_filter(&DishFilter {
            is_veg: is_veg.clone(),
        }),
        Operation::DishesByPrice => gateway.dishes_sorted_by_price(),
    }
}

/// RUST_LOG wins over the configured filter
fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
