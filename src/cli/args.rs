//! CLI argument definitions using clap
//!
//! Commands:
//! - gourmet-gateway serve [--config <path>] [--port <port>] [--database <path>]
//! - gourmet-gateway query [--config <path>] [--database <path>] <operation>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gourmet-gateway - read-only restaurant and dish lookups over HTTP
#[derive(Parser, Debug)]
#[command(name = "gourmet-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the database and serve HTTP until stopped
    Serve {
        /// Path to configuration file [default: ./gateway.json if present]
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overrides the configuration file
        #[arg(short, long)]
        port: Option<u16>,

        /// SQLite database file, overrides the configuration file
        #[arg(long)]
        database: Option<PathBuf>,
    },

    /// Run a single lookup, print the JSON body and exit
    Query {
        /// Path to configuration file [default: ./gateway.json if present]
        #[arg(long)]
        config: Option<PathBuf>,

        /// SQLite database file, overrides the configuration file
        #[arg(long)]
        database: Option<PathBuf>,

        #[command(subcommand)]
        operation: Operation,
    },
}

/// Gateway operations reachable from the command line
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// All restaurants
    Restaurants,
    /// One restaurant by id
    Restaurant { id: String },
    /// Restaurants with an exact cuisine
    Cuisine { cuisine: String },
    /// Restaurants matching all three flags
    RestaurantFilter {
        #[arg(long)]
        is_veg: Option<String>,
        #[arg(long)]
        has_outdoor_seating: Option<String>,
        #[arg(long)]
        is_luxury: Option<String>,
    },
    /// Restaurants by rating, highest first
    RestaurantsByRating,
    /// All dishes
    Dishes,
    /// One dish by id
    Dish { id: String },
    /// Dishes matching the veg flag
    DishFilter {
        #[arg(long)]
        is_veg: Option<String>,
    },
    /// Dishes by price, cheapest first
    DishesByPrice,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "gourmet-gateway",
            "serve",
            "--port",
            "8080",
            "--database",
            "/tmp/food.sqlite",
        ])
        .unwrap();

        match cli.command {
            Command::Serve {
                config,
                port,
                database,
            } => {
                assert_eq!(config, None);
                assert_eq!(port, Some(8080));
                assert_eq!(database, Some(PathBuf::from("/tmp/food.sqlite")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_query_filter() {
        let cli = Cli::try_parse_from([
            "gourmet-gateway",
            "query",
            "restaurant-filter",
            "--is-veg",
            "true",
            "--is-luxury",
            "0",
        ])
        .unwrap();

        match cli.command {
            Command::Query { operation, .. } => assert_eq!(
                operation,
                Operation::RestaurantFilter {
                    is_veg: Some("true".to_string()),
                    has_outdoor_seating: None,
                    is_luxury: Some("0".to_string()),
                }
            ),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_dish_lookup() {
        let cli = Cli::try_parse_from(["gourmet-gateway", "query", "dish", "9999"]).unwrap();
        match cli.command {
            Command::Query { operation, .. } => {
                assert_eq!(operation, Operation::Dish { id: "9999".to_string() })
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_query_with_config() {
        let cli = Cli::try_parse_from([
            "gourmet-gateway",
            "query",
            "--config",
            "/etc/gateway.json",
            "dishes",
        ])
        .unwrap();
        match cli.command {
            Command::Query {
                config,
                database,
                operation,
            } => {
                assert_eq!(config, Some(PathBuf::from("/etc/gateway.json")));
                assert_eq!(database, None);
                assert_eq!(operation, Operation::Dishes);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
