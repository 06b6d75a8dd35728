//! # Mflix API
//!
//! CRUD REST API over five record collections: users, movies, theaters,
//! comments and embedded movies.
//!
//! ## Architecture
//!
//! - **domain**: identifiers, the `Resource` description and the store port
//! - **infrastructure**: SQLite database, entities, migrations, store adapter
//! - **interfaces**: HTTP router, generic CRUD handlers, outcome mapping
//! - **shared**: pagination, error types, shutdown signalling
//! - **server**: lifecycle handle used by the CLI binary

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
