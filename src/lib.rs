//! Museum server: a minimal HTTP service bootstrap with routing,
//! signal-driven shutdown, and a configuration-driven PostgreSQL pool.

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;

pub use config::{DatabaseConfig, ServerConfig};
pub use db::connect;
pub use error::{AppError, ConfigError, StartupError};
pub use routes::build_router;
pub use server::{shutdown_signal, Server};
pub use state::AppState;
pub use store::{MuseumId, MuseumStore};
