//! Shared application state for all handlers.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Cloned into every handler. Holds only immutable shared resources; no
/// handler mutates anything here.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            started_at: Utc::now(),
        }
    }
}
