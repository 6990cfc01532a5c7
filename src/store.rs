//! Persistence seam for museum records.

use crate::error::AppError;
use async_trait::async_trait;

/// Identifier assigned to a stored museum record.
pub type MuseumId = i64;

/// Collaborator interface for museum persistence.
///
/// The create-museum endpoint validates and logs but does not persist; a
/// concrete implementation backed by the connection pool is supplied
/// separately.
#[async_trait]
pub trait MuseumStore: Send + Sync {
    async fn create_record(&self, name: &str, location: &str) -> Result<MuseumId, AppError>;
}
