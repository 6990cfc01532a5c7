//! Create-museum endpoint. Persistence is a stub: the request is
//! validated and logged, and no record is written. The seam for a real
//! implementation is [`crate::store::MuseumStore`].

use crate::error::AppError;
use crate::extractors::auth::BearerAuth;
use axum::{
    extract::{rejection::JsonRejection, ConnectInfo},
    Json,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Deserialize)]
pub struct CreateMuseumRequest {
    pub name: String,
    pub location: String,
}

#[derive(Serialize)]
pub struct CreateMuseumResponse {
    pub status: &'static str,
}

/// POST /museums — bearer-gated create stub.
///
/// Extractor order matters: the Authorization check runs before the body
/// is touched, so unauthorized requests are rejected without any JSON
/// parsing.
pub async fn create_museum(
    BearerAuth(_token): BearerAuth,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    body: Result<Json<CreateMuseumRequest>, JsonRejection>,
) -> Result<Json<CreateMuseumResponse>, AppError> {
    let Json(museum) =
        body.map_err(|e| AppError::BadRequest(format!("invalid request body: {e}")))?;

    tracing::info!(
        name = %museum.name,
        location = %museum.location,
        requestor_ip = %addr,
        "Creating museum"
    );

    Ok(Json(CreateMuseumResponse { status: "accepted" }))
}
