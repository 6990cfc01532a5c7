//! Greeting endpoints.

use axum::{
    extract::{ConnectInfo, Query},
    http::{header, HeaderMap, Method},
    Json,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

const DEFAULT_NAME: &str = "Guest";

#[derive(Deserialize)]
pub struct GreetingParams {
    pub name: Option<String>,
}

#[derive(Serialize)]
pub struct HelloBody {
    pub message: String,
    pub status: &'static str,
}

/// Any method on /hell, 200 text/plain. The name is echoed into the body
/// unmodified; callers control that byte range (known limitation).
pub async fn hell(
    method: Method,
    headers: HeaderMap,
    Query(params): Query<GreetingParams>,
) -> String {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    tracing::debug!(%method, user_agent, "hell greeting");

    let name = params.name.unwrap_or_else(|| DEFAULT_NAME.to_string());
    format!("Welcome to hell!{name}😈")
}

/// GET /hello — JSON greeting. Non-GET methods are answered 405 by the
/// route table before this handler runs.
pub async fn hello(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Query(params): Query<GreetingParams>,
) -> Json<HelloBody> {
    tracing::info!(path = "/hello", peer = %addr, "received greeting request");

    let name = params.name.unwrap_or_else(|| DEFAULT_NAME.to_string());
    Json(HelloBody {
        message: format!("Hello, {name}"),
        status: "success",
    })
}
