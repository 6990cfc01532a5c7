//! Extract the bearer token from the Authorization header.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

/// Required prefix on the `Authorization` header.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Extractor for `Authorization: Bearer <token>`.
///
/// Authentication stub: only the prefix is checked. The token after the
/// prefix is carried along but never verified against anything.
#[derive(Clone, Debug)]
pub struct BearerAuth(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BearerAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        match header.strip_prefix(BEARER_PREFIX) {
            Some(token) => Ok(BearerAuth(token.to_string())),
            None => Err(AppError::Unauthorized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<BearerAuth, AppError> {
        let (mut parts, _) = request.into_parts();
        BearerAuth::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn bearer_header_yields_token() {
        let request = Request::builder()
            .header("Authorization", "Bearer abc123")
            .body(())
            .unwrap();
        let BearerAuth(token) = extract(request).await.unwrap();
        assert_eq!(token, "abc123");
    }

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        let request = Request::builder().body(()).unwrap();
        assert!(matches!(
            extract(request).await,
            Err(AppError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_unauthorized() {
        let request = Request::builder()
            .header("Authorization", "Basic dXNlcjpwYXNz")
            .body(())
            .unwrap();
        assert!(matches!(
            extract(request).await,
            Err(AppError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn prefix_is_case_and_space_sensitive() {
        let request = Request::builder()
            .header("Authorization", "bearer abc123")
            .body(())
            .unwrap();
        assert!(matches!(
            extract(request).await,
            Err(AppError::Unauthorized)
        ));
    }
}
