//! Static route table: built once at startup. A duplicate (method, path)
//! registration is a startup error, never a silent overwrite.

use crate::error::StartupError;
use crate::handlers::{greeting, health, museum};
use crate::state::AppState;
use axum::{
    routing::{any, get, post, MethodRouter},
    Router,
};
use std::collections::HashSet;

/// Method filter for one registration. `Any` conflicts with every other
/// registration on the same path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RouteMethod {
    Any,
    Get,
    Post,
}

impl RouteMethod {
    fn as_str(&self) -> &'static str {
        match self {
            RouteMethod::Any => "*",
            RouteMethod::Get => "GET",
            RouteMethod::Post => "POST",
        }
    }
}

/// Accumulates (method, path) pairs and rejects duplicates before the
/// router is handed to the listener.
pub struct RouteTable {
    seen: HashSet<(String, RouteMethod)>,
    router: Router<AppState>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
            router: Router::new(),
        }
    }

    pub fn register(
        mut self,
        method: RouteMethod,
        path: &str,
        handler: MethodRouter<AppState>,
    ) -> Result<Self, StartupError> {
        let conflict = self.seen.contains(&(path.to_string(), method.clone()))
            || self.seen.contains(&(path.to_string(), RouteMethod::Any))
            || (method == RouteMethod::Any && self.seen.iter().any(|(p, _)| p == path));
        if conflict {
            return Err(StartupError::DuplicateRoute {
                method: method.as_str().to_string(),
                path: path.to_string(),
            });
        }
        self.seen.insert((path.to_string(), method));
        self.router = self.router.route(path, handler);
        Ok(self)
    }

    pub fn into_router(self, state: AppState) -> Router {
        self.router.with_state(state)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

/// All registered endpoints. Duplicate pairs are programmer errors and
/// fail here, before any socket is opened.
pub fn build_router(state: AppState) -> Result<Router, StartupError> {
    tracing::debug!("setting up routes");
    let table = RouteTable::new()
        .register(RouteMethod::Any, "/hell", any(greeting::hell))?
        .register(RouteMethod::Get, "/hello", get(greeting::hello))?
        .register(RouteMethod::Get, "/health", get(health::health_check))?
        .register(RouteMethod::Post, "/museums", post(museum::create_museum))?;
    Ok(table.into_router(state))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn noop() {}

    #[test]
    fn same_method_and_path_twice_is_rejected() {
        let result = RouteTable::new()
            .register(RouteMethod::Get, "/dup", get(noop))
            .unwrap()
            .register(RouteMethod::Get, "/dup", get(noop));
        match result {
            Err(StartupError::DuplicateRoute { method, path }) => {
                assert_eq!(method, "GET");
                assert_eq!(path, "/dup");
            }
            _ => panic!("duplicate registration must fail"),
        }
    }

    #[test]
    fn same_path_different_methods_is_allowed() {
        let result = RouteTable::new()
            .register(RouteMethod::Get, "/shared", get(noop))
            .unwrap()
            .register(RouteMethod::Post, "/shared", post(noop));
        assert!(result.is_ok());
    }

    #[test]
    fn any_conflicts_with_existing_registration() {
        let result = RouteTable::new()
            .register(RouteMethod::Get, "/mixed", get(noop))
            .unwrap()
            .register(RouteMethod::Any, "/mixed", any(noop));
        assert!(matches!(
            result,
            Err(StartupError::DuplicateRoute { .. })
        ));
    }

    #[test]
    fn registration_after_any_is_rejected() {
        let result = RouteTable::new()
            .register(RouteMethod::Any, "/wild", any(noop))
            .unwrap()
            .register(RouteMethod::Post, "/wild", post(noop));
        assert!(matches!(
            result,
            Err(StartupError::DuplicateRoute { .. })
        ));
    }
}
