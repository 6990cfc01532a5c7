//! Request handlers. Each is a pure function of the request; no handler
//! retains cross-request state.

pub mod greeting;
pub mod health;
pub mod museum;
