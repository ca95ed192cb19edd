//! Middlewares Module

pub mod auth_inner;
pub mod auth_middleware;

pub use auth_middleware::AuthGate;
