//! Authentication Domain Module

pub mod credentials;

pub use credentials::{BearerToken, UserUid};
