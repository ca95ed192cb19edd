//! Configuration Module
//!
//! 프로세스 시작 시 환경 변수에서 읽히는 설정들을 관리합니다.
//! 런타임에 설정을 다시 읽는 코드는 없습니다.

pub mod app_config;
pub mod auth_config;

pub use app_config::{DatabaseConfig, Environment, PasswordConfig, ServerConfig};
pub use auth_config::{AuthPolicyConfig, FirebaseConfig};
