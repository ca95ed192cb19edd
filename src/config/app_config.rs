//! # Application Configuration Module
//!
//! 서버, 데이터베이스, 비밀번호 해싱 관련 설정을 관리하는 모듈입니다.
//! 모든 값은 프로세스 시작 시 환경 변수에서 읽히며 런타임에 다시 읽지
//! 않습니다.

use std::env;

use log::warn;

/// 실행 환경 구분
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// 현재 실행 환경을 반환합니다.
    ///
    /// `ENVIRONMENT` 환경 변수 기준이며 기본값은 Production입니다.
    pub fn current() -> Self {
        match env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "production".to_string())
            .to_lowercase()
            .as_str()
        {
            "dev" | "development" => Environment::Development,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt cost factor를 반환합니다.
    ///
    /// `BCRYPT_COST` 환경 변수로 재정의할 수 있으며, 없으면 실행 환경에
    /// 따른 기본값을 사용합니다 (개발: 10, 운영: 12).
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            match cost_str.parse::<u32>() {
                Ok(cost) if (4..=31).contains(&cost) => return cost,
                _ => warn!("BCRYPT_COST 값이 유효하지 않습니다: {}. 기본값 사용", cost_str),
            }
        }

        match Environment::current() {
            Environment::Development => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서비스 이름 (MongoDB appname, 헬스체크 응답에 사용)
    pub fn service_name() -> String {
        env::var("SERVICE_NAME").unwrap_or_else(|_| "account_service".to_string())
    }

    /// 바인드 주소
    pub fn bind_address() -> String {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);
        format!("{}:{}", host, port)
    }

    /// 워커 스레드 수
    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|w| w.parse::<usize>().ok())
            .unwrap_or(4)
    }
}

/// 데이터베이스 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 데이터베이스 이름
    pub fn name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "account_service_dev".to_string())
    }
}
