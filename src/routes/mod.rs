//! API 라우트 설정 모듈
//!
//! 계정 관리 엔드포인트들을 인증 요구 여부에 따라 그룹화하여 등록합니다.
//!
//! # Route Groups
//!
//! ## Public 라우트 (게이트 없음)
//! - `POST /login` - 로그인 자체는 인증 불필요
//! - `GET /health` - 헬스체크
//!
//! ## Protected 라우트 (AuthGate 적용)
//! - `GET /retrieve-user`
//! - `PATCH /update-address`
//! - `PATCH /update-cpf`
//! - `POST /register-account` - 기본 정책. `REGISTER_REQUIRES_AUTH=false`
//!   이면 공개 그룹으로 이동하며 본문이 `uid`를 제공해야 합니다.

use actix_web::web;
use serde_json::json;

use crate::config::ServerConfig;
use crate::handlers;
use crate::middlewares::AuthGate;

/// 모든 라우트를 설정합니다
///
/// `register_requires_auth`는 시작 시 한 번 읽힌 정책 스냅샷입니다.
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::App;
///
/// let app = App::new().configure(|cfg| configure_all_routes(cfg, true));
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, register_requires_auth: bool) {
    // Health check endpoint
    cfg.service(health_check);

    // Public routes
    cfg.service(handlers::accounts::login);

    if register_requires_auth {
        cfg.service(
            web::scope("")
                .wrap(AuthGate)
                .service(handlers::accounts::register_account)
                .service(handlers::accounts::retrieve_user)
                .service(handlers::accounts::update_address)
                .service(handlers::accounts::update_cpf),
        );
    } else {
        cfg.service(handlers::accounts::register_account);
        cfg.service(
            web::scope("")
                .wrap(AuthGate)
                .service(handlers::accounts::retrieve_user)
                .service(handlers::accounts::update_address)
                .service(handlers::accounts::update_cpf),
        );
    }
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": ServerConfig::service_name(),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
