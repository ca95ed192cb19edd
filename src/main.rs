//! 계정 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 시작 의존성을 배선합니다.
//! MongoDB 연결과 Firebase 토큰 검증자를 조립해 불변 `AppContext`로
//! 묶은 뒤 모든 요청 스코프 핸들러에 전달합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use account_service_backend::config::ServerConfig;
use account_service_backend::core::context::{AppContext, AppSettings};
use account_service_backend::db::Database;
use account_service_backend::repositories::accounts::AccountRepository;
use account_service_backend::routes::configure_all_routes;
use account_service_backend::services::auth::FirebaseTokenVerifier;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 계정 서비스 시작중...");

    // 데이터 스토어 초기화
    let database = initialize_database().await;

    // 리포지토리 준비 및 인덱스 보장
    let repository = Arc::new(AccountRepository::new(database));
    repository
        .create_indexes()
        .await
        .expect("인덱스 생성 실패");

    info!("✅ 인덱스 준비 완료 (uid, phone 유니크)");

    // 외부 신원 검증자 준비
    let verifier = Arc::new(FirebaseTokenVerifier::from_env());

    // 시작 컨텍스트 조립 (이후 읽기 전용)
    let settings = AppSettings::from_env();
    info!(
        "🔐 등록 인증 정책: register_requires_auth={}",
        settings.register_requires_auth
    );

    let context = web::Data::new(AppContext::new(repository, verifier, settings));

    info!("✅ 애플리케이션 컨텍스트 배선 완료!");

    // HTTP 서버 시작
    start_http_server(context).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다. 인증 게이트는 라우트
/// 그룹 단위로 적용됩니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(context: web::Data<AppContext>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let register_requires_auth = context.settings().register_requires_auth;

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            .app_data(context.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| configure_all_routes(cfg, register_requires_auth))
    })
    .bind(bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB 연결을 초기화합니다
///
/// # Panics
///
/// * MongoDB 연결 실패 시 (기동 단계에서 즉시 종료)
async fn initialize_database() -> Arc<Database> {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(Database::new().await.expect("데이터베이스 연결 실패"));

    info!("✅ MongoDB 연결 성공");

    database
}

/// CORS 설정을 구성합니다
///
/// 개발환경에서 로컬호스트 간 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PATCH", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // 자격 증명(쿠키 등) 지원
        .supports_credentials()
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
