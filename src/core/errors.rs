//! # Application Error Handling System
//!
//! 계정 관리 백엔드를 위한 통합 에러 처리 시스템입니다.
//! 유스케이스가 반환하는 도메인 에러를 Rust의 타입 시스템으로 표현하고,
//! 핸들러 경계에서 단 한 번 HTTP 응답으로 변환합니다.
//!
//! ## 설계 철학
//!
//! ### 1. 타입화된 도메인 에러
//! - **예외 대신 값**: 유스케이스는 `Result<T, AppError>`를 반환하며,
//!   에러는 `?` 연산자로 호출 계층까지 전파됩니다.
//! - **의미론적 분류**: 각 변형이 HTTP 상태 코드와 직접 매핑됩니다.
//! - **컨텍스트 보존**: 원본 에러 메시지를 손실 없이 전달합니다.
//!
//! ### 2. 단일 변환 지점
//! - **ResponseError 구현**: Actix-Web과 완전 통합, 모든 핸들러가
//!   `Result<HttpResponse, AppError>`만 반환하면 됩니다.
//! - **일관된 응답 형식**: 모든 에러가 `{"msg":"error","errors":{...}}`
//!   형태의 JSON으로 직렬화됩니다.
//! - **인증 챌린지**: 401 응답에는 `WWW-Authenticate: Bearer` 헤더가
//!   자동으로 포함됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `Validation` | 400 Bad Request | 입력값 검증 실패 |
//! | `InvalidCredentials` | 400 Bad Request | 비밀번호 불일치 (의도적으로 401이 아님) |
//! | `MissingCredential` | 401 Unauthorized | Authorization 헤더 없음 |
//! | `Unauthenticated` | 401 Unauthorized | 외부 검증자가 토큰 거부 |
//! | `UserNotFound` | 404 Not Found | 조회 대상 사용자 없음 |
//! | `Conflict` | 409 Conflict | 전화번호 중복 등록 |
//! | `DatabaseError` | 500 Internal Server Error | 데이터베이스 오류 |
//! | `Uninitialized` | 500 Internal Server Error | 시작 컨텍스트 미배선 (프로그래밍 오류) |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! `InvalidCredentials`가 400인 것은 "비밀번호가 틀림"과 "베어러 토큰이
//! 없거나 무효함"을 혼동하지 않기 위한 의도적인 선택입니다.

use actix_web::http::StatusCode;
use actix_web::http::header;
use serde_json::{Map, Value, json};
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// 애플리케이션 전역 에러 타입
///
/// 요청 처리 파이프라인(인증 게이트 → 유스케이스 → 저장소)에서 발생할 수
/// 있는 모든 실패를 포괄하는 열거형입니다. `thiserror`로 `Error` trait을,
/// 아래에서 `actix_web::ResponseError`를 구현하여 HTTP 응답으로 자동
/// 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 실패
    ///
    /// DTO의 `validate()` 실패가 `#[from]`으로 그대로 전파됩니다.
    /// 응답 본문의 `errors` 맵은 필드 경로 → 메시지 형태입니다.
    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),

    /// Authorization 헤더가 없거나 Bearer 형식이 아님
    ///
    /// 외부 검증자에 도달하기 전에 게이트에서 거부됩니다.
    #[error("Missing bearer credential")]
    MissingCredential,

    /// 외부 신원 제공자가 토큰을 거부함 (만료, 서명 불일치, 형식 오류)
    ///
    /// 내부 문자열은 로그 전용이며 클라이언트에는 노출되지 않습니다.
    #[error("Invalid authentication")]
    Unauthenticated(String),

    /// 전화번호 또는 비밀번호 불일치
    #[error("Either user phone or password is wrong")]
    InvalidCredentials,

    /// 조회 대상 사용자가 존재하지 않음
    #[error("User not found")]
    UserNotFound,

    /// 비즈니스 규칙 위반 (전화번호 중복 등록 등)
    #[error("{0}")]
    Conflict(String),

    /// 데이터베이스 연산 실패
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 시작 시 배선되는 애플리케이션 컨텍스트 없이 요청 파이프라인이 실행됨
    ///
    /// 사용자에게 보여줄 에러가 아니라 프로그래밍 계약 위반입니다.
    /// 정상적으로 구성된 프로세스에서는 도달할 수 없습니다.
    #[error("Something is trying to use the application context without initializing it")]
    Uninitialized,

    /// 예상하지 못한 시스템 오류 (해싱 실패 등)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 분류 이름
    ///
    /// 로그와 응답 본문의 `errors.type` 값으로 사용됩니다.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "Validation",
            AppError::MissingCredential | AppError::Unauthenticated(_) => "Authentication",
            AppError::InvalidCredentials
            | AppError::UserNotFound
            | AppError::Conflict(_) => "Business",
            AppError::Uninitialized => "Dependency Context",
            AppError::DatabaseError(_) | AppError::InternalError(_) => "Internal",
        }
    }

    /// 단일 필드에 대한 검증 에러를 직접 생성합니다.
    ///
    /// derive 검증으로 표현할 수 없는 핸들러 수준의 검사
    /// (예: 공개 등록 모드에서 `uid` 누락)에 사용됩니다.
    pub fn missing_field(field: &'static str) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(
            field.into(),
            validator::ValidationError::new("required").with_message("field is required".into()),
        );
        AppError::Validation(errors)
    }
}

/// `ValidationErrors`를 필드 경로 → 메시지의 평탄한 맵으로 변환합니다.
///
/// 중첩된 구조체(`address.cep` 등)와 리스트 항목도 경로를 이어붙여
/// 단일 레벨 맵으로 만듭니다. 필드당 첫 번째 에러만 노출합니다.
pub fn flatten_validation_errors(errors: &ValidationErrors) -> Map<String, Value> {
    let mut out = Map::new();
    collect_validation_errors(errors, None, &mut out);
    out
}

fn collect_validation_errors(
    errors: &ValidationErrors,
    prefix: Option<&str>,
    out: &mut Map<String, Value>,
) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(p) => format!("{}.{}", p, field),
            None => field.to_string(),
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                if let Some(error) = field_errors.first() {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.insert(path, Value::String(message));
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_validation_errors(nested, Some(&path), out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    let item_path = format!("{}.{}", path, index);
                    collect_validation_errors(nested, Some(&item_path), out);
                }
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::MissingCredential | AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::UserNotFound => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_)
            | AppError::Uninitialized
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러는 `{"msg":"error","errors":{...}}` 본문으로 직렬화됩니다.
    /// 검증 에러의 `errors`는 필드 → 메시지 맵이고, 나머지는
    /// `{"type":..., "msg":...}` 한 쌍입니다. 401 변형에는
    /// `WWW-Authenticate: Bearer` 챌린지 헤더가 붙으며, 5xx는 내부
    /// 상세를 클라이언트에 노출하지 않습니다.
    ///
    /// 에러 → 와이어 변환 시점에 타입과 메시지를 warn/info 로그로
    /// 남깁니다. 어떤 에러도 조용히 삼켜지지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::warn!("{} - {}", self.kind(), self);
        } else {
            log::info!("{} - {}", self.kind(), self);
        }

        let errors = match self {
            AppError::Validation(validation_errors) => {
                Value::Object(flatten_validation_errors(validation_errors))
            }
            _ if status.is_server_error() => json!({
                "type": self.kind(),
                "msg": "internal error",
            }),
            _ => json!({
                "type": self.kind(),
                "msg": self.to_string(),
            }),
        };

        let mut builder = actix_web::HttpResponse::build(status);

        match self {
            AppError::MissingCredential => {
                builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
            }
            AppError::Unauthenticated(_) => {
                builder.insert_header((header::WWW_AUTHENTICATE, "Bearer error=\"invalid_token\""));
            }
            _ => {}
        }

        builder.json(json!({
            "msg": "error",
            "errors": errors,
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::missing_field("uid");
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_credentials_is_bad_request_not_unauthorized() {
        let error = AppError::InvalidCredentials;
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[test]
    fn test_missing_credential_carries_bearer_challenge() {
        let error = AppError::MissingCredential;
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let challenge = response
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .expect("WWW-Authenticate header must be present")
            .to_str()
            .unwrap();
        assert!(challenge.starts_with("Bearer"));
    }

    #[test]
    fn test_unauthenticated_carries_invalid_token_challenge() {
        let error = AppError::Unauthenticated("signature mismatch".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let challenge = response
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(challenge.contains("invalid_token"));
    }

    #[test]
    fn test_user_not_found_error_response() {
        let error = AppError::UserNotFound;
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_uninitialized_is_internal_fault() {
        let error = AppError::Uninitialized;
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_flatten_nested_validation_errors() {
        use validator::Validate;

        use crate::domain::dto::accounts::request::{AddressPayload, RegisterAccountRequest};

        let request = RegisterAccountRequest {
            uid: None,
            full_name: "Vinicius Abade".to_string(),
            cpf: "77777777777".to_string(),
            email: "abade@lavex.com".to_string(),
            phone: "no-country-code".to_string(),
            hashed_password: "plain-secret-1".to_string(),
            address: AddressPayload {
                city: "Curitiba".to_string(),
                cep: "12".to_string(),
                street_name: "Rua Beltrano do Ciclano".to_string(),
                number: "777".to_string(),
                complement: "".to_string(),
            },
        };

        let errors = request.validate().unwrap_err();
        let flat = flatten_validation_errors(&errors);

        // 최상위 필드와 중첩 필드가 모두 경로 키로 평탄화된다
        assert!(flat.contains_key("phone"));
        assert!(flat.contains_key("address.cep"));
    }
}
