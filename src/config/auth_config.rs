//! # Authentication Configuration Module
//!
//! 외부 신원 제공자(Firebase) 토큰 검증과 인증 정책 관련 설정을 관리하는
//! 모듈입니다. 이 서비스는 토큰을 발급하지 않고 검증만 수행하므로,
//! 필요한 설정은 프로젝트 식별자와 공개키 엔드포인트뿐입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! # Firebase 프로젝트 ID (토큰의 issuer/audience 검증에 사용)
//! export FIREBASE_PROJECT_ID="your-project-id"
//!
//! # 공개키(JWKS) 엔드포인트 재정의 (기본값: Google secure-token JWKS)
//! export FIREBASE_JWKS_URL="https://..."
//!
//! # 등록 엔드포인트의 베어러 인증 요구 여부 (기본값: true)
//! export REGISTER_REQUIRES_AUTH="true"
//! ```

use std::env;

/// Google secure-token 서비스 계정의 JWKS 문서 기본 주소
const DEFAULT_JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";

/// Firebase ID 토큰 검증 설정
pub struct FirebaseConfig;

impl FirebaseConfig {
    /// Firebase 프로젝트 ID를 반환합니다.
    ///
    /// ID 토큰의 `aud` 클레임과 일치해야 하며 `iss` 검증에도 사용됩니다.
    ///
    /// # Panics
    ///
    /// `FIREBASE_PROJECT_ID` 환경 변수가 설정되지 않은 경우 패닉이
    /// 발생합니다. 시작 배선 시점에 한 번 호출되므로 잘못된 구성은
    /// 프로세스 기동 단계에서 드러납니다.
    pub fn project_id() -> String {
        env::var("FIREBASE_PROJECT_ID").expect("FIREBASE_PROJECT_ID must be set")
    }

    /// 토큰 서명 공개키를 내려받을 JWKS 문서 주소
    pub fn jwks_url() -> String {
        env::var("FIREBASE_JWKS_URL").unwrap_or_else(|_| DEFAULT_JWKS_URL.to_string())
    }

    /// 프로젝트 ID에 대응하는 기대 issuer 값
    pub fn issuer(project_id: &str) -> String {
        format!("https://securetoken.google.com/{}", project_id)
    }
}

/// 인증 정책 설정
pub struct AuthPolicyConfig;

impl AuthPolicyConfig {
    /// `/register-account`가 베어러 인증을 요구하는지 여부
    ///
    /// 기본값은 `true`(인증 필요)입니다. `false`로 내리면 등록 라우트는
    /// 공개되고 요청 본문이 `uid`를 직접 제공해야 합니다.
    pub fn register_requires_auth() -> bool {
        env::var("REGISTER_REQUIRES_AUTH")
            .map(|v| parse_bool_flag(&v))
            .unwrap_or(true)
    }
}

/// 환경 변수의 불리언 표기를 해석합니다. 알 수 없는 값은 `true`로
/// 취급하여 보수적인(인증 요구) 쪽으로 기웁니다.
fn parse_bool_flag(value: &str) -> bool {
    !matches!(value.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off")
}
