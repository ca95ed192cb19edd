//! Firebase ID 토큰 검증자
//!
//! `AuthenticationVerifier`의 프로덕션 구현입니다. Firebase가 발급한
//! RS256 ID 토큰을 Google secure-token 서비스 계정의 JWKS 공개키로
//! 검증하고, 토큰의 `sub` 클레임을 `UserUid`로 반환합니다.
//!
//! 토큰 발급은 이 서비스의 책임이 아닙니다. 검증은 요청당 단일 호출이며
//! 공개키를 포함해 아무것도 캐싱하지 않습니다.

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use serde::Deserialize;

use crate::config::FirebaseConfig;
use crate::core::errors::AppError;
use crate::domain::auth::{BearerToken, UserUid};
use crate::services::auth::AuthenticationVerifier;

/// JWKS 문서 (`{"keys":[...]}`)
#[derive(Debug, Deserialize)]
struct JwkSet {
    keys: Vec<Jwk>,
}

/// JWKS의 개별 RSA 공개키
#[derive(Debug, Deserialize)]
struct Jwk {
    kid: String,
    n: String,
    e: String,
}

/// 검증된 ID 토큰에서 사용하는 클레임
///
/// `aud`/`iss`/`exp`는 jsonwebtoken의 Validation이 검사하므로 여기서는
/// 주체 식별자만 읽습니다.
#[derive(Debug, Deserialize)]
struct IdTokenClaims {
    sub: String,
}

/// Firebase ID 토큰 검증자
///
/// 시작 시점에 한 번 생성되어 모든 요청이 공유합니다. 내부 상태는
/// reqwest 클라이언트(자체 커넥션 풀)와 불변 설정뿐입니다.
pub struct FirebaseTokenVerifier {
    http: reqwest::Client,
    project_id: String,
    jwks_url: String,
}

impl FirebaseTokenVerifier {
    pub fn new(project_id: String, jwks_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            project_id,
            jwks_url,
        }
    }

    /// 환경 변수 설정으로 검증자를 생성합니다.
    ///
    /// # Panics
    ///
    /// `FIREBASE_PROJECT_ID`가 설정되지 않은 경우 (시작 배선 시점에만
    /// 호출되므로 잘못된 구성은 기동 단계에서 드러납니다)
    pub fn from_env() -> Self {
        Self::new(FirebaseConfig::project_id(), FirebaseConfig::jwks_url())
    }

    /// JWKS 문서를 내려받아 `kid`에 해당하는 복호화 키를 찾습니다.
    async fn fetch_signing_key(&self, kid: &str) -> Result<DecodingKey, AppError> {
        let jwks: JwkSet = self
            .http
            .get(&self.jwks_url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| AppError::Unauthenticated(format!("signing key fetch failed: {}", e)))?
            .json()
            .await
            .map_err(|e| AppError::Unauthenticated(format!("malformed JWKS document: {}", e)))?;

        let jwk = jwks
            .keys
            .iter()
            .find(|key| key.kid == kid)
            .ok_or_else(|| AppError::Unauthenticated(format!("unknown key id: {}", kid)))?;

        DecodingKey::from_rsa_components(&jwk.n, &jwk.e)
            .map_err(|e| AppError::Unauthenticated(format!("invalid JWKS key material: {}", e)))
    }
}

#[async_trait]
impl AuthenticationVerifier for FirebaseTokenVerifier {
    async fn authenticate_by_token(&self, token: &BearerToken) -> Result<UserUid, AppError> {
        // 서명 검증에 쓸 키를 고르기 위해 헤더의 kid만 먼저 읽는다
        let header = decode_header(token.as_str())
            .map_err(|e| AppError::Unauthenticated(format!("malformed token: {}", e)))?;

        let kid = header
            .kid
            .ok_or_else(|| AppError::Unauthenticated("token header has no key id".to_string()))?;

        let signing_key = self.fetch_signing_key(&kid).await?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[self.project_id.clone()]);
        validation.set_issuer(&[FirebaseConfig::issuer(&self.project_id)]);

        let token_data = decode::<IdTokenClaims>(token.as_str(), &signing_key, &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::Unauthenticated("token is expired".to_string())
                }
                _ => AppError::Unauthenticated(format!("token verification failed: {}", e)),
            })?;

        Ok(UserUid(token_data.claims.sub))
    }
}
