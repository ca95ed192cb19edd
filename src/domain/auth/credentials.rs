//! 인증 자격 증명 래퍼 타입
//!
//! 원시 베어러 자격 증명(`BearerToken`)과 검증이 끝난 주체 식별자
//! (`UserUid`)를 별도 타입으로 분리합니다. 둘은 서로 변환되지 않으며,
//! `BearerToken` → `UserUid` 변환은 오직 `AuthenticationVerifier`를
//! 통해서만 일어납니다.

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;

/// `Authorization` 헤더에서 추출된 원시 베어러 자격 증명
///
/// 내용은 외부 신원 제공자가 발급한 불투명 토큰 문자열입니다.
/// 이 서비스는 토큰을 해석하지 않고 검증자에게 그대로 전달합니다.
#[derive(Clone)]
pub struct BearerToken(String);

impl BearerToken {
    /// `Authorization` 헤더 값에서 베어러 토큰을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MissingCredential` - `Bearer ` 접두사가 없거나 토큰이 빈 문자열
    pub fn from_authorization_header(value: &str) -> Result<Self, AppError> {
        let token = value
            .strip_prefix("Bearer ")
            .ok_or(AppError::MissingCredential)?;

        if token.trim().is_empty() {
            return Err(AppError::MissingCredential);
        }

        Ok(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for BearerToken {
    // 자격 증명 원문이 로그에 남지 않도록 마스킹
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

/// 토큰 검증 성공 후 외부 신원 제공자가 보증하는 주체 식별자
///
/// 인증 게이트가 요청 extensions에 삽입하며, 보호된 핸들러는
/// `FromRequest` 구현을 통해 이 값을 인자로 받습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUid(pub String);

impl UserUid {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromRequest for UserUid {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    /// 인증 게이트가 extensions에 넣어 둔 `UserUid`를 꺼냅니다.
    ///
    /// 게이트를 거치지 않은 라우트에서 이 추출기를 사용하면 배선 오류이므로
    /// `Uninitialized`(500)로 실패합니다. 사용자에게 보이는 401과는 구분됩니다.
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<UserUid>()
                .cloned()
                .ok_or(AppError::Uninitialized),
        )
    }
}
