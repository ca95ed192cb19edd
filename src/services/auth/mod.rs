//! Authentication Services Module
//!
//! 베어러 토큰을 검증된 주체 식별자로 바꾸는 캐퍼빌리티를 정의합니다.

pub mod firebase;

use async_trait::async_trait;

use crate::core::errors::AppError;
use crate::domain::auth::{BearerToken, UserUid};

pub use firebase::FirebaseTokenVerifier;

/// 외부 신원 제공자 기반 토큰 검증 캐퍼빌리티
///
/// 요청당 정확히 한 번 호출되며 캐싱이나 재시도는 하지 않습니다.
/// 검증 실패는 `AppError::Unauthenticated`로 전파되어 401과
/// `WWW-Authenticate: Bearer` 챌린지로 응답됩니다.
#[async_trait]
pub trait AuthenticationVerifier: Send + Sync {
    /// 베어러 토큰을 검증하고 토큰에 인코딩된 주체 식별자를 반환합니다.
    async fn authenticate_by_token(&self, token: &BearerToken) -> Result<UserUid, AppError>;
}
