//! 로그인 유스케이스

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::AppError;
use crate::domain::ports::{LoginInputPort, LoginOutputPort};
use crate::repositories::AccountStore;
use crate::services::UseCase;

/// 로그인 유스케이스
///
/// 전화번호로 사용자를 찾아 제시된 비밀 값을 저장된 bcrypt 해시와
/// 대조합니다. 전화번호 미등록(`UserNotFound`, 404)과 비밀번호 불일치
/// (`InvalidCredentials`, 400)는 서로 다른 실패로 구분됩니다.
pub struct LoginUseCase {
    store: Arc<dyn AccountStore>,
}

impl LoginUseCase {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UseCase for LoginUseCase {
    type Input = LoginInputPort;
    type Output = LoginOutputPort;

    async fn execute(&self, input: LoginInputPort) -> Result<LoginOutputPort, AppError> {
        let user = self
            .store
            .find_by_phone(&input.phone)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(&input.hashed_password, &user.hashed_password)
            .map_err(|e| AppError::InternalError(format!("password verification failed: {}", e)))?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            return Err(AppError::InvalidCredentials);
        }

        Ok(LoginOutputPort {
            msg: "ok".to_string(),
        })
    }
}
