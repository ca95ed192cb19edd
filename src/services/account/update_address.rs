//! 주소 갱신 유스케이스

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::AppError;
use crate::domain::ports::{UpdateAddressInputPort, UpdateAddressOutputPort};
use crate::repositories::AccountStore;
use crate::services::UseCase;

/// 주소 갱신 유스케이스
///
/// 저장된 주소를 입력으로 통째로 덮어씁니다. 다른 필드는 건드리지
/// 않습니다.
pub struct UpdateAddressUseCase {
    store: Arc<dyn AccountStore>,
}

impl UpdateAddressUseCase {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UseCase for UpdateAddressUseCase {
    type Input = UpdateAddressInputPort;
    type Output = UpdateAddressOutputPort;

    async fn execute(
        &self,
        input: UpdateAddressInputPort,
    ) -> Result<UpdateAddressOutputPort, AppError> {
        let matched = self
            .store
            .update_address(&input.uid, &input.address)
            .await?;

        if !matched {
            return Err(AppError::UserNotFound);
        }

        Ok(UpdateAddressOutputPort {
            msg: "ok".to_string(),
        })
    }
}
