//! CPF 갱신 유스케이스

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::AppError;
use crate::domain::ports::{UpdateCpfInputPort, UpdateCpfOutputPort};
use crate::repositories::AccountStore;
use crate::services::UseCase;

/// CPF 갱신 유스케이스
pub struct UpdateCpfUseCase {
    store: Arc<dyn AccountStore>,
}

impl UpdateCpfUseCase {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UseCase for UpdateCpfUseCase {
    type Input = UpdateCpfInputPort;
    type Output = UpdateCpfOutputPort;

    async fn execute(&self, input: UpdateCpfInputPort) -> Result<UpdateCpfOutputPort, AppError> {
        let matched = self.store.update_cpf(&input.uid, &input.cpf).await?;

        if !matched {
            return Err(AppError::UserNotFound);
        }

        Ok(UpdateCpfOutputPort {
            msg: "ok".to_string(),
        })
    }
}
