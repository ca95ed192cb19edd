//! 사용자 조회 유스케이스

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::AppError;
use crate::domain::ports::{RetrieveUserInputPort, RetrieveUserOutputPort};
use crate::repositories::AccountStore;
use crate::services::UseCase;

/// 사용자 조회 유스케이스
///
/// 검증된 주체 식별자로 사용자 레코드를 읽어 마지막으로 기록된 프로필을
/// 그대로 반환합니다.
pub struct RetrieveUserUseCase {
    store: Arc<dyn AccountStore>,
}

impl RetrieveUserUseCase {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UseCase for RetrieveUserUseCase {
    type Input = RetrieveUserInputPort;
    type Output = RetrieveUserOutputPort;

    async fn execute(
        &self,
        input: RetrieveUserInputPort,
    ) -> Result<RetrieveUserOutputPort, AppError> {
        let user = self
            .store
            .find_by_uid(&input.uid)
            .await?
            .ok_or(AppError::UserNotFound)?;

        Ok(RetrieveUserOutputPort {
            msg: "ok".to_string(),
            user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::RegisterInputPort;
    use crate::services::account::RegisterUseCase;
    use crate::services::account::testing::{InMemoryAccountStore, sample_address};

    #[actix_web::test]
    async fn test_retrieve_returns_fields_written_by_register() {
        let store = Arc::new(InMemoryAccountStore::new());
        RegisterUseCase::new(store.clone())
            .execute(RegisterInputPort {
                uid: "u1".to_string(),
                full_name: "Vinicius Abade".to_string(),
                cpf: "77777777777".to_string(),
                email: "abade@lavex.com".to_string(),
                phone: "+5541977777777".to_string(),
                hashed_password: "plain-secret-1".to_string(),
                address: sample_address(),
            })
            .await
            .unwrap();

        let output = RetrieveUserUseCase::new(store)
            .execute(RetrieveUserInputPort {
                uid: "u1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.msg, "ok");
        assert_eq!(output.user.cpf, "77777777777");
        assert_eq!(output.user.email, "abade@lavex.com");
        assert_eq!(output.user.address.city, "Curitiba");
    }

    #[actix_web::test]
    async fn test_retrieve_unknown_uid_is_user_not_found() {
        let store = Arc::new(InMemoryAccountStore::new());
        let result = RetrieveUserUseCase::new(store)
            .execute(RetrieveUserInputPort {
                uid: "missing".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::UserNotFound)));
    }
}
