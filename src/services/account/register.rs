//! 계정 등록 유스케이스

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::PasswordConfig;
use crate::core::errors::AppError;
use crate::domain::entities::accounts::User;
use crate::domain::ports::{RegisterInputPort, RegisterOutputPort};
use crate::repositories::AccountStore;
use crate::services::UseCase;

/// 계정 등록 유스케이스
///
/// 입력의 평문 비밀 값을 bcrypt로 해싱한 뒤 새 사용자 레코드를
/// 저장합니다. 평문 비밀 값은 저장되지도 로그에 남지도 않습니다.
pub struct RegisterUseCase {
    store: Arc<dyn AccountStore>,
}

impl RegisterUseCase {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UseCase for RegisterUseCase {
    type Input = RegisterInputPort;
    type Output = RegisterOutputPort;

    async fn execute(&self, input: RegisterInputPort) -> Result<RegisterOutputPort, AppError> {
        let hash_start = std::time::Instant::now();
        let hashed_password = bcrypt::hash(&input.hashed_password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("password hashing failed: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(
            input.uid,
            input.full_name,
            input.cpf,
            input.email,
            input.phone,
            hashed_password,
            input.address,
        );

        self.store.register(user).await?;

        Ok(RegisterOutputPort {
            msg: "ok".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::account::testing::{InMemoryAccountStore, sample_address};

    fn input(uid: &str, phone: &str, secret: &str) -> RegisterInputPort {
        RegisterInputPort {
            uid: uid.to_string(),
            full_name: "Vinicius Abade".to_string(),
            cpf: "77777777777".to_string(),
            email: "abade@lavex.com".to_string(),
            phone: phone.to_string(),
            hashed_password: secret.to_string(),
            address: sample_address(),
        }
    }

    #[actix_web::test]
    async fn test_register_hashes_the_secret_before_persisting() {
        let store = Arc::new(InMemoryAccountStore::new());
        let use_case = RegisterUseCase::new(store.clone());

        let output = use_case
            .execute(input("u1", "+5541977777777", "plain-secret-1"))
            .await
            .unwrap();
        assert_eq!(output.msg, "ok");

        let stored = store.find_by_uid("u1").await.unwrap().unwrap();
        assert_ne!(stored.hashed_password, "plain-secret-1");
        assert!(bcrypt::verify("plain-secret-1", &stored.hashed_password).unwrap());
    }

    #[actix_web::test]
    async fn test_register_duplicate_phone_is_conflict() {
        let store = Arc::new(InMemoryAccountStore::new());
        let use_case = RegisterUseCase::new(store.clone());

        use_case
            .execute(input("u1", "+5541977777777", "plain-secret-1"))
            .await
            .unwrap();

        let result = use_case
            .execute(input("u2", "+5541977777777", "another-secret"))
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }
}
