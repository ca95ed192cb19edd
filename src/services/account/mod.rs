//! Account Use Cases Module
//!
//! 계정 도메인의 다섯 가지 비즈니스 연산을 유스케이스 하나당 파일 하나로
//! 제공합니다. 모든 유스케이스는 주입된 `AccountStore`만 바라보며,
//! 조회 미스를 `UserNotFound`로 번역하는 책임을 갖습니다.

pub mod login;
pub mod register;
pub mod retrieve_user;
pub mod update_address;
pub mod update_cpf;

pub use login::LoginUseCase;
pub use register::RegisterUseCase;
pub use retrieve_user::RetrieveUserUseCase;
pub use update_address::UpdateAddressUseCase;
pub use update_cpf::UpdateCpfUseCase;

/// 유스케이스/게이트 테스트용 인메모리 구현들
#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::core::errors::AppError;
    use crate::domain::auth::{BearerToken, UserUid};
    use crate::domain::entities::accounts::{Address, User};
    use crate::repositories::AccountStore;
    use crate::services::auth::AuthenticationVerifier;

    /// uid를 키로 하는 인메모리 `AccountStore`
    pub struct InMemoryAccountStore {
        users: Mutex<HashMap<String, User>>,
    }

    impl InMemoryAccountStore {
        pub fn new() -> Self {
            Self {
                users: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl AccountStore for InMemoryAccountStore {
        async fn register(&self, user: User) -> Result<(), AppError> {
            let mut users = self.users.lock().unwrap();
            if users.values().any(|existing| existing.phone == user.phone) {
                return Err(AppError::Conflict("phone is already registered".to_string()));
            }
            users.insert(user.uid.clone(), user);
            Ok(())
        }

        async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, AppError> {
            let users = self.users.lock().unwrap();
            Ok(users.values().find(|user| user.phone == phone).cloned())
        }

        async fn find_by_uid(&self, uid: &str) -> Result<Option<User>, AppError> {
            let users = self.users.lock().unwrap();
            Ok(users.get(uid).cloned())
        }

        async fn update_address(&self, uid: &str, address: &Address) -> Result<bool, AppError> {
            let mut users = self.users.lock().unwrap();
            match users.get_mut(uid) {
                Some(user) => {
                    user.address = address.clone();
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn update_cpf(&self, uid: &str, cpf: &str) -> Result<bool, AppError> {
            let mut users = self.users.lock().unwrap();
            match users.get_mut(uid) {
                Some(user) => {
                    user.cpf = cpf.to_string();
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    /// 단일 토큰만 승인하는 스텁 검증자
    pub struct StaticVerifier {
        pub accepted_token: String,
        pub uid: String,
    }

    #[async_trait]
    impl AuthenticationVerifier for StaticVerifier {
        async fn authenticate_by_token(&self, token: &BearerToken) -> Result<UserUid, AppError> {
            if token.as_str() == self.accepted_token {
                Ok(UserUid(self.uid.clone()))
            } else {
                Err(AppError::Unauthenticated("token rejected by stub".to_string()))
            }
        }
    }

    /// 테스트 입력 포트에서 쓰는 기본 주소
    pub fn sample_address() -> Address {
        Address {
            city: "Curitiba".to_string(),
            cep: "77777777".to_string(),
            street_name: "Rua Beltrano do Ciclano".to_string(),
            number: "777".to_string(),
            complement: "Apto 7".to_string(),
        }
    }
}
