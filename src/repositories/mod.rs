//! Repositories Module
//!
//! 계정 레코드 영속성의 캐퍼빌리티 인터페이스와 MongoDB 구현을 제공합니다.
//! 유스케이스는 이 trait에만 의존하며, 저장소가 영속 User 레코드의 유일한
//! 변경 주체입니다.

pub mod accounts;

use async_trait::async_trait;

use crate::core::errors::AppError;
use crate::domain::entities::accounts::{Address, User};

/// 계정 영속성 캐퍼빌리티
///
/// 조회는 매칭되는 레코드가 없으면 `Ok(None)`(또는 갱신의 경우
/// `Ok(false)`)을 반환하고, 이를 `UserNotFound`로 번역하는 것은
/// 유스케이스의 책임입니다.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// 새 사용자 레코드를 저장합니다.
    ///
    /// 전화번호가 이미 등록되어 있으면 `AppError::Conflict`로 실패합니다.
    async fn register(&self, user: User) -> Result<(), AppError>;

    /// 전화번호로 사용자를 조회합니다 (로그인 조회 키).
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, AppError>;

    /// 검증된 주체 식별자로 사용자를 조회합니다.
    async fn find_by_uid(&self, uid: &str) -> Result<Option<User>, AppError>;

    /// 저장된 주소를 통째로 덮어씁니다. 매칭된 레코드가 있으면 `true`.
    async fn update_address(&self, uid: &str, address: &Address) -> Result<bool, AppError>;

    /// 저장된 CPF를 덮어씁니다. 매칭된 레코드가 있으면 `true`.
    async fn update_cpf(&self, uid: &str, cpf: &str) -> Result<bool, AppError>;
}
