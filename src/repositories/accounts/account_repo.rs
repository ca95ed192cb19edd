//! # 계정 리포지토리 구현
//!
//! `AccountStore` 캐퍼빌리티의 MongoDB 구현입니다.
//! `users` 컬렉션 하나를 사용하며, 외부 신원 제공자의 `uid`와 로그인
//! 조회 키인 `phone`에 유니크 인덱스를 유지합니다.
//!
//! ## 에러 처리
//!
//! 모든 메서드는 `Result<T, AppError>`를 반환합니다:
//!
//! - **DatabaseError**: MongoDB 연결/쿼리 오류
//! - **Conflict**: 유니크 인덱스 위반 (전화번호 중복 등록)
//!
//! 조회 미스는 에러가 아니라 `Ok(None)` / `Ok(false)`이며,
//! `UserNotFound`로의 번역은 유스케이스 계층에서 일어납니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{DateTime, doc, to_bson};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::{Collection, IndexModel, options::IndexOptions};

use crate::core::errors::AppError;
use crate::db::Database;
use crate::domain::entities::accounts::{Address, User};
use crate::repositories::AccountStore;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 계정 데이터 액세스 리포지토리
///
/// `AccountStore` trait의 유일한 프로덕션 구현입니다. 시작 시점에 한 번
/// 생성되어 `AppContext`를 통해 모든 유스케이스가 공유합니다. 내부
/// 상태는 드라이버의 커넥션 풀 핸들뿐이므로 동시 요청 간 공유가
/// 안전합니다.
pub struct AccountRepository {
    db: Arc<Database>,
}

impl AccountRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>("users")
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 호출됩니다.
    ///
    /// 1. `uid` 유니크 인덱스 - 주체 식별자 조회 및 중복 방지
    /// 2. `phone` 유니크 인덱스 - 로그인 조회 최적화 및 전화번호
    ///    유일성 불변식 강제
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let uid_index = IndexModel::builder()
            .keys(doc! { "uid": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("uid_unique".to_string())
                    .build(),
            )
            .build();

        let phone_index = IndexModel::builder()
            .keys(doc! { "phone": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("phone_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([uid_index, phone_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// 쓰기 실패가 유니크 인덱스 위반인지 판별합니다.
fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn register(&self, user: User) -> Result<(), AppError> {
        self.collection().insert_one(&user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::Conflict("phone is already registered".to_string())
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        Ok(())
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "phone": phone })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_uid(&self, uid: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "uid": uid })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn update_address(&self, uid: &str, address: &Address) -> Result<bool, AppError> {
        let address_doc = to_bson(address)
            .map_err(|e| AppError::InternalError(format!("address serialization failed: {}", e)))?;

        let result = self
            .collection()
            .update_one(
                doc! { "uid": uid },
                doc! { "$set": { "address": address_doc, "updated_at": DateTime::now() } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    async fn update_cpf(&self, uid: &str, cpf: &str) -> Result<bool, AppError> {
        let result = self
            .collection()
            .update_one(
                doc! { "uid": uid },
                doc! { "$set": { "cpf": cpf, "updated_at": DateTime::now() } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }
}
