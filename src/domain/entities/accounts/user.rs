//! User Entity Implementation
//!
//! 계정 도메인의 핵심 엔티티입니다. 외부 신원 제공자의 `uid`를 조회 키로
//! 갖고, 로그인 조회 키인 전화번호는 저장소 전체에서 유일해야 합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use super::address::Address;

/// 사용자 엔티티
///
/// 등록 시 생성되고, 로그인/프로필 조회 시 읽히며, 주소와 CPF는 등록 이후
/// 개별적으로 갱신됩니다. 삭제 연산은 존재하지 않습니다.
/// `hashed_password`에는 bcrypt 해시만 저장되며 평문 비밀번호는 어떤
/// 경로로도 저장되거나 로그에 남지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 외부 신원 제공자가 보증한 주체 식별자 (unique)
    pub uid: String,
    /// 성명
    pub full_name: String,
    /// CPF (브라질 개인 납세자 번호), 불투명 문자열로 취급
    pub cpf: String,
    /// 이메일 주소
    pub email: String,
    /// 전화번호, 로그인 조회 키 (unique)
    pub phone: String,
    /// bcrypt 해시된 비밀번호
    pub hashed_password: String,
    /// 내장 주소
    pub address: Address,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 엔티티 생성
    ///
    /// `hashed_password`는 이미 해시된 값이어야 합니다. 해싱은 등록
    /// 유스케이스의 책임입니다.
    pub fn new(
        uid: String,
        full_name: String,
        cpf: String,
        email: String,
        phone: String,
        hashed_password: String,
        address: Address,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            uid,
            full_name,
            cpf,
            email,
            phone,
            hashed_password,
            address,
            created_at: now,
            updated_at: now,
        }
    }
}
