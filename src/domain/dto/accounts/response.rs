//! 계정 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::accounts::Address;
use crate::domain::ports::RetrieveUserOutputPort;

/// 성공 확인 응답 (`{"msg":"ok"}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckResponse {
    pub msg: String,
}

impl AckResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// `GET /retrieve-user` 응답: 마지막으로 기록된 프로필 전체
///
/// 저장된 bcrypt 해시가 `hashed_password` 필드로 포함됩니다. 평문 비밀
/// 값은 아닙니다. 내부 식별자(`_id`)와 타임스탬프는 노출하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileResponse {
    pub msg: String,
    pub full_name: String,
    pub cpf: String,
    pub email: String,
    pub phone: String,
    pub hashed_password: String,
    pub address: Address,
}

impl From<RetrieveUserOutputPort> for UserProfileResponse {
    fn from(port: RetrieveUserOutputPort) -> Self {
        let user = port.user;
        Self {
            msg: port.msg,
            full_name: user.full_name,
            cpf: user.cpf,
            email: user.email,
            phone: user.phone,
            hashed_password: user.hashed_password,
            address: user.address,
        }
    }
}
