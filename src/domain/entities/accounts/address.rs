//! Address Entity Implementation

use serde::{Deserialize, Serialize};

/// 사용자 주소
///
/// 항상 `User`에 내장되어 저장되며 독립 엔티티로 존재하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// 도시명 (예: "Curitiba")
    pub city: String,
    /// 우편번호 CEP, 8자리 숫자 문자열
    pub cep: String,
    /// 도로명
    pub street_name: String,
    /// 번지
    pub number: String,
    /// 상세 주소
    pub complement: String,
}
