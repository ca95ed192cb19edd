//! # 계정 요청 DTO
//!
//! 계정 관리 엔드포인트의 HTTP 요청 본문 구조를 정의합니다.
//! `validator` derive로 역직렬화 직후 필드 검증을 수행하며, 검증 실패는
//! `AppError::Validation`으로 변환되어 `{field: message}` 맵으로 응답됩니다.
//!
//! ## 검증 규칙
//!
//! - **email**: RFC 5322 이메일 형식
//! - **cpf**: 숫자 11자리 (형식 외의 의미는 해석하지 않는 불투명 값)
//! - **cep**: 숫자 8자리
//! - **phone**: `+` 접두사의 E.164 형태, 숫자 8-15자리
//! - **hashed_password**: 필드명과 달리 평문 비밀 값이며 최소 8자

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::accounts::Address;

/// 등록/주소 갱신 요청에 내장되는 주소 본문
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddressPayload {
    #[validate(length(min = 1, max = 120, message = "city is required"))]
    pub city: String,

    #[validate(custom(function = "validate_cep"))]
    pub cep: String,

    #[validate(length(min = 1, max = 200, message = "street_name is required"))]
    pub street_name: String,

    #[validate(length(min = 1, max = 20, message = "number is required"))]
    pub number: String,

    /// 상세 주소, 빈 문자열 허용
    pub complement: String,
}

impl From<AddressPayload> for Address {
    fn from(payload: AddressPayload) -> Self {
        Address {
            city: payload.city,
            cep: payload.cep,
            street_name: payload.street_name,
            number: payload.number,
            complement: payload.complement,
        }
    }
}

/// `POST /register-account` 요청 본문
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterAccountRequest {
    /// 공개 등록 모드에서만 사용되는 호출자 uid
    ///
    /// 등록 라우트가 인증 게이트 뒤에 있으면 이 필드는 무시되고
    /// 검증된 토큰의 uid가 사용됩니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    #[validate(length(min = 1, max = 120, message = "full_name is required"))]
    pub full_name: String,

    #[validate(custom(function = "validate_cpf"))]
    pub cpf: String,

    #[validate(email(message = "invalid email address"))]
    pub email: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    /// 평문 비밀 값 (역사적인 이유로 필드명이 hashed_password)
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub hashed_password: String,

    #[validate(nested)]
    pub address: AddressPayload,
}

/// `POST /login` 요청 본문
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub hashed_password: String,
}

/// `PATCH /update-address` 요청 본문
///
/// 주소 필드가 본문 최상위에 펼쳐져 들어옵니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateAddressRequest {
    #[validate(length(min = 1, max = 120, message = "city is required"))]
    pub city: String,

    #[validate(custom(function = "validate_cep"))]
    pub cep: String,

    #[validate(length(min = 1, max = 200, message = "street_name is required"))]
    pub street_name: String,

    #[validate(length(min = 1, max = 20, message = "number is required"))]
    pub number: String,

    pub complement: String,
}

impl From<UpdateAddressRequest> for Address {
    fn from(request: UpdateAddressRequest) -> Self {
        Address {
            city: request.city,
            cep: request.cep,
            street_name: request.street_name,
            number: request.number,
            complement: request.complement,
        }
    }
}

/// `PATCH /update-cpf` 요청 본문
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCpfRequest {
    #[validate(custom(function = "validate_cpf"))]
    pub cpf: String,
}

/// CPF 형식 검증: 숫자 11자리
///
/// 체크 디지트 계산 등 CPF의 내부 의미는 해석하지 않습니다.
fn validate_cpf(cpf: &str) -> Result<(), ValidationError> {
    if cpf.len() == 11 && cpf.chars().all(|c| c.is_ascii_digit()) {
        return Ok(());
    }
    Err(ValidationError::new("invalid_cpf").with_message("cpf must be 11 digits".into()))
}

/// CEP 형식 검증: 숫자 8자리
fn validate_cep(cep: &str) -> Result<(), ValidationError> {
    if cep.len() == 8 && cep.chars().all(|c| c.is_ascii_digit()) {
        return Ok(());
    }
    Err(ValidationError::new("invalid_cep").with_message("cep must be 8 digits".into()))
}

/// 전화번호 형식 검증: `+` 뒤에 숫자 8-15자리
fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = match phone.strip_prefix('+') {
        Some(rest) => rest,
        None => {
            return Err(ValidationError::new("invalid_phone")
                .with_message("phone must start with a country code".into()));
        }
    };

    if (8..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit()) {
        return Ok(());
    }
    Err(ValidationError::new("invalid_phone")
        .with_message("phone must contain 8 to 15 digits".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_register_request() -> RegisterAccountRequest {
        RegisterAccountRequest {
            uid: None,
            full_name: "Vinicius Abade".to_string(),
            cpf: "77777777777".to_string(),
            email: "abade@lavex.com".to_string(),
            phone: "+5541977777777".to_string(),
            hashed_password: "super-secret-1".to_string(),
            address: AddressPayload {
                city: "Curitiba".to_string(),
                cep: "77777777".to_string(),
                street_name: "Rua Beltrano do Ciclano".to_string(),
                number: "777".to_string(),
                complement: "Apto 7".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_register_request_passes() {
        assert!(valid_register_request().validate().is_ok());
    }

    #[test]
    fn test_register_rejects_bad_email() {
        let mut request = valid_register_request();
        request.email = "not-an-email".to_string();

        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("email"));
    }

    #[test]
    fn test_register_rejects_short_cpf() {
        let mut request = valid_register_request();
        request.cpf = "1234".to_string();

        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("cpf"));
    }

    #[test]
    fn test_register_rejects_phone_without_country_code() {
        let mut request = valid_register_request();
        request.phone = "41977777777".to_string();

        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("phone"));
    }

    #[test]
    fn test_register_rejects_bad_nested_cep() {
        let mut request = valid_register_request();
        request.address.cep = "12".to_string();

        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("address"));
    }

    #[test]
    fn test_login_request_validates_phone() {
        let request = LoginRequest {
            phone: "invalid".to_string(),
            hashed_password: "whatever".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_cpf_request() {
        let ok = UpdateCpfRequest { cpf: "88888888888".to_string() };
        assert!(ok.validate().is_ok());

        let bad = UpdateCpfRequest { cpf: "8888888888x".to_string() };
        assert!(bad.validate().is_err());
    }
}
