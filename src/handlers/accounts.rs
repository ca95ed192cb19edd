//! # Account HTTP Handlers
//!
//! 계정 관리 엔드포인트의 핸들러 함수들입니다. 각 핸들러는
//!
//! 1. 요청 본문을 검증하고 (`validator`)
//! 2. DTO를 유스케이스 InputPort로 변환한 뒤 (인증된 연산은 게이트가
//!    검증한 `UserUid`를 붙여서)
//! 3. `AppContext`에서 얻은 신선한 유스케이스를 실행하고
//! 4. OutputPort를 응답 DTO로 변환해 반환합니다.
//!
//! 실패는 전부 `AppError`로 전파되며 HTTP 변환은 `ResponseError` 구현
//! 한 곳에서 일어납니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 인증 | 성공 |
//! |--------|------|------|------|
//! | `POST` | `/register-account` | 정책에 따름 | 201 `{"msg":"ok"}` |
//! | `POST` | `/login` | 불필요 | 200 `{"msg":"ok"}` |
//! | `GET` | `/retrieve-user` | 필요 | 200 프로필 전체 |
//! | `PATCH` | `/update-address` | 필요 | 200 `{"msg":"ok"}` |
//! | `PATCH` | `/update-cpf` | 필요 | 200 `{"msg":"ok"}` |

use actix_web::{HttpResponse, get, patch, post, web};
use validator::Validate;

use crate::core::context::AppContext;
use crate::core::errors::AppError;
use crate::domain::auth::UserUid;
use crate::domain::dto::accounts::{
    AckResponse, LoginRequest, RegisterAccountRequest, UpdateAddressRequest, UpdateCpfRequest,
    UserProfileResponse,
};
use crate::domain::ports::{
    LoginInputPort, RegisterInputPort, RetrieveUserInputPort, UpdateAddressInputPort,
    UpdateCpfInputPort,
};
use crate::services::UseCase;

/// 계정 등록 핸들러
///
/// 게이트 뒤에 배치되면 호출자 uid는 검증된 토큰에서 오고 본문의 `uid`는
/// 무시됩니다. 공개 라우트로 배치된 경우(등록 인증 비활성 정책)에는
/// 본문이 `uid`를 제공해야 합니다.
#[post("/register-account")]
pub async fn register_account(
    context: web::Data<AppContext>,
    caller: Option<UserUid>,
    payload: web::Json<RegisterAccountRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    let payload = payload.into_inner();

    let uid = match caller {
        Some(verified) => verified.into_inner(),
        None => payload
            .uid
            .clone()
            .ok_or_else(|| AppError::missing_field("uid"))?,
    };

    let output = context
        .register_use_case()
        .execute(RegisterInputPort {
            uid,
            full_name: payload.full_name,
            cpf: payload.cpf,
            email: payload.email,
            phone: payload.phone,
            hashed_password: payload.hashed_password,
            address: payload.address.into(),
        })
        .await?;

    Ok(HttpResponse::Created().json(AckResponse::new(output.msg)))
}

/// 로그인 핸들러
///
/// 미등록 전화번호는 404, 비밀번호 불일치는 400으로 응답합니다.
#[post("/login")]
pub async fn login(
    context: web::Data<AppContext>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    let payload = payload.into_inner();

    let output = context
        .login_use_case()
        .execute(LoginInputPort {
            phone: payload.phone,
            hashed_password: payload.hashed_password,
        })
        .await?;

    Ok(HttpResponse::Ok().json(AckResponse::new(output.msg)))
}

/// 사용자 프로필 조회 핸들러
#[get("/retrieve-user")]
pub async fn retrieve_user(
    context: web::Data<AppContext>,
    caller: UserUid,
) -> Result<HttpResponse, AppError> {
    let output = context
        .retrieve_user_use_case()
        .execute(RetrieveUserInputPort {
            uid: caller.into_inner(),
        })
        .await?;

    Ok(HttpResponse::Ok().json(UserProfileResponse::from(output)))
}

/// 주소 갱신 핸들러
#[patch("/update-address")]
pub async fn update_address(
    context: web::Data<AppContext>,
    caller: UserUid,
    payload: web::Json<UpdateAddressRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let output = context
        .update_address_use_case()
        .execute(UpdateAddressInputPort {
            uid: caller.into_inner(),
            address: payload.into_inner().into(),
        })
        .await?;

    Ok(HttpResponse::Ok().json(AckResponse::new(output.msg)))
}

/// CPF 갱신 핸들러
#[patch("/update-cpf")]
pub async fn update_cpf(
    context: web::Data<AppContext>,
    caller: UserUid,
    payload: web::Json<UpdateCpfRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let output = context
        .update_cpf_use_case()
        .execute(UpdateCpfInputPort {
            uid: caller.into_inner(),
            cpf: payload.into_inner().cpf,
        })
        .await?;

    Ok(HttpResponse::Ok().json(AckResponse::new(output.msg)))
}
