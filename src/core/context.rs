//! # Application Context - 명시적 의존성 컨텍스트
//!
//! 프로세스 시작 시 정확히 한 번 조립되는 불변 의존성 컨텍스트입니다.
//! 전역 가변 싱글톤 컨테이너 대신, `main`에서 구체 구현(MongoDB 저장소,
//! Firebase 검증자)을 배선한 뒤 `actix_web::web::Data`로 모든 요청 스코프
//! 핸들러와 인증 게이트에 참조로 전달됩니다.
//!
//! ## 숨은 전역 상태와의 비교
//!
//! | 전역 싱글톤 컨테이너 | 이 컨텍스트 |
//! |----------------------|-------------|
//! | 정적 가변 레지스트리 | `main` 지역 변수 → `web::Data` |
//! | 런타임 타입 검색 (`TypeId`) | 컴파일 타임 필드 접근 |
//! | 초기화 전 접근 시 패닉 | `Uninitialized` 에러 값 (500) |
//! | 어디서나 접근 가능 | 주입받은 곳에서만 접근 가능 |
//!
//! "한 번 초기화" 의미는 유지됩니다: 시작 배선이 끝난 뒤 컨텍스트는
//! 읽기 전용이며, 요청 간 공유되는 가변 상태는 존재하지 않습니다.
//!
//! ## 요청 스코프 유스케이스
//!
//! 유스케이스는 상태가 없으므로 접근자가 호출될 때마다 공유 저장소로
//! 새 인스턴스를 만들어 반환합니다. 검증자는 모든 요청이 공유하는 단일
//! 인스턴스입니다.

use std::sync::Arc;

use actix_web::dev::ServiceRequest;
use actix_web::web;

use crate::config::{AuthPolicyConfig, ServerConfig};
use crate::core::errors::AppError;
use crate::repositories::AccountStore;
use crate::services::account::{
    LoginUseCase, RegisterUseCase, RetrieveUserUseCase, UpdateAddressUseCase, UpdateCpfUseCase,
};
use crate::services::auth::AuthenticationVerifier;

/// 시작 시 한 번 읽히는 프로세스 설정 스냅샷
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// 서비스 이름 (헬스체크 응답에 노출)
    pub service_name: String,
    /// `/register-account`의 베어러 인증 요구 여부
    pub register_requires_auth: bool,
}

impl AppSettings {
    /// 환경 변수에서 설정 스냅샷을 만듭니다. 이후 재조회는 없습니다.
    pub fn from_env() -> Self {
        Self {
            service_name: ServerConfig::service_name(),
            register_requires_auth: AuthPolicyConfig::register_requires_auth(),
        }
    }
}

/// 애플리케이션 의존성 컨텍스트
///
/// 구체 `AccountStore`와 `AuthenticationVerifier`를 보유하고,
/// 요청마다 신선한 유스케이스 인스턴스를 만들어 제공합니다.
pub struct AppContext {
    store: Arc<dyn AccountStore>,
    verifier: Arc<dyn AuthenticationVerifier>,
    settings: AppSettings,
}

impl AppContext {
    pub fn new(
        store: Arc<dyn AccountStore>,
        verifier: Arc<dyn AuthenticationVerifier>,
        settings: AppSettings,
    ) -> Self {
        Self {
            store,
            verifier,
            settings,
        }
    }

    /// 공유 토큰 검증자
    pub fn verifier(&self) -> Arc<dyn AuthenticationVerifier> {
        self.verifier.clone()
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn register_use_case(&self) -> RegisterUseCase {
        RegisterUseCase::new(self.store.clone())
    }

    pub fn login_use_case(&self) -> LoginUseCase {
        LoginUseCase::new(self.store.clone())
    }

    pub fn retrieve_user_use_case(&self) -> RetrieveUserUseCase {
        RetrieveUserUseCase::new(self.store.clone())
    }

    pub fn update_address_use_case(&self) -> UpdateAddressUseCase {
        UpdateAddressUseCase::new(self.store.clone())
    }

    pub fn update_cpf_use_case(&self) -> UpdateCpfUseCase {
        UpdateCpfUseCase::new(self.store.clone())
    }

    /// 미들웨어에서 앱 데이터로 등록된 컨텍스트를 꺼냅니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Uninitialized` - 시작 배선 없이 요청 파이프라인이
    ///   실행된 경우. 프로그래밍 계약 위반이며 500으로 응답됩니다.
    pub fn from_service_request(req: &ServiceRequest) -> Result<Arc<AppContext>, AppError> {
        req.app_data::<web::Data<AppContext>>()
            .map(|data| data.clone().into_inner())
            .ok_or(AppError::Uninitialized)
    }
}
