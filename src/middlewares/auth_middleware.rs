//! 요청 인증 게이트 미들웨어
//!
//! 보호된 라우트 앞에서 베어러 자격 증명을 추출하고 외부 신원 제공자로
//! 검증한 뒤, 검증된 `UserUid`를 요청 extensions에 넣어 다운스트림
//! 유스케이스에 전달합니다. 인증이 불필요한 라우트는 이 게이트를 아예
//! 거치지 않습니다.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::middlewares::auth_inner::AuthGateService;

/// 인증 게이트
///
/// 라우트 스코프에 `.wrap(AuthGate)`로 적용합니다.
pub struct AuthGate;

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthGateService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::header;
    use actix_web::{App, HttpResponse, test, web};
    use serde_json::json;

    use super::*;
    use crate::core::context::{AppContext, AppSettings};
    use crate::domain::auth::UserUid;
    use crate::services::account::testing::{InMemoryAccountStore, StaticVerifier};

    async fn whoami(uid: UserUid) -> HttpResponse {
        HttpResponse::Ok().json(json!({ "uid": uid.as_str() }))
    }

    fn test_context() -> web::Data<AppContext> {
        web::Data::new(AppContext::new(
            Arc::new(InMemoryAccountStore::new()),
            Arc::new(StaticVerifier {
                accepted_token: "good-token".to_string(),
                uid: "u1".to_string(),
            }),
            AppSettings {
                service_name: "account_service_test".to_string(),
                register_requires_auth: true,
            },
        ))
    }

    #[actix_web::test]
    async fn test_missing_authorization_header_is_rejected_with_challenge() {
        let app = test::init_service(
            App::new().app_data(test_context()).service(
                web::scope("")
                    .wrap(AuthGate)
                    .route("/whoami", web::get().to(whoami)),
            ),
        )
        .await;

        let response = test::call_service(&app, test::TestRequest::get().uri("/whoami").to_request()).await;

        assert_eq!(response.status(), 401);
        assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
    }

    #[actix_web::test]
    async fn test_unverifiable_token_is_rejected_with_challenge() {
        let app = test::init_service(
            App::new().app_data(test_context()).service(
                web::scope("")
                    .wrap(AuthGate)
                    .route("/whoami", web::get().to(whoami)),
            ),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((header::AUTHORIZATION, "Bearer forged-token"))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), 401);
        let challenge = response
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(challenge.contains("invalid_token"));
    }

    #[actix_web::test]
    async fn test_verified_uid_reaches_the_handler() {
        let app = test::init_service(
            App::new().app_data(test_context()).service(
                web::scope("")
                    .wrap(AuthGate)
                    .route("/whoami", web::get().to(whoami)),
            ),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((header::AUTHORIZATION, "Bearer good-token"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["uid"], "u1");
    }

    #[actix_web::test]
    async fn test_gate_without_wired_context_is_internal_fault() {
        // 시작 배선 없이 게이트가 실행되는 프로그래밍 오류 경로
        let app = test::init_service(
            App::new().service(
                web::scope("")
                    .wrap(AuthGate)
                    .route("/whoami", web::get().to(whoami)),
            ),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((header::AUTHORIZATION, "Bearer good-token"))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), 500);
    }
}
