//! 인증 게이트의 핵심 로직
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::core::context::AppContext;
use crate::core::errors::AppError;
use crate::domain::auth::{BearerToken, UserUid};

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthGateService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            match authorize_request(&req).await {
                Ok(uid) => {
                    log::debug!("인증 성공: 사용자 UID {}", uid.as_str());

                    // 검증된 주체 식별자를 다운스트림 핸들러에 전달
                    req.extensions_mut().insert(uid);

                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(err) => {
                    // 에러 → 와이어 변환 한 곳에서 상태/챌린지/로깅 처리
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    Ok(res)
                }
            }
        })
    }
}

/// 요청의 베어러 자격 증명을 외부 검증자로 확인하고 주체 식별자를 얻습니다.
///
/// 1. `Authorization` 헤더가 없으면 `MissingCredential` (401)
/// 2. 검증자가 토큰을 거부하면 `Unauthenticated` (401)
/// 3. 성공하면 `UserUid` 반환
async fn authorize_request(req: &ServiceRequest) -> Result<UserUid, AppError> {
    let context = AppContext::from_service_request(req)?;

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::MissingCredential)?;

    let token = BearerToken::from_authorization_header(auth_header)?;

    context.verifier().authenticate_by_token(&token).await
}
