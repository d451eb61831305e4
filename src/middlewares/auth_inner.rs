//! 인증 미들웨어의 실제 서비스 구현
//!
//! `Authorization: Bearer <token>` 헤더를 검증하고, 성공하면
//! [`AuthenticatedUser`]를 request extension에 넣습니다.
//! [`TokenService`]는 `web::Data`로 등록된 인스턴스를 사용합니다.

use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::{AuthMode, AuthenticatedUser};
use crate::errors::errors::AppError;
use crate::services::auth::TokenService;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
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
        let mode = self.mode.clone();

        Box::pin(async move {
            let Some(token_service) = req.app_data::<web::Data<TokenService>>().cloned() else {
                let err = AppError::InternalError("TokenService가 등록되지 않았습니다".to_string());
                return Ok(reject(req, err));
            };

            match (&mode, authenticate(&req, &token_service)) {
                (_, Ok(user)) => {
                    log::debug!("인증 성공: {}", user.subject);
                    req.extensions_mut().insert(user);
                }
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패: {} {} - {}", req.method(), req.path(), err);
                    return Ok(reject(req, err));
                }
                // 헤더가 없거나 무효여도 진행, 인증이 필요한 핸들러는 extractor에서 거부된다
                (AuthMode::Optional, Err(err)) => {
                    log::debug!("선택적 인증: 주체 없음 ({})", err);
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn reject<B>(req: ServiceRequest, err: AppError) -> ServiceResponse<EitherBody<B>> {
    let response = err.error_response();
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}

fn authenticate(req: &ServiceRequest, token_service: &TokenService) -> Result<AuthenticatedUser, AppError> {
    let auth_header = req.headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let token = token_service.extract_bearer_token(auth_header)?;
    let subject = token_service.verify(token)?;

    Ok(AuthenticatedUser { subject })
}
