//! Bearer 토큰 인증 미들웨어
//!
//! # 모드
//!
//! - [`AuthMiddleware::required`]: 유효한 토큰이 없으면 401로 즉시 응답
//! - [`AuthMiddleware::optional`]: 유효한 토큰이면 주체를 기록하고, 아니면 그대로 진행
//!
//! Optional 모드로 감싼 스코프에서는 핸들러가 [`AuthenticatedUser`] 인자를 선언하는 것으로
//! 엔드포인트별 인증 필수 여부를 정합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(TokenService::from_config()))
//!     .service(
//!         web::scope("/employees")
//!             .wrap(AuthMiddleware::optional())
//!             .service(create_employee)   // AuthenticatedUser 인자 → 인증 필수
//!             .service(get_employee)      // 인증 불필요
//!     )
//! ```
//!
//! [`AuthenticatedUser`]: crate::domain::models::auth::AuthenticatedUser

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::auth::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;

pub struct AuthMiddleware {
    mode: AuthMode,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
        }))
    }
}
