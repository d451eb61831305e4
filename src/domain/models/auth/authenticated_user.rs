use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::errors::errors::AppError;

/// 검증된 토큰에서 추출된 요청 주체
///
/// [`AuthMiddleware`](crate::middlewares::AuthMiddleware)가 토큰 검증에 성공하면
/// request extension에 저장합니다. 핸들러 인자로 선언하면 해당 엔드포인트는
/// 인증이 필수가 됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 토큰의 `sub` 클레임 (로그인 사용자명)
    pub subject: String,
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "유효하지 않거나 만료된 토큰입니다".to_string()
            ))),
        }
    }
}
