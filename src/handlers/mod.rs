//! HTTP 요청 핸들러 모듈
//!
//! 핸들러는 추출자(`web::Json`, `web::Query`, `web::Form`, `AuthenticatedUser`)로
//! 입력을 받고, `web::Data`로 주입된 서비스에 위임한 뒤 JSON으로 응답합니다.
//! 에러는 [`AppError`](crate::errors::AppError)의 `ResponseError` 구현이
//! `{"error": "..."}` 형태로 변환합니다.

pub mod auth;
pub mod employees;
