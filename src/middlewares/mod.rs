//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인의 횡단 관심사를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 검증
//! - 검증된 주체를 request extension에 저장
//! - 선택적/강제 인증 모드 지원
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .app_data(web::Data::new(TokenService::from_config()))
//!     .service(
//!         web::scope("/employees")
//!             .wrap(AuthMiddleware::optional())
//!             .configure(configure_employee_routes)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
