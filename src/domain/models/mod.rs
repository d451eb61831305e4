//! # Domain Models
//!
//! 영속되지 않는 인증 관련 모델들입니다.
//!
//! - [`token`]: JWT 클레임과 발급 결과
//! - [`auth`]: 인증된 요청 주체와 인증 모드

pub mod token;
pub mod auth;

pub use token::*;
pub use auth::*;
