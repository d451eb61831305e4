//! 인증 서비스 모듈
//!
//! 대칭키 Bearer 토큰 발급/검증과 자격 증명 검증을 담당합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 만료/위조 토큰을 구분하지 않는 단일 실패 응답
//! - 갱신, 폐기 기능 없음 (재로그인만 가능)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, StaticCredentialVerifier, TokenService};
//!
//! let tokens = Arc::new(TokenService::from_config());
//! let verifier = Arc::new(StaticCredentialVerifier::from_config()?);
//! let auth = AuthService::new(verifier, tokens.clone());
//! let response = auth.login("admin", "password").await?;
//! ```

pub mod token_service;
pub mod credential_verifier;
pub mod auth_service;

pub use token_service::*;
pub use credential_verifier::*;
pub use auth_service::*;
