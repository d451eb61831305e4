//! JWT 클레임 및 발급 결과
//!
//! RFC 7519 등록 클레임 중 `sub`, `iat`, `exp`만 사용합니다.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 토큰의 주체 (로그인 사용자명)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체
    pub sub: String,
    /// 토큰 발급 시간
    pub iat: i64,
    /// 토큰 만료 시간
    pub exp: i64,
}

/// 서명된 토큰과 만료 정보
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// 서명된 JWT 문자열
    pub token: String,
    /// 절대 만료 시각
    pub expires_at: DateTime<Utc>,
    /// 발급 시점 기준 남은 유효 시간 (초)
    pub expires_in: i64,
}
