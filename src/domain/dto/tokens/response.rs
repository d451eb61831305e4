//! 토큰 발급 응답 DTO

use serde::{Deserialize, Serialize};

/// `POST /token` 성공 응답
///
/// ```json
/// { "access_token": "eyJ...", "token_type": "bearer", "expires_in": 1800 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// 만료까지 남은 시간 (초)
    pub expires_in: i64,
}

impl TokenResponse {
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            expires_in,
        }
    }
}
