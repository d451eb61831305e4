//! # Authentication Configuration Module
//!
//! JWT 토큰 서명과 로그인 계정 등 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_MINUTES="30"
//! ```
//!
//! ### 로그인 계정 설정
//! ```bash
//! export ADMIN_USERNAME="admin"
//! # bcrypt 해시 (프로덕션에서는 해시만 허용)
//! export ADMIN_PASSWORD_HASH='$2b$12$...'
//! # 개발 환경 전용 평문 비밀번호 (시작 시 해시됨)
//! export ADMIN_PASSWORD="password"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{JwtConfig, AdminAccountConfig};
//!
//! let secret = JwtConfig::secret();
//! let ttl = JwtConfig::expiration();
//! let username = AdminAccountConfig::username();
//! ```

use std::env;
use chrono::Duration;
use jsonwebtoken::Algorithm;
use super::data_config::Environment;

const DEFAULT_EXPIRATION_MINUTES: i64 = 30;

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 토큰 서명 키, 알고리즘, 만료 시간을 관리합니다.
/// 서명 키를 교체하면 이전에 발급된 모든 토큰이 즉시 무효가 됩니다.
pub struct JwtConfig;

impl JwtConfig {
    /// 발급/검증 양쪽에서 사용하는 서명 알고리즘
    pub const ALGORITHM: Algorithm = Algorithm::HS256;

    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본값을 사용하며 경고 로그를 출력합니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your_very_secret_key_here".to_string()
            })
    }

    /// 액세스 토큰의 만료 시간을 분 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 30분. 0 이하, 파싱 불가, `Duration`으로 표현할 수 없는 값은
    /// 기본값으로 대체됩니다.
    pub fn expiration_minutes() -> i64 {
        Self::parse_expiration_minutes(env::var("JWT_EXPIRATION_MINUTES").ok().as_deref())
    }

    /// 액세스 토큰 기본 TTL
    pub fn expiration() -> Duration {
        Duration::try_minutes(Self::expiration_minutes())
            .unwrap_or_else(|| Duration::minutes(DEFAULT_EXPIRATION_MINUTES))
    }

    fn parse_expiration_minutes(raw: Option<&str>) -> i64 {
        raw.and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|minutes| *minutes > 0 && Duration::try_minutes(*minutes).is_some())
            .unwrap_or_else(|| {
                if raw.is_some() {
                    log::warn!("JWT_EXPIRATION_MINUTES 값이 올바르지 않습니다. 기본값 {}분 사용", DEFAULT_EXPIRATION_MINUTES);
                }
                DEFAULT_EXPIRATION_MINUTES
            })
    }
}

/// 로그인 가능한 단일 계정 설정
///
/// [`StaticCredentialVerifier`](crate::services::auth::StaticCredentialVerifier)가
/// 사용하는 자격 증명입니다. 실제 ID 백엔드로 교체할 경우 이 설정은 필요 없습니다.
pub struct AdminAccountConfig;

impl AdminAccountConfig {
    /// 로그인 사용자명. 기본값: "admin"
    pub fn username() -> String {
        env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string())
    }

    /// 미리 계산된 bcrypt 비밀번호 해시
    pub fn password_hash() -> Option<String> {
        env::var("ADMIN_PASSWORD_HASH").ok().filter(|h| !h.is_empty())
    }

    /// 평문 비밀번호 (개발/테스트 환경 전용)
    ///
    /// 프로덕션 환경에서는 항상 `None`을 반환합니다.
    /// 그 외 환경에서 설정되지 않으면 "password"를 사용합니다.
    pub fn plaintext_password() -> Option<String> {
        Self::plaintext_password_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 평문 비밀번호 정책
    pub fn plaintext_password_for_env(env: &Environment) -> Option<String> {
        match env {
            Environment::Production => None,
            _ => Some(env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "password".to_string())),
        }
    }
}
