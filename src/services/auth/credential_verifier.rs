//! 자격 증명 검증 인터페이스
//!
//! 로그인 요청의 사용자명/비밀번호가 유효한지 판단합니다.
//! 실제 ID 백엔드(LDAP, 사용자 DB 등)는 [`CredentialVerifier`]를 구현하여
//! [`AuthService`](super::AuthService)에 주입하면 됩니다.

use async_trait::async_trait;
use crate::config::{AdminAccountConfig, PasswordConfig};
use crate::errors::errors::{AppError, AppResult, ErrorContext};

/// 사용자명/비밀번호 검증 capability
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// 자격 증명이 유효하면 `true`
    async fn check(&self, username: &str, password: &str) -> bool;
}

/// 설정된 단일 계정만 허용하는 검증기
///
/// 비밀번호는 bcrypt 해시로만 보관합니다.
pub struct StaticCredentialVerifier {
    username: String,
    password_hash: String,
}

impl StaticCredentialVerifier {
    /// 사용자명과 bcrypt 해시로 생성합니다.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// 평문 비밀번호를 해시하여 생성합니다.
    pub fn with_plaintext(username: impl Into<String>, password: &str, cost: u32) -> AppResult<Self> {
        let password_hash = bcrypt::hash(password, cost).context("비밀번호 해시 실패")?;

        Ok(Self::new(username, password_hash))
    }

    /// 환경 설정으로 생성합니다.
    ///
    /// `ADMIN_PASSWORD_HASH`가 우선하며, 없으면 비프로덕션 환경에 한해
    /// 평문 비밀번호를 해시합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 프로덕션에서 해시 미설정, 또는 해시 실패
    pub fn from_config() -> AppResult<Self> {
        let username = AdminAccountConfig::username();

        if let Some(hash) = AdminAccountConfig::password_hash() {
            return Ok(Self::new(username, hash));
        }

        match AdminAccountConfig::plaintext_password() {
            Some(password) => {
                log::warn!("ADMIN_PASSWORD_HASH not set, hashing plaintext ADMIN_PASSWORD (development only)");
                Self::with_plaintext(username, &password, PasswordConfig::bcrypt_cost())
            }
            None => Err(AppError::InternalError(
                "프로덕션 환경에서는 ADMIN_PASSWORD_HASH가 필요합니다".to_string()
            )),
        }
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn check(&self, username: &str, password: &str) -> bool {
        // 사용자명이 틀려도 bcrypt 검증을 수행해 응답 시간을 맞춘다
        let password_ok = bcrypt::verify(password, &self.password_hash).unwrap_or(false);
        password_ok && username == self.username
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> StaticCredentialVerifier {
        StaticCredentialVerifier::with_plaintext("admin", "password", 4).unwrap()
    }

    #[actix_web::test]
    async fn test_accepts_configured_pair() {
        assert!(verifier().check("admin", "password").await);
    }

    #[actix_web::test]
    async fn test_rejects_wrong_password_or_username() {
        let verifier = verifier();

        assert!(!verifier.check("admin", "Password").await);
        assert!(!verifier.check("root", "password").await);
        assert!(!verifier.check("", "").await);
    }

    #[actix_web::test]
    async fn test_malformed_hash_rejects_everything() {
        let verifier = StaticCredentialVerifier::new("admin", "not-a-bcrypt-hash");
        assert!(!verifier.check("admin", "password").await);
    }

    #[test]
    fn test_invalid_cost_is_internal_error() {
        let result = StaticCredentialVerifier::with_plaintext("admin", "password", 1);

        assert!(matches!(result, Err(AppError::InternalError(ref msg)) if msg.contains("비밀번호 해시 실패")));
    }

    #[actix_web::test]
    async fn test_usable_as_trait_object() {
        let verifier: Box<dyn CredentialVerifier> = Box::new(verifier());
        assert!(verifier.check("admin", "password").await);
    }
}
