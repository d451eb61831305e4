//! 로그인(토큰 발급) 서비스
//!
//! [`CredentialVerifier`]가 자격 증명을 승인한 경우에만 [`TokenService`]로 토큰을 발급합니다.

use std::sync::Arc;
use crate::domain::dto::tokens::TokenResponse;
use crate::errors::errors::{AppError, AppResult};
use super::credential_verifier::CredentialVerifier;
use super::token_service::TokenService;

/// 자격 증명 → Bearer 토큰 교환 서비스
#[derive(Clone)]
pub struct AuthService {
    verifier: Arc<dyn CredentialVerifier>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, tokens: Arc<TokenService>) -> Self {
        Self { verifier, tokens }
    }

    /// 사용자명/비밀번호를 검증하고 기본 TTL의 액세스 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 자격 증명 불일치
    /// * `AppError::InternalError` - 토큰 서명 실패
    pub async fn login(&self, username: &str, password: &str) -> AppResult<TokenResponse> {
        if !self.verifier.check(username, password).await {
            log::warn!("로그인 실패 - 사용자: {}", username);
            return Err(AppError::AuthenticationError(
                "Invalid username or password".to_string()
            ));
        }

        let issued = self.tokens.issue_default(username)?;
        log::info!("토큰 발급 - 사용자: {}, 만료: {}", username, issued.expires_at);

        Ok(TokenResponse::bearer(issued.token, issued.expires_in))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Duration;

    struct AllowOnly(&'static str, &'static str);

    #[async_trait]
    impl CredentialVerifier for AllowOnly {
        async fn check(&self, username: &str, password: &str) -> bool {
            username == self.0 && password == self.1
        }
    }

    fn service() -> (AuthService, Arc<TokenService>) {
        let tokens = Arc::new(TokenService::new(b"login-test-secret", Duration::minutes(30)));
        let service = AuthService::new(Arc::new(AllowOnly("alice", "s3cret")), tokens.clone());
        (service, tokens)
    }

    #[actix_web::test]
    async fn test_login_issues_verifiable_token() {
        let (service, tokens) = service();
        let response = service.login("alice", "s3cret").await.unwrap();

        assert_eq!(response.token_type, "bearer");
        assert_eq!(response.expires_in, 1800);
        assert_eq!(tokens.verify(&response.access_token).unwrap(), "alice");
    }

    #[actix_web::test]
    async fn test_login_with_bad_credentials_fails() {
        let (service, _) = service();

        assert!(matches!(
            service.login("alice", "wrong").await,
            Err(AppError::AuthenticationError(_))
        ));
    }
}
