//! JWT 토큰 관리 서비스 구현
//!
//! 서명된, 만료 시간이 있는 Bearer 토큰을 발급하고 검증합니다.
//! 서버 측 세션 상태는 없으며, 유효성은 서명과 만료 시각만으로 결정됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use crate::config::JwtConfig;
use crate::domain::models::token::{IssuedToken, TokenClaims};
use crate::errors::errors::{AppError, AppResult, ErrorContext};

const INVALID_TOKEN_MESSAGE: &str = "유효하지 않거나 만료된 토큰입니다";

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용합니다. 불변 키만 보유하므로 스레드 간 공유에
/// 별도의 동기화가 필요 없습니다.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    default_ttl: Duration,
}

impl TokenService {
    /// 비밀키와 기본 TTL로 서비스를 생성합니다.
    pub fn new(secret: &[u8], default_ttl: Duration) -> Self {
        let mut validation = Validation::new(JwtConfig::ALGORITHM);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            default_ttl,
        }
    }

    /// 환경 설정(`JWT_SECRET`, `JWT_EXPIRATION_MINUTES`)으로 서비스를 생성합니다.
    pub fn from_config() -> Self {
        Self::new(JwtConfig::secret().as_bytes(), JwtConfig::expiration())
    }

    /// 설정된 기본 TTL
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// `subject`에 대한 토큰을 발급합니다.
    ///
    /// 만료 시각은 발급 시각 + `ttl`입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 빈 subject, 표현할 수 없는 만료 시각
    /// * `AppError::InternalError` - 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let issued = token_service.issue("alice", Duration::minutes(30))?;
    /// assert_eq!(token_service.verify(&issued.token)?, "alice");
    /// ```
    pub fn issue(&self, subject: &str, ttl: Duration) -> AppResult<IssuedToken> {
        if subject.is_empty() {
            return Err(AppError::ValidationError("토큰 subject가 비어 있습니다".to_string()));
        }

        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::ValidationError("토큰 TTL이 너무 큽니다".to_string()))?;

        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(JwtConfig::ALGORITHM), &claims, &self.encoding_key)
            .context("JWT 토큰 생성 실패")?;

        Ok(IssuedToken {
            token,
            expires_at,
            expires_in: ttl.num_seconds(),
        })
    }

    /// 기본 TTL로 토큰을 발급합니다.
    pub fn issue_default(&self, subject: &str) -> AppResult<IssuedToken> {
        self.issue(subject, self.default_ttl)
    }

    /// 토큰을 검증하고 subject를 반환합니다.
    ///
    /// 서명 불일치, 디코딩 불가, 만료(`now >= exp`)를 구분하지 않고
    /// 모두 동일한 `AppError::AuthenticationError`로 반환합니다.
    pub fn verify(&self, token: &str) -> AppResult<String> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                log::debug!("토큰 검증 실패: {:?}", e.kind());
                invalid_token()
            })?;

        // exp와 현재 시각이 같은 초도 만료로 본다
        if claims.exp <= Utc::now().timestamp() {
            log::debug!("토큰 만료: sub={}", claims.sub);
            return Err(invalid_token());
        }

        Ok(claims.sub)
    }

    /// `Authorization` 헤더 값에서 토큰 부분을 추출합니다.
    ///
    /// 스킴 이름(`Bearer`)은 대소문자를 구분하지 않습니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        match auth_header.trim().split_once(' ') {
            Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
                Ok(token.trim())
            }
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }
}

fn invalid_token() -> AppError {
    AppError::AuthenticationError(INVALID_TOKEN_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(b"test-secret-key", Duration::minutes(30))
    }

    #[test]
    fn test_issue_then_verify_returns_subject() {
        let service = service();
        let issued = service.issue("alice", Duration::minutes(30)).unwrap();

        assert_eq!(service.verify(&issued.token).unwrap(), "alice");
        assert_eq!(issued.expires_in, 1800);
    }

    #[test]
    fn test_expiry_is_issue_time_plus_ttl() {
        let service = service();
        let before = Utc::now().timestamp();
        let issued = service.issue_default("alice").unwrap();
        let after = Utc::now().timestamp();

        let exp = issued.expires_at.timestamp();
        assert!(exp >= before + 1800 && exp <= after + 1800);
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let service = service();
        let issued = service.issue("alice", Duration::seconds(-5)).unwrap();

        assert!(matches!(
            service.verify(&issued.token),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_zero_ttl_token_is_invalid() {
        let service = service();
        let issued = service.issue("alice", Duration::zero()).unwrap();

        assert!(service.verify(&issued.token).is_err());
    }

    #[test]
    fn test_token_from_other_key_is_invalid() {
        let other = TokenService::new(b"another-secret", Duration::minutes(30));
        let issued = other.issue("alice", Duration::minutes(30)).unwrap();

        assert!(matches!(
            service().verify(&issued.token),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_expired_and_forged_errors_are_indistinguishable() {
        let service = service();
        let expired = service.issue("alice", Duration::seconds(-5)).unwrap();
        let forged = TokenService::new(b"another-secret", Duration::minutes(30))
            .issue("alice", Duration::minutes(30))
            .unwrap();

        let expired_err = service.verify(&expired.token).unwrap_err().to_string();
        let forged_err = service.verify(&forged.token).unwrap_err().to_string();
        assert_eq!(expired_err, forged_err);
    }

    #[test]
    fn test_malformed_tokens_are_invalid_not_panics() {
        let service = service();

        for token in ["", "garbage", "a.b.c", "eyJhbGciOiJIUzI1NiJ9..", "🙂.🙂.🙂"] {
            assert!(matches!(
                service.verify(token),
                Err(AppError::AuthenticationError(_))
            ));
        }
    }

    #[test]
    fn test_tampered_payload_is_invalid() {
        let service = service();
        let issued = service.issue("alice", Duration::minutes(30)).unwrap();
        let other = service.issue("mallory", Duration::minutes(30)).unwrap();

        // alice 서명에 mallory 페이로드를 이어 붙인다
        let alice_parts: Vec<&str> = issued.token.split('.').collect();
        let mallory_parts: Vec<&str> = other.token.split('.').collect();
        let spliced = format!("{}.{}.{}", alice_parts[0], mallory_parts[1], alice_parts[2]);

        assert!(service.verify(&spliced).is_err());
    }

    #[test]
    fn test_empty_subject_rejected() {
        assert!(matches!(
            service().issue("", Duration::minutes(1)),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_unrepresentable_ttl_is_error_not_panic() {
        let service = service();

        assert!(matches!(
            service.issue("alice", Duration::MAX),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            service.issue("alice", Duration::MIN),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();

        assert_eq!(service.extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert_eq!(service.extract_bearer_token("bearer abc").unwrap(), "abc");
        assert!(service.extract_bearer_token("Basic dXNlcjpwYXNz").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
        assert!(service.extract_bearer_token("abc.def.ghi").is_err());
    }
}
