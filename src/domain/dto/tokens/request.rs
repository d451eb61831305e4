//! 토큰 발급 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// `POST /token` 폼 본문 (`application/x-www-form-urlencoded`)
///
/// OAuth2 password grant 폼과 동일하게 `username`, `password` 필드를 사용합니다.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_masks_password() {
        let form = LoginForm {
            username: "admin".to_string(),
            password: "password".to_string(),
        };

        let rendered = format!("{:?}", form);
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("password\""));
    }

    #[test]
    fn test_empty_fields_rejected() {
        let form = LoginForm {
            username: String::new(),
            password: String::new(),
        };

        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
        assert!(errors.field_errors().contains_key("password"));
    }
}
