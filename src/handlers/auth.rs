//! 토큰 발급 핸들러
//!
//! OAuth2 password grant와 같은 폼 형식으로 자격 증명을 받아 Bearer 토큰을 발급합니다.
//!
//! ```bash
//! curl -X POST http://localhost:8080/token \
//!   -d "username=admin&password=password"
//! ```

use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::tokens::LoginForm;
use crate::errors::errors::AppError;
use crate::services::auth::AuthService;

#[post("/token")]
pub async fn issue_token(
    auth_service: web::Data<AuthService>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    form.validate()?;

    let response = auth_service
        .login(&form.username, &form.password)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
