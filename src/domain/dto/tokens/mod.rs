//! 토큰 발급 DTO

pub mod request;
pub mod response;

pub use request::LoginForm;
pub use response::TokenResponse;
