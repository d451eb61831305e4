//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 저장소, 서버, 환경 관련 설정
//! - [`auth_config`] - JWT, 로그인 계정 관련 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소 설정
//! export STORAGE_BACKEND="mongodb"     # mongodb, memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="assessment_db"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_MINUTES="30"
//!
//! # 환경 설정
//! export ENVIRONMENT="production"      # development, test, staging, production
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
