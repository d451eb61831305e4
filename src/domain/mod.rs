//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 직원 레코드와 부분 수정 패치
//! ├── DTOs          - 요청/응답 데이터 전송 객체
//! └── Models        - 토큰 클레임, 인증 주체
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Employee, EmployeePatch};
pub use dto::*;
pub use models::*;
