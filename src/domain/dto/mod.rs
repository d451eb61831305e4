//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 데이터를 전달하는 객체들입니다.
//!
//! ## 변환 패턴
//! - **Request → Entity**: `impl From<Request> for Entity`
//! - **Request → Patch**: `impl TryFrom<Request> for Patch` (검증 실패 시 `AppError`)
//! - **Aggregate → Response**: 전용 생성 함수
//!
//! ```text
//! dto/
//! ├── employees/
//! │   ├── request/   CreateEmployeeRequest, UpdateEmployeeRequest, ListEmployeesQuery
//! │   └── response/  MessageResponse, DepartmentSalaryResponse
//! └── tokens/        LoginForm, TokenResponse
//! ```

pub mod employees;
pub mod tokens;

pub use employees::*;
pub use tokens::*;
