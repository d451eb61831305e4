//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main`에서 명시적으로 조립되어 `web::Data`로 핸들러에 주입됩니다.
//!
//! # Features
//!
//! - 직원 레코드 생성, 조회, 부분 수정, 삭제
//! - 부서별 목록, 기술 검색, 부서별 평균 급여
//! - 자격 증명 검증 및 JWT Bearer 토큰 발급/검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::TokenService, employees::EmployeeService};
//!
//! let tokens = TokenService::from_config();
//! let employees = EmployeeService::new(store.clone());
//! ```

pub mod auth;
pub mod employees;
