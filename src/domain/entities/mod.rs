//! # Domain Entities
//!
//! 저장소에 영속되는 핵심 도메인 객체들입니다.
//!
//! - [`employees::Employee`]: 직원 레코드
//! - [`employees::EmployeePatch`]: 부분 수정 패치

pub mod employees;

pub use employees::*;
