//! # 직원 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문과 쿼리 문자열을 구조화된 타입으로 변환합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`)
//! 2. **형식 검증**: 빈 값, 날짜 형식 (`validator`, [`crate::utils::string_utils`])
//! 3. **비즈니스 검증**: 식별자 수정 금지, 음수 페이지 인자 거부

pub mod create_employee;
pub mod update_employee;
pub mod list_employees;

pub use create_employee::CreateEmployeeRequest;
pub use update_employee::UpdateEmployeeRequest;
pub use list_employees::{ListEmployeesQuery, Pagination, SkillSearchQuery};
