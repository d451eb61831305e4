//! # 직원 생성 요청 DTO
//!
//! `POST /employees` 본문을 표현합니다.
//!
//! ## 검증 규칙
//!
//! - `employee_id`, `name`, `department`: 공백이 아닌 문자열
//! - `joining_date`: `YYYY-MM-DD`
//! - `skills`: 빈 배열 허용
//!
//! 식별자 중복 여부는 저장소가 원자적으로 검사합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::employees::Employee;
use crate::utils::string_utils::{iso_date, not_blank};

/// 새로운 직원 레코드 생성을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "employee_id": "E001",
///   "name": "Alice",
///   "department": "Eng",
///   "salary": 75000.0,
///   "joining_date": "2023-01-15",
///   "skills": ["go", "rust"]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(
        length(max = 64, message = "employee_id는 64자 이하여야 합니다"),
        custom(function = "not_blank")
    )]
    pub employee_id: String,

    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(custom(function = "not_blank"))]
    pub department: String,

    pub salary: f64,

    #[validate(custom(function = "iso_date"))]
    pub joining_date: String,

    pub skills: Vec<String>,
}

impl From<CreateEmployeeRequest> for Employee {
    fn from(req: CreateEmployeeRequest) -> Self {
        Self {
            employee_id: req.employee_id,
            name: req.name,
            department: req.department,
            salary: req.salary,
            joining_date: req.joining_date,
            skills: req.skills,
        }
    }
}
