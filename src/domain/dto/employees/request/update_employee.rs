//! # 직원 부분 수정 요청 DTO
//!
//! `PUT /employees/{employee_id}` 본문을 표현합니다.
//! 알 수 없는 필드는 역직렬화 단계에서 거부되고,
//! `employee_id`를 포함한 본문은 [`EmployeePatch`] 변환 단계에서 거부됩니다.

use serde::{Deserialize, Serialize};
use crate::domain::entities::employees::EmployeePatch;
use crate::errors::errors::AppError;
use crate::utils::string_utils::{validate_iso_date, validate_required_string};

/// 직원 부분 수정 요청
///
/// `employee_id` 슬롯은 식별자 변경 시도를 감지하기 위해서만 존재합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateEmployeeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

impl TryFrom<UpdateEmployeeRequest> for EmployeePatch {
    type Error = AppError;

    fn try_from(req: UpdateEmployeeRequest) -> Result<Self, Self::Error> {
        if req.employee_id.is_some() {
            return Err(AppError::ValidationError(
                "employee_id는 수정할 수 없습니다".to_string()
            ));
        }

        if let Some(ref name) = req.name {
            validate_required_string(name, "name")?;
        }
        if let Some(ref department) = req.department {
            validate_required_string(department, "department")?;
        }
        if let Some(ref joining_date) = req.joining_date {
            validate_iso_date(joining_date, "joining_date")?;
        }

        let patch = EmployeePatch {
            name: req.name,
            department: req.department,
            salary: req.salary,
            joining_date: req.joining_date,
            skills: req.skills,
        };

        if patch.is_empty() {
            return Err(AppError::ValidationError(
                "수정할 필드가 없습니다".to_string()
            ));
        }

        Ok(patch)
    }
}
