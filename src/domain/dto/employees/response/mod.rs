//! # 직원 관련 응답 DTO 모듈

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// 단순 결과 메시지 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// 부서별 평균 급여 항목
///
/// ```json
/// { "department": "Eng", "avg_salary": 150.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSalaryResponse {
    pub department: String,
    pub avg_salary: f64,
}

impl DepartmentSalaryResponse {
    /// 집계 결과를 부서명 순 배열로 변환합니다.
    pub fn from_averages(averages: BTreeMap<String, f64>) -> Vec<Self> {
        averages
            .into_iter()
            .map(|(department, avg_salary)| Self { department, avg_salary })
            .collect()
    }
}
