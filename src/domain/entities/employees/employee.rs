//! Employee Entity Implementation
//!
//! 직원 레코드 엔티티와 부분 수정용 패치 구조체입니다.

use serde::{Deserialize, Serialize};

/// 직원 엔티티
///
/// 디렉터리의 유일한 도메인 엔티티입니다. `employee_id`는 생성 이후 변경되지 않으며,
/// 저장소 전체에서 유일합니다.
///
/// MongoDB 문서의 `_id` 필드는 역직렬화 시 무시됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// 비즈니스 식별자 (unique, immutable)
    pub employee_id: String,
    /// 이름
    pub name: String,
    /// 부서 (필터 및 집계 키)
    pub department: String,
    /// 급여
    pub salary: f64,
    /// 입사일 (`YYYY-MM-DD`, 문자열 정렬 = 날짜 정렬)
    pub joining_date: String,
    /// 보유 기술 목록 (순서 유지)
    pub skills: Vec<String>,
}

impl Employee {
    /// `skill`과 정확히 일치하는 기술을 보유하고 있는지 확인 (대소문자 구분)
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    /// 패치의 존재하는 필드만 병합합니다.
    pub fn apply(&mut self, patch: EmployeePatch) {
        let EmployeePatch {
            name,
            department,
            salary,
            joining_date,
            skills,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(department) = department {
            self.department = department;
        }
        if let Some(salary) = salary {
            self.salary = salary;
        }
        if let Some(joining_date) = joining_date {
            self.joining_date = joining_date;
        }
        if let Some(skills) = skills {
            self.skills = skills;
        }
    }
}

/// 직원 부분 수정 패치
///
/// 변경 가능한 필드마다 하나의 선택적 슬롯을 가집니다.
/// `employee_id`는 수정 대상이 아니므로 슬롯이 없습니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

impl EmployeePatch {
    /// 변경할 필드가 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.department.is_none()
            && self.salary.is_none()
            && self.joining_date.is_none()
            && self.skills.is_none()
    }
}
