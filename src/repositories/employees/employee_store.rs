//! 직원 저장소 인터페이스
//!
//! 핸들러와 서비스는 구체 타입 대신 `Arc<dyn EmployeeStore>`에 의존합니다.
//! 구현체는 내부적으로 동기화되어 있어야 하며, 호출자는 연산 사이에
//! 어떤 잠금도 유지하지 않습니다.

use std::collections::BTreeMap;
use async_trait::async_trait;
use crate::domain::dto::employees::Pagination;
use crate::domain::entities::employees::{Employee, EmployeePatch};
use crate::errors::errors::AppResult;

/// 직원 레코드 저장소
///
/// # 에러 규약
///
/// * `AppError::AlreadyExists` - 동일 `employee_id`가 이미 존재 (`create`)
/// * `AppError::NotFound` - 대상 레코드 없음 (`get`, `update`, `delete`)
/// * `AppError::StorageUnavailable` - 백엔드 연결/연산 실패
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// 레코드를 생성합니다.
    ///
    /// 중복 확인과 삽입은 원자적입니다. 같은 id로 N개의 생성 요청이 동시에
    /// 들어오면 정확히 하나만 성공합니다.
    async fn create(&self, employee: Employee) -> AppResult<Employee>;

    /// 식별자로 단건 조회
    async fn get(&self, employee_id: &str) -> AppResult<Employee>;

    /// 패치의 존재하는 필드만 병합하고 수정된 레코드를 반환합니다.
    async fn update(&self, employee_id: &str, patch: EmployeePatch) -> AppResult<Employee>;

    async fn delete(&self, employee_id: &str) -> AppResult<()>;

    /// 부서별 목록
    ///
    /// `joining_date` 내림차순, 동률은 삽입 순서(오름차순)로 정렬한 뒤
    /// `skip`/`limit` 윈도우를 적용합니다.
    async fn list_by_department(&self, department: &str, page: Pagination) -> AppResult<Vec<Employee>>;

    /// 기술 보유자 검색 (정확 일치, 대소문자 구분, 삽입 순서)
    async fn search_by_skill(&self, skill: &str) -> AppResult<Vec<Employee>>;

    /// 부서별 평균 급여 (소수점 둘째 자리 반올림, 부서명 순)
    async fn average_salary_by_department(&self) -> AppResult<BTreeMap<String, f64>>;
}

/// 소수점 둘째 자리로 반올림
///
/// 이진 값의 정확한 십진 전개를 기준으로 반올림하고, 정확한 중간값은
/// 짝수 쪽으로 보냅니다 (0.125 → 0.12, 2.675 → 2.67).
pub(crate) fn round_to_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
