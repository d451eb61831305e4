//! # 직원 관리 서비스 구현
//!
//! HTTP 계층의 요청 DTO를 검증된 도메인 값으로 바꾼 뒤 [`EmployeeStore`]에 위임합니다.
//!
//! ## 로깅 규약
//!
//! - 생성/수정/삭제 성공: `info`
//! - 입력 거부, 중복, 대상 없음: `warn`
//! - 저장소 장애: `error`

use std::sync::Arc;
use validator::Validate;
use crate::domain::dto::employees::{
    CreateEmployeeRequest, DepartmentSalaryResponse, Pagination, UpdateEmployeeRequest,
};
use crate::domain::entities::employees::{Employee, EmployeePatch};
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::employees::EmployeeStore;

/// 직원 디렉터리 비즈니스 서비스
///
/// 저장소는 생성 시점에 주입됩니다.
///
/// # 예제
///
/// ```rust,ignore
/// let store: Arc<dyn EmployeeStore> = Arc::new(InMemoryEmployeeStore::new());
/// let service = EmployeeService::new(store);
///
/// service.create(request).await?;
/// let page = service.list_by_department("Eng", Pagination::default()).await?;
/// ```
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// 새 직원 레코드를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 필드 검증 실패
    /// * `AppError::AlreadyExists` - `employee_id` 중복
    pub async fn create(&self, request: CreateEmployeeRequest) -> AppResult<Employee> {
        if let Err(e) = request.validate() {
            log::warn!("직원 생성 요청 거부: {}", e);
            return Err(e.into());
        }

        let employee_id = request.employee_id.clone();
        let created = self.store
            .create(Employee::from(request))
            .await
            .map_err(|e| log_failure("생성", &employee_id, e))?;

        log::info!("직원 생성 - id: {}, 부서: {}", created.employee_id, created.department);
        Ok(created)
    }

    pub async fn get(&self, employee_id: &str) -> AppResult<Employee> {
        self.store.get(employee_id).await
    }

    /// 존재하는 필드만 부분 수정합니다.
    ///
    /// 본문에 `employee_id`가 있거나 변경할 필드가 없으면 `ValidationError`입니다.
    pub async fn update(&self, employee_id: &str, request: UpdateEmployeeRequest) -> AppResult<Employee> {
        let patch = EmployeePatch::try_from(request).map_err(|e| {
            log::warn!("직원 수정 요청 거부 - id: {}: {}", employee_id, e);
            e
        })?;

        let updated = self.store
            .update(employee_id, patch)
            .await
            .map_err(|e| log_failure("수정", employee_id, e))?;

        log::info!("직원 수정 - id: {}", employee_id);
        Ok(updated)
    }

    pub async fn delete(&self, employee_id: &str) -> AppResult<()> {
        self.store
            .delete(employee_id)
            .await
            .map_err(|e| log_failure("삭제", employee_id, e))?;

        log::info!("직원 삭제 - id: {}", employee_id);
        Ok(())
    }

    pub async fn list_by_department(&self, department: &str, page: Pagination) -> AppResult<Vec<Employee>> {
        self.store.list_by_department(department, page).await
    }

    pub async fn search_by_skill(&self, skill: &str) -> AppResult<Vec<Employee>> {
        self.store.search_by_skill(skill).await
    }

    /// 부서별 평균 급여 (부서명 오름차순)
    pub async fn average_salary_by_department(&self) -> AppResult<Vec<DepartmentSalaryResponse>> {
        let averages = self.store.average_salary_by_department().await?;
        Ok(DepartmentSalaryResponse::from_averages(averages))
    }
}

fn log_failure(action: &str, employee_id: &str, error: AppError) -> AppError {
    match &error {
        AppError::StorageUnavailable(_) | AppError::InternalError(_) => {
            log::error!("직원 {} 실패 - id: {}: {}", action, employee_id, error)
        }
        _ => log::warn!("직원 {} 거부 - id: {}: {}", action, employee_id, error),
    }
    error
}
