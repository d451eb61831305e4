//! 직원 디렉터리 HTTP 핸들러
//!
//! 모든 핸들러는 `/employees` 스코프 아래에 등록됩니다.
//! 생성/수정/삭제 핸들러는 [`AuthenticatedUser`] 인자를 받으므로 유효한 Bearer 토큰이
//! 없으면 본문을 읽기 전에 401로 거부됩니다.
//!
//! | 메서드 | 경로 | 인증 |
//! |---|---|---|
//! | POST | `/employees` | 필요 |
//! | GET | `/employees/avg-salary` | - |
//! | GET | `/employees/search?skill=` | - |
//! | GET | `/employees?department=&skip=&limit=` | - |
//! | GET | `/employees/{employee_id}` | - |
//! | PUT | `/employees/{employee_id}` | 필요 |
//! | DELETE | `/employees/{employee_id}` | 필요 |

use actix_web::{delete, get, post, put, web, HttpResponse};
use crate::domain::dto::employees::{
    CreateEmployeeRequest, ListEmployeesQuery, MessageResponse, Pagination, SkillSearchQuery,
    UpdateEmployeeRequest,
};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::services::employees::EmployeeService;

#[post("")]
pub async fn create_employee(
    user: AuthenticatedUser,
    service: web::Data<EmployeeService>,
    payload: web::Json<CreateEmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    log::debug!("직원 생성 요청 - 요청자: {}", user.subject);
    service.create(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Employee created successfully")))
}

/// 부서별 평균 급여
///
/// ```json
/// [{ "department": "Eng", "avg_salary": 150.0 }]
/// ```
#[get("/avg-salary")]
pub async fn average_salary(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, AppError> {
    let rows = service.average_salary_by_department().await?;
    Ok(HttpResponse::Ok().json(rows))
}

#[get("/search")]
pub async fn search_employees(
    service: web::Data<EmployeeService>,
    query: web::Query<SkillSearchQuery>,
) -> Result<HttpResponse, AppError> {
    let employees = service.search_by_skill(&query.skill).await?;
    Ok(HttpResponse::Ok().json(employees))
}

#[get("")]
pub async fn list_employees(
    service: web::Data<EmployeeService>,
    query: web::Query<ListEmployeesQuery>,
) -> Result<HttpResponse, AppError> {
    let ListEmployeesQuery { department, skip, limit } = query.into_inner();
    let page = Pagination::from_optional(skip, limit)?;

    let employees = service.list_by_department(&department, page).await?;
    Ok(HttpResponse::Ok().json(employees))
}

#[get("/{employee_id}")]
pub async fn get_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let employee = service.get(&path).await?;
    Ok(HttpResponse::Ok().json(employee))
}

#[put("/{employee_id}")]
pub async fn update_employee(
    user: AuthenticatedUser,
    service: web::Data<EmployeeService>,
    path: web::Path<String>,
    payload: web::Json<UpdateEmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    log::debug!("직원 수정 요청 - 요청자: {}, id: {}", user.subject, path);
    service.update(&path, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Employee updated successfully")))
}

#[delete("/{employee_id}")]
pub async fn delete_employee(
    user: AuthenticatedUser,
    service: web::Data<EmployeeService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::debug!("직원 삭제 요청 - 요청자: {}, id: {}", user.subject, path);
    service.delete(&path).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Employee deleted successfully")))
}
