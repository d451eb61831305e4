//! 직원 디렉터리 비즈니스 서비스

pub mod employee_service;

pub use employee_service::EmployeeService;
