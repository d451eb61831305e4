//! 직원 엔티티 모듈

pub mod employee;

pub use employee::{Employee, EmployeePatch};
