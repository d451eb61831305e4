//! 직원 레코드 저장소
//!
//! [`EmployeeStore`] trait과 두 가지 구현을 제공합니다.
//!
//! - [`InMemoryEmployeeStore`]: 단일 프로세스, 테스트용
//! - [`MongoEmployeeStore`]: MongoDB 컬렉션 기반
//!
//! 어떤 구현을 쓸지는 `STORAGE_BACKEND` 설정으로 결정됩니다.

pub mod employee_store;
pub mod memory_store;
pub mod mongo_store;

pub use employee_store::EmployeeStore;
pub use memory_store::InMemoryEmployeeStore;
pub use mongo_store::MongoEmployeeStore;
