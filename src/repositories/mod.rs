//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소는 `main`에서 명시적으로 생성되어 `web::Data`로 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::employees::{EmployeeStore, InMemoryEmployeeStore};
//!
//! let store: Arc<dyn EmployeeStore> = Arc::new(InMemoryEmployeeStore::new());
//! let employee = store.get("E001").await?;
//! ```

pub mod employees;
