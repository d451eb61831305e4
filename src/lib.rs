//! 직원 디렉터리 서비스
//!
//! 직원 레코드를 저장/조회하는 REST 서비스입니다. 변경 요청은
//! JWT Bearer 토큰으로 보호되고, 조회/검색/집계는 인증 없이 사용할 수 있습니다.
//!
//! # Features
//!
//! - **직원 관리**: 생성, 단건 조회, 부분 수정, 삭제
//! - **조회**: 부서별 정렬/페이지 목록, 기술 검색, 부서별 평균 급여
//! - **JWT 인증**: HS256 서명, 만료 시간 기반 상태 없는 토큰
//! - **저장소 선택**: MongoDB 또는 인메모리 (`STORAGE_BACKEND`)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, AuthenticatedUser 추출
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 로깅, 토큰 발급
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  EmployeeStore  │ ← MongoDB | 인메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use employee_directory_service::repositories::employees::InMemoryEmployeeStore;
//! use employee_directory_service::services::employees::EmployeeService;
//!
//! let service = EmployeeService::new(Arc::new(InMemoryEmployeeStore::new()));
//! service.create(request).await?;
//! let page = service.list_by_department("Eng", Pagination::default()).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
