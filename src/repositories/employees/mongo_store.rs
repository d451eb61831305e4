//! # MongoDB 직원 저장소
//!
//! `employees` 컬렉션을 주 저장소로 사용하는 [`EmployeeStore`] 구현입니다.
//!
//! ## 인덱스
//!
//! | 이름 | 키 | 용도 |
//! |---|---|---|
//! | `employee_id_unique` | `employee_id: 1` (unique) | 중복 생성 방지 |
//! | `department_joining_date` | `department: 1, joining_date: -1` | 부서별 정렬 목록 |
//! | `skills` | `skills: 1` (multikey) | 기술 검색 |
//!
//! 중복 확인은 유니크 인덱스가 담당하므로 동시 생성 요청 중 정확히 하나만
//! 삽입에 성공하고, 나머지는 duplicate key(11000) 에러를 받습니다.
//! 동률 정렬은 `_id`(ObjectId, 삽입 순으로 증가)를 사용합니다.

use std::collections::BTreeMap;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{self, doc, Document},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, FindOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::db::Database;
use crate::domain::dto::employees::Pagination;
use crate::domain::entities::employees::{Employee, EmployeePatch};
use crate::errors::errors::{AppError, AppResult, ErrorContext};
use super::employee_store::{round_to_cents, EmployeeStore};

const DUPLICATE_KEY_CODE: i32 = 11000;
const STORAGE_UNAVAILABLE_MESSAGE: &str = "employee storage is temporarily unavailable";

/// MongoDB 기반 직원 저장소
///
/// # 예제
///
/// ```rust,ignore
/// let database = Database::new().await?;
/// let store = MongoEmployeeStore::new(&database, "employees");
/// store.ensure_indexes().await?;
///
/// let store: Arc<dyn EmployeeStore> = Arc::new(store);
/// ```
#[derive(Clone)]
pub struct MongoEmployeeStore {
    collection: Collection<Employee>,
}

impl MongoEmployeeStore {
    pub fn new(database: &Database, collection_name: &str) -> Self {
        Self {
            collection: database.get_database().collection::<Employee>(collection_name),
        }
    }

    /// 필요한 인덱스를 생성합니다. 이미 존재하면 아무 것도 하지 않습니다.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let employee_id_index = IndexModel::builder()
            .keys(doc! { "employee_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("employee_id_unique".to_string())
                .build())
            .build();

        let department_index = IndexModel::builder()
            .keys(doc! { "department": 1, "joining_date": -1 })
            .options(IndexOptions::builder()
                .name("department_joining_date".to_string())
                .build())
            .build();

        let skills_index = IndexModel::builder()
            .keys(doc! { "skills": 1 })
            .options(IndexOptions::builder()
                .name("skills".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([employee_id_index, department_index, skills_index])
            .await
            .map_err(storage_error)?;

        log::info!("✅ 직원 컬렉션 인덱스 확인 완료: {}", self.collection.name());
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for MongoEmployeeStore {
    async fn create(&self, employee: Employee) -> AppResult<Employee> {
        self.collection
            .insert_one(&employee)
            .await
            .map_err(|e| insert_error(e, &employee.employee_id))?;

        Ok(employee)
    }

    async fn get(&self, employee_id: &str) -> AppResult<Employee> {
        self.collection
            .find_one(doc! { "employee_id": employee_id })
            .await
            .map_err(storage_error)?
            .ok_or_else(|| not_found(employee_id))
    }

    async fn update(&self, employee_id: &str, patch: EmployeePatch) -> AppResult<Employee> {
        let set = patch_to_set_document(&patch)?;
        if set.is_empty() {
            return self.get(employee_id).await;
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "employee_id": employee_id }, doc! { "$set": set })
            .with_options(options)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| not_found(employee_id))
    }

    async fn delete(&self, employee_id: &str) -> AppResult<()> {
        let result = self.collection
            .delete_one(doc! { "employee_id": employee_id })
            .await
            .map_err(storage_error)?;

        if result.deleted_count == 0 {
            return Err(not_found(employee_id));
        }
        Ok(())
    }

    async fn list_by_department(&self, department: &str, page: Pagination) -> AppResult<Vec<Employee>> {
        // MongoDB는 limit 0을 "제한 없음"으로 해석한다
        if page.limit == 0 {
            return Ok(Vec::new());
        }

        let options = FindOptions::builder()
            .sort(doc! { "joining_date": -1, "_id": 1 })
            .skip(page.skip)
            .limit(i64::try_from(page.limit).unwrap_or(i64::MAX))
            .build();

        self.collection
            .find(doc! { "department": department })
            .with_options(options)
            .await
            .map_err(storage_error)?
            .try_collect()
            .await
            .map_err(storage_error)
    }

    async fn search_by_skill(&self, skill: &str) -> AppResult<Vec<Employee>> {
        let options = FindOptions::builder()
            .sort(doc! { "_id": 1 })
            .build();

        self.collection
            .find(doc! { "skills": skill })
            .with_options(options)
            .await
            .map_err(storage_error)?
            .try_collect()
            .await
            .map_err(storage_error)
    }

    async fn average_salary_by_department(&self) -> AppResult<BTreeMap<String, f64>> {
        let pipeline = [
            doc! { "$group": { "_id": "$department", "avg_salary": { "$avg": "$salary" } } },
        ];

        let mut cursor = self.collection
            .aggregate(pipeline)
            .await
            .map_err(storage_error)?;

        let mut averages = BTreeMap::new();
        while let Some(row) = cursor.try_next().await.map_err(storage_error)? {
            let (department, average) = parse_average_row(&row)?;
            averages.insert(department, round_to_cents(average));
        }

        Ok(averages)
    }
}

/// 패치의 존재하는 필드만 `$set` 문서로 변환
fn patch_to_set_document(patch: &EmployeePatch) -> AppResult<Document> {
    bson::to_document(patch).context("패치 직렬화 실패")
}

fn parse_average_row(row: &Document) -> AppResult<(String, f64)> {
    let department = row.get_str("_id").context("집계 결과의 부서 필드 오류")?;
    let average = row.get_f64("avg_salary").context("집계 결과의 평균 필드 오류")?;

    Ok((department.to_string(), average))
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

/// `insert_one` 실패를 분류합니다. 유니크 인덱스 위반만 `AlreadyExists`입니다.
fn insert_error(error: mongodb::error::Error, employee_id: &str) -> AppError {
    if is_duplicate_key(&error) {
        return AppError::AlreadyExists(format!("Employee ID already exists: {}", employee_id));
    }
    storage_error(error)
}

/// 드라이버 에러는 로그에만 남기고 응답에는 고정 메시지를 사용한다
fn storage_error(error: mongodb::error::Error) -> AppError {
    log::error!("MongoDB 연산 실패: {}", error);
    AppError::StorageUnavailable(STORAGE_UNAVAILABLE_MESSAGE.to_string())
}

fn not_found(employee_id: &str) -> AppError {
    AppError::NotFound(format!("Employee not found: {}", employee_id))
}
