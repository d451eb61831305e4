//! 인메모리 직원 저장소
//!
//! 단일 프로세스 배포와 테스트에 사용합니다. 하나의 `RwLock`이 레코드 맵과
//! 부서/기술 보조 인덱스를 함께 보호하므로, 중복 확인과 삽입이 같은
//! 쓰기 잠금 안에서 수행됩니다.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use crate::domain::dto::employees::Pagination;
use crate::domain::entities::employees::{Employee, EmployeePatch};
use crate::errors::errors::{AppError, AppResult};
use super::employee_store::{round_to_cents, EmployeeStore};

/// 삽입 순번 → employee_id
type SeqIndex = BTreeMap<u64, String>;

struct StoredEmployee {
    /// 삽입 순번 (동률 정렬 기준)
    seq: u64,
    employee: Employee,
}

#[derive(Default)]
struct Inner {
    next_seq: u64,
    records: HashMap<String, StoredEmployee>,
    by_department: HashMap<String, SeqIndex>,
    by_skill: HashMap<String, SeqIndex>,
}

impl Inner {
    fn index(&mut self, seq: u64, employee: &Employee) {
        self.by_department
            .entry(employee.department.clone())
            .or_default()
            .insert(seq, employee.employee_id.clone());

        for skill in &employee.skills {
            self.by_skill
                .entry(skill.clone())
                .or_default()
                .insert(seq, employee.employee_id.clone());
        }
    }

    fn unindex(&mut self, seq: u64, employee: &Employee) {
        remove_from(&mut self.by_department, &employee.department, seq);

        for skill in &employee.skills {
            remove_from(&mut self.by_skill, skill, seq);
        }
    }

    /// 인덱스 순서(삽입 순서)대로 레코드를 꺼냅니다.
    fn resolve<'a>(&'a self, ids: &'a SeqIndex) -> impl Iterator<Item = &'a Employee> + 'a {
        ids.values()
            .filter_map(|id| self.records.get(id))
            .map(|stored| &stored.employee)
    }
}

fn remove_from(index: &mut HashMap<String, SeqIndex>, key: &str, seq: u64) {
    if let Some(ids) = index.get_mut(key) {
        ids.remove(&seq);
        if ids.is_empty() {
            index.remove(key);
        }
    }
}

fn not_found(employee_id: &str) -> AppError {
    AppError::NotFound(format!("Employee not found: {}", employee_id))
}

/// `HashMap` 기반 직원 저장소
#[derive(Default)]
pub struct InMemoryEmployeeStore {
    inner: RwLock<Inner>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| AppError::InternalError("직원 저장소 잠금이 오염되었습니다".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| AppError::InternalError("직원 저장소 잠금이 오염되었습니다".to_string()))
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn create(&self, employee: Employee) -> AppResult<Employee> {
        let mut inner = self.write()?;

        if inner.records.contains_key(&employee.employee_id) {
            return Err(AppError::AlreadyExists(format!(
                "Employee ID already exists: {}",
                employee.employee_id
            )));
        }

        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.index(seq, &employee);
        inner.records.insert(
            employee.employee_id.clone(),
            StoredEmployee { seq, employee: employee.clone() },
        );

        Ok(employee)
    }

    async fn get(&self, employee_id: &str) -> AppResult<Employee> {
        self.read()?
            .records
            .get(employee_id)
            .map(|stored| stored.employee.clone())
            .ok_or_else(|| not_found(employee_id))
    }

    async fn update(&self, employee_id: &str, patch: EmployeePatch) -> AppResult<Employee> {
        let mut inner = self.write()?;

        let mut stored = inner
            .records
            .remove(employee_id)
            .ok_or_else(|| not_found(employee_id))?;

        inner.unindex(stored.seq, &stored.employee);
        stored.employee.apply(patch);
        inner.index(stored.seq, &stored.employee);

        let updated = stored.employee.clone();
        inner.records.insert(employee_id.to_string(), stored);

        Ok(updated)
    }

    async fn delete(&self, employee_id: &str) -> AppResult<()> {
        let mut inner = self.write()?;

        let stored = inner
            .records
            .remove(employee_id)
            .ok_or_else(|| not_found(employee_id))?;
        inner.unindex(stored.seq, &stored.employee);

        Ok(())
    }

    async fn list_by_department(&self, department: &str, page: Pagination) -> AppResult<Vec<Employee>> {
        let inner = self.read()?;

        let Some(ids) = inner.by_department.get(department) else {
            return Ok(Vec::new());
        };

        // 삽입 순서로 꺼낸 뒤 안정 정렬하므로 동률은 삽입 순서를 유지한다
        let mut rows: Vec<&Employee> = inner.resolve(ids).collect();
        rows.sort_by(|a, b| b.joining_date.cmp(&a.joining_date));

        let skip = usize::try_from(page.skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);

        Ok(rows.into_iter().skip(skip).take(limit).cloned().collect())
    }

    async fn search_by_skill(&self, skill: &str) -> AppResult<Vec<Employee>> {
        let inner = self.read()?;

        Ok(inner
            .by_skill
            .get(skill)
            .map(|ids| {
                inner
                    .resolve(ids)
                    .filter(|e| e.has_skill(skill))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn average_salary_by_department(&self) -> AppResult<BTreeMap<String, f64>> {
        let inner = self.read()?;

        let averages = inner
            .by_department
            .iter()
            .filter(|(_, ids)| !ids.is_empty())
            .map(|(department, ids)| {
                let (sum, count) = inner
                    .resolve(ids)
                    .fold((0.0, 0usize), |(sum, count), e| (sum + e.salary, count + 1));
                (department.clone(), round_to_cents(sum / count as f64))
            })
            .collect();

        Ok(averages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use futures_util::future::join_all;

    fn employee(id: &str, department: &str, salary: f64, joining_date: &str, skills: &[&str]) -> Employee {
        Employee {
            employee_id: id.to_string(),
            name: format!("Employee {}", id),
            department: department.to_string(),
            salary,
            joining_date: joining_date.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn ids(rows: &[Employee]) -> Vec<&str> {
        rows.iter().map(|e| e.employee_id.as_str()).collect()
    }

    #[actix_web::test]
    async fn test_create_then_get_round_trip() {
        let store = InMemoryEmployeeStore::new();
        let record = employee("E001", "Eng", 1000.0, "2023-01-15", &["rust"]);

        store.create(record.clone()).await.unwrap();

        assert_eq!(store.get("E001").await.unwrap(), record);
    }

    #[actix_web::test]
    async fn test_duplicate_create_rejected() {
        let store = InMemoryEmployeeStore::new();
        store.create(employee("E001", "Eng", 1.0, "2023-01-01", &[])).await.unwrap();

        let result = store.create(employee("E001", "Sales", 2.0, "2023-01-02", &[])).await;

        assert!(matches!(result, Err(AppError::AlreadyExists(_))));
        assert_eq!(store.get("E001").await.unwrap().department, "Eng");
    }

    #[actix_web::test]
    async fn test_concurrent_creates_exactly_one_succeeds() {
        let store = Arc::new(InMemoryEmployeeStore::new());

        let attempts = (0..32).map(|i| {
            let store = store.clone();
            async move {
                store
                    .create(employee("E001", "Eng", i as f64, "2023-01-01", &[]))
                    .await
            }
        });
        let results = join_all(attempts).await;

        let created = results.iter().filter(|r| r.is_ok()).count();
        let duplicates = results
            .iter()
            .filter(|r| matches!(r, Err(AppError::AlreadyExists(_))))
            .count();
        assert_eq!(created, 1);
        assert_eq!(duplicates, 31);
    }

    #[test]
    fn test_concurrent_creates_across_threads() {
        let store = Arc::new(InMemoryEmployeeStore::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    actix_web::rt::System::new()
                        .block_on(store.create(employee("E001", "Eng", i as f64, "2023-01-01", &[])))
                        .is_ok()
                })
            })
            .collect();

        let created = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(created, 1);
    }

    #[actix_web::test]
    async fn test_delete_then_get_not_found() {
        let store = InMemoryEmployeeStore::new();
        store.create(employee("E001", "Eng", 1.0, "2023-01-01", &["go"])).await.unwrap();

        store.delete("E001").await.unwrap();

        assert!(matches!(store.get("E001").await, Err(AppError::NotFound(_))));
        assert!(matches!(store.delete("E001").await, Err(AppError::NotFound(_))));
        assert!(store.search_by_skill("go").await.unwrap().is_empty());
        assert!(store.average_salary_by_department().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_update_salary_only() {
        let store = InMemoryEmployeeStore::new();
        let original = employee("E001", "Eng", 1000.0, "2023-01-15", &["rust"]);
        store.create(original.clone()).await.unwrap();

        let updated = store
            .update("E001", EmployeePatch { salary: Some(5000.0), ..Default::default() })
            .await
            .unwrap();

        assert_eq!(updated, Employee { salary: 5000.0, ..original });
        assert_eq!(store.get("E001").await.unwrap(), updated);
    }

    #[actix_web::test]
    async fn test_update_missing_is_not_found() {
        let store = InMemoryEmployeeStore::new();
        let result = store
            .update("nope", EmployeePatch { name: Some("x".to_string()), ..Default::default() })
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_update_moves_indexes() {
        let store = InMemoryEmployeeStore::new();
        store.create(employee("E001", "Eng", 100.0, "2023-01-01", &["go"])).await.unwrap();

        store
            .update(
                "E001",
                EmployeePatch {
                    department: Some("Sales".to_string()),
                    skills: Some(vec!["excel".to_string()]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(store.list_by_department("Eng", Pagination::default()).await.unwrap().is_empty());
        assert_eq!(ids(&store.list_by_department("Sales", Pagination::default()).await.unwrap()), ["E001"]);
        assert!(store.search_by_skill("go").await.unwrap().is_empty());
        assert_eq!(ids(&store.search_by_skill("excel").await.unwrap()), ["E001"]);
    }

    #[actix_web::test]
    async fn test_list_sorted_by_joining_date_desc_with_insertion_tiebreak() {
        let store = InMemoryEmployeeStore::new();
        store.create(employee("A", "Eng", 1.0, "2022-05-01", &[])).await.unwrap();
        store.create(employee("B", "Eng", 1.0, "2023-03-10", &[])).await.unwrap();
        store.create(employee("C", "Eng", 1.0, "2022-05-01", &[])).await.unwrap();
        store.create(employee("D", "Sales", 1.0, "2024-01-01", &[])).await.unwrap();
        store.create(employee("E", "Eng", 1.0, "2021-12-31", &[])).await.unwrap();

        let all = store
            .list_by_department("Eng", Pagination { skip: 0, limit: 100 })
            .await
            .unwrap();

        assert_eq!(ids(&all), ["B", "A", "C", "E"]);
    }

    #[actix_web::test]
    async fn test_pagination_windows_are_deterministic() {
        let store = InMemoryEmployeeStore::new();
        for (i, date) in ["2023-01-01", "2023-01-02", "2023-01-02", "2023-01-03", "2023-01-04"]
            .iter()
            .enumerate()
        {
            store.create(employee(&format!("E{}", i), "Eng", 1.0, date, &[])).await.unwrap();
        }

        let full = store
            .list_by_department("Eng", Pagination { skip: 0, limit: 5 })
            .await
            .unwrap();

        let mut stitched = Vec::new();
        for skip in [0, 2, 4] {
            let page = store
                .list_by_department("Eng", Pagination { skip, limit: 2 })
                .await
                .unwrap();
            stitched.extend(page);
        }

        assert_eq!(stitched, full);
        assert_eq!(ids(&full), ["E4", "E3", "E1", "E2", "E0"]);
    }

    #[actix_web::test]
    async fn test_limit_zero_and_skip_past_end_are_empty() {
        let store = InMemoryEmployeeStore::new();
        store.create(employee("E001", "Eng", 1.0, "2023-01-01", &[])).await.unwrap();

        assert!(store.list_by_department("Eng", Pagination { skip: 0, limit: 0 }).await.unwrap().is_empty());
        assert!(store.list_by_department("Eng", Pagination { skip: 5, limit: 10 }).await.unwrap().is_empty());
        assert!(store.list_by_department("eng", Pagination::default()).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_average_salary_by_department() {
        let store = InMemoryEmployeeStore::new();
        store.create(employee("E1", "Eng", 100.0, "2023-01-01", &[])).await.unwrap();
        store.create(employee("E2", "Eng", 200.0, "2023-01-01", &[])).await.unwrap();
        store.create(employee("E3", "Sales", 50.0, "2023-01-01", &[])).await.unwrap();

        let averages = store.average_salary_by_department().await.unwrap();

        let expected: BTreeMap<String, f64> =
            [("Eng".to_string(), 150.0), ("Sales".to_string(), 50.0)].into_iter().collect();
        assert_eq!(averages, expected);
    }

    #[actix_web::test]
    async fn test_average_salary_rounds_to_two_decimals() {
        let store = InMemoryEmployeeStore::new();
        store.create(employee("E1", "Ops", 100.0, "2023-01-01", &[])).await.unwrap();
        store.create(employee("E2", "Ops", 100.0, "2023-01-01", &[])).await.unwrap();
        store.create(employee("E3", "Ops", 101.0, "2023-01-01", &[])).await.unwrap();

        let averages = store.average_salary_by_department().await.unwrap();

        assert_eq!(averages.get("Ops"), Some(&100.33));
    }

    #[actix_web::test]
    async fn test_average_salary_half_cent_ties_round_to_even() {
        let store = InMemoryEmployeeStore::new();
        store.create(employee("E1", "D", 0.25, "2023-01-01", &[])).await.unwrap();
        store.create(employee("E2", "D", 0.0, "2023-01-01", &[])).await.unwrap();
        store.create(employee("E3", "Ops", 2.675, "2023-01-01", &[])).await.unwrap();

        let averages = store.average_salary_by_department().await.unwrap();

        assert_eq!(averages.get("D"), Some(&0.12));
        assert_eq!(averages.get("Ops"), Some(&2.67));
    }

    #[actix_web::test]
    async fn test_skill_search_is_exact_and_case_sensitive() {
        let store = InMemoryEmployeeStore::new();
        store.create(employee("E1", "Eng", 1.0, "2023-01-01", &["Rust", "go"])).await.unwrap();
        store.create(employee("E2", "Eng", 1.0, "2024-01-01", &["rust"])).await.unwrap();
        store.create(employee("E3", "Eng", 1.0, "2022-01-01", &["rust", "python"])).await.unwrap();

        assert_eq!(ids(&store.search_by_skill("rust").await.unwrap()), ["E2", "E3"]);
        assert_eq!(ids(&store.search_by_skill("Rust").await.unwrap()), ["E1"]);
        assert!(store.search_by_skill("rus").await.unwrap().is_empty());
    }
}
