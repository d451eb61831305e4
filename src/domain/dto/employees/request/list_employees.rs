//! 직원 목록/검색 쿼리 DTO

use serde::{Deserialize, Serialize};
use crate::errors::errors::AppError;

/// `skip` 미지정 시 기본값
pub const DEFAULT_SKIP: i64 = 0;
/// `limit` 미지정 시 기본값
pub const DEFAULT_LIMIT: i64 = 10;

/// `GET /employees?department=&skip=&limit=`
///
/// 음수를 그대로 받아 서비스 계층에서 `ValidationError`로 거부할 수 있도록
/// 부호 있는 정수를 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEmployeesQuery {
    pub department: String,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// `GET /employees/search?skill=`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSearchQuery {
    pub skill: String,
}

/// 검증된 페이지 윈도우
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: u64,
    pub limit: u64,
}

impl Pagination {
    /// 선택적 `skip`/`limit`에 기본값을 적용하고 음수를 거부합니다.
    pub fn from_optional(skip: Option<i64>, limit: Option<i64>) -> Result<Self, AppError> {
        let skip = skip.unwrap_or(DEFAULT_SKIP);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        let skip = u64::try_from(skip).map_err(|_| {
            AppError::ValidationError(format!("skip은 음수일 수 없습니다: {}", skip))
        })?;
        let limit = u64::try_from(limit).map_err(|_| {
            AppError::ValidationError(format!("limit은 음수일 수 없습니다: {}", limit))
        })?;

        Ok(Self { skip, limit })
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP as u64,
            limit: DEFAULT_LIMIT as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        assert_eq!(
            Pagination::from_optional(None, None).unwrap(),
            Pagination { skip: 0, limit: 10 }
        );
        assert_eq!(Pagination::default(), Pagination { skip: 0, limit: 10 });
    }

    #[test]
    fn test_explicit_values_kept() {
        assert_eq!(
            Pagination::from_optional(Some(20), Some(5)).unwrap(),
            Pagination { skip: 20, limit: 5 }
        );
    }

    #[test]
    fn test_negative_values_rejected() {
        assert!(matches!(
            Pagination::from_optional(Some(-1), None),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            Pagination::from_optional(None, Some(-10)),
            Err(AppError::ValidationError(_))
        ));
    }
}
