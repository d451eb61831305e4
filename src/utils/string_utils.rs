//! # 문자열 유틸리티
//!
//! 요청 필드 검증에 쓰이는 공통 문자열 함수들입니다.
//! `validator` 크레이트의 `custom` 검증 함수와 서비스 계층 양쪽에서 사용됩니다.

use chrono::NaiveDate;
use validator::ValidationError;
use crate::errors::errors::AppError;

/// 입사일 형식 (ISO 8601 calendar date)
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// 필수 문자열 필드 검증
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert!(validate_required_string("Alice", "name").is_ok());
/// assert!(validate_required_string("   ", "name").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<(), AppError> {
    if !is_valid_string(value) {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(())
}

/// ISO 날짜(`YYYY-MM-DD`) 필드 검증
///
/// 0 채움 4-2-2 자리 형식만 허용하므로 문자열 정렬 순서가 날짜 순서와 같습니다.
pub fn validate_iso_date(value: &str, field_name: &str) -> Result<(), AppError> {
    if is_iso_date(value) {
        Ok(())
    } else {
        Err(AppError::ValidationError(
            format!("{}은(는) YYYY-MM-DD 형식이어야 합니다: {}", field_name, value)
        ))
    }
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `YYYY-MM-DD` 형식의 실제 달력 날짜인지 확인
pub fn is_iso_date(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).is_ok()
}

/// `validator` custom 검증: 공백 문자열 거부
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if is_valid_string(value) {
        Ok(())
    } else {
        Err(ValidationError::new("blank")
            .with_message("빈 값일 수 없습니다".into()))
    }
}

/// `validator` custom 검증: ISO 날짜 형식
pub fn iso_date(value: &str) -> Result<(), ValidationError> {
    if is_iso_date(value) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_date")
            .with_message("날짜는 YYYY-MM-DD 형식이어야 합니다".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert!(validate_required_string("Alice", "name").is_ok());
        assert!(validate_required_string("  Alice  ", "name").is_ok());
        assert!(matches!(
            validate_required_string("   ", "name"),
            Err(AppError::ValidationError(_))
        ));
        assert!(validate_required_string("", "name").is_err());
    }

    #[test]
    fn test_is_iso_date() {
        assert!(is_iso_date("2023-01-15"));
        assert!(is_iso_date("2024-02-29"));
        assert!(!is_iso_date("2023-02-30"));
        assert!(!is_iso_date("2023-1-5"));
        assert!(!is_iso_date("15/01/2023"));
        assert!(!is_iso_date(""));
    }

    #[test]
    fn test_validate_iso_date_error_mentions_field() {
        match validate_iso_date("yesterday", "joining_date") {
            Err(AppError::ValidationError(msg)) => assert!(msg.contains("joining_date")),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_validator_adapters() {
        assert!(not_blank("Eng").is_ok());
        assert!(not_blank(" ").is_err());
        assert!(iso_date("2020-12-31").is_ok());
        assert!(iso_date("2020-13-01").is_err());
    }
}
