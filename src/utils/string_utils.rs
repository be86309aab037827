//! # 문자열 유틸리티
//!
//! 요청 경로/쿼리 값의 검증과 변환에 쓰이는 공통 함수들입니다.

use mongodb::bson::oid::ObjectId;

use crate::errors::AppError;

/// 필수 문자열 검증
///
/// 앞뒤 공백을 제거한 값이 비어 있으면 `ValidationError`를 반환합니다.
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{} is required", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 사용자 ID 문자열을 ObjectId로 변환합니다.
///
/// 형식이 잘못된 경우 400 `Invalid user ID`가 됩니다.
pub fn parse_user_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id.trim())
        .map_err(|_| AppError::ValidationError("Invalid user ID".to_string()))
}
