//! 로그인 요청 DTO
use serde::Deserialize;
use validator::Validate;

/// 사용자명/비밀번호 로그인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
