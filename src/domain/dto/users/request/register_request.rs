//! # 회원가입 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! GraphQL `createUser` 뮤테이션도 같은 구조로 변환되어 동일한 검증을 거칩니다.
//!
//! ## 검증 규칙
//!
//! - `firstName`, `lastName`, `username`: 필수 (빈 문자열 불가)
//! - `email`: 이메일 형식
//! - `password`: 최소 6자
//!
//! 이메일/사용자명 중복 여부는 서비스 계층과 unique 인덱스에서 검증합니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "firstName": "Ada",
//!   "lastName": "Lovelace",
//!   "email": "ada@example.com",
//!   "username": "ada",
//!   "password": "secret1"
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 회원가입 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    /// 평문 비밀번호. 해싱 후 즉시 폐기됩니다.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}
