//! REST 요청/응답 DTO
//!
//! JSON 필드 이름은 camelCase를 사용합니다.

pub mod users;
pub mod followers;
