//! # User Data Transfer Objects
//!
//! 사용자 관련 REST 요청/응답 DTO입니다. JSON 필드는 camelCase입니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── register_request.rs     # 회원가입 (validator 검증)
//! │   ├── login_request.rs        # 사용자명/비밀번호 로그인
//! │   └── update_user_request.rs  # 부분 수정 (모든 필드 Option)
//! └── response/
//!     └── user_response.rs        # 공개 프로필, 인증/메시지 응답
//! ```
//!
//! ## 회원가입
//!
//! ```json
//! POST /api/auth/register
//! {
//!   "firstName": "Ada",
//!   "lastName": "Lovelace",
//!   "email": "ada@example.com",
//!   "username": "ada",
//!   "password": "secret1"
//! }
//! ```
//!
//! ```json
//! 201 Created
//! {
//!   "message": "User registered successfully",
//!   "user": {
//!     "id": "665f1c2e9b1e8a3d4c5b6a79",
//!     "firstName": "Ada",
//!     "lastName": "Lovelace",
//!     "email": "ada@example.com",
//!     "username": "ada",
//!     "createdAt": "2025-01-01T00:00:00Z",
//!     "updatedAt": "2025-01-01T00:00:00Z"
//!   }
//! }
//! ```
//!
//! ## 부분 수정
//!
//! 없는 필드나 `null`은 기존 값을 유지하고, 빈 문자열은 400입니다.
//!
//! ```json
//! PUT /api/users/{id}
//! { "lastName": "Byron" }
//! ```
//!
//! 비밀번호 해시는 어떤 응답에도 포함되지 않습니다.

pub mod request;
pub mod response;
