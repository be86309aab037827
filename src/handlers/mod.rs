//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청을 추출하고 서비스를 호출한 뒤 JSON 응답을 만드는 얇은 계층입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Gateway)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 서비스는 전역 싱글톤이 아니라 `web::Data<AppState>`로 주입됩니다.
//!
//! ```rust,ignore
//! #[get("/{user_id}")]
//! pub async fn get_user(
//!     state: web::Data<AppState>,
//!     user_id: web::Path<String>,
//!     _user: AuthenticatedUser,
//! ) -> Result<HttpResponse, AppError> {
//!     let user = state.user_service.get_user(&user_id).await?;
//!     Ok(HttpResponse::Ok().json(user))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 회원가입, 로그인, 로그아웃, 현재 사용자
//! - **`users`**: 사용자 조회, 검색, 수정, 삭제
//! - **`followers`**: 팔로우, 언팔로우, 팔로워 목록
//! - **`graphql`**: GraphQL 엔드포인트와 GraphiQL 플레이그라운드

pub mod auth;
pub mod followers;
pub mod graphql;
pub mod users;
