//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시 한 번 생성되어 [`AppState`](crate::state::AppState)에 담기고,
//! 리포지토리는 trait 객체로 주입받습니다.
//!
//! # Features
//!
//! - 사용자 생명주기 관리 (등록, 조회, 검색, 수정, 소프트 삭제)
//! - 팔로우 관계 관리
//! - JWT 세션 토큰 발급 및 신뢰 모드별 세션 해석
//!
//! # Examples
//!
//! ```rust,ignore
//! let user = state.user_service.get_user(&id).await?;
//! let token = state.token_service.generate_token(&id, &user.username, &user.email)?;
//! ```

pub mod users;
pub mod followers;
pub mod auth;
