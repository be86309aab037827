//! 사용자 서비스 백엔드
//!
//! Rust 기반의 사용자 관리 마이크로서비스입니다.
//! 쿠키 기반 JWT 세션, 팔로워 관계, REST / GraphQL / gRPC 인터페이스를 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 회원가입, 조회, 검색, 부분 수정, 소프트 삭제
//! - **세션 인증**: HS256 JWT를 `auth_token` HttpOnly 쿠키로 전달
//! - **신뢰 모드**: 직접 검증(`verify`) 또는 게이트웨이 신뢰(`gateway`)
//! - **팔로워 그래프**: 팔로우/언팔로우, 목록, 카운트
//! - **GraphQL**: `async-graphql` 스키마와 GraphiQL
//! - **gRPC**: 내부 서비스용 사용자 조회 API
//! - **MongoDB**: 사용자/팔로워 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │  HTTP Routes  │  GraphQL  │  gRPC    │ ← 인터페이스
//! └──────────────────────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (AppState로 공유)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (trait)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use users_service_backend::config::AppConfig;
//! use users_service_backend::state::AppState;
//!
//! let config = AppConfig::from_env()?;
//! let state = AppState::new(config, user_repo, follower_repo);
//! let user = state.user_service.register(request).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod graphql;
pub mod grpc;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
