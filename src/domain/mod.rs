//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 로직과 도메인 규칙을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB에 저장되는 핵심 객체 (User, Follower)
//! ├── DTOs      - REST 요청/응답 객체 (camelCase JSON)
//! └── Models    - 영속화되지 않는 인증 값 객체 (SessionClaims, AuthenticatedUser)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 사용자 등록 플로우
//!
//! ```rust,ignore
//! use crate::domain::{entities::users::User, dto::users::request::RegisterRequest};
//!
//! // 1. DTO로 입력 받기 + 유효성 검증
//! request.validate()?;
//!
//! // 2. 도메인 엔티티 생성
//! let user = User::new(request.first_name, request.last_name, request.email, request.username, hash);
//!
//! // 3. 리포지토리를 통한 영속화 후 응답 DTO로 변환
//! let saved_user = user_repository.create(user).await?;
//! let response = UserResponse::from(saved_user);
//! ```

pub mod entities;
pub mod dto;
pub mod models;
