//! 도메인 모델 (영속화되지 않는 인증/세션 값 객체)

pub mod auth;
pub mod token;
