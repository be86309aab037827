//! 세션 토큰 발급과 해석

pub mod token_service;
pub mod session_resolver;

pub use token_service::TokenService;
pub use session_resolver::*;
