//! 에러 타입 모듈

#[allow(clippy::module_inception)]
pub mod errors;

pub use errors::*;
