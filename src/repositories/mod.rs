//! 데이터 액세스 계층
//!
//! 서비스는 trait에만 의존하고, 실행 시에는 MongoDB 구현을,
//! 테스트에서는 인메모리 구현을 주입합니다.

pub mod users;
pub mod followers;

#[cfg(test)]
pub mod memory;
