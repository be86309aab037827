//! 도메인 엔티티 (MongoDB 문서 매핑)

pub mod users;
pub mod followers;
