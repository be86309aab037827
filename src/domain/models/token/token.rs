//! JWT 세션 클레임
//!
//! RFC 7519 표준 클레임(`sub`, `iat`, `nbf`, `exp`)과 게이트웨이가
//! 하위 서비스로 전달하는 사용자 식별 정보(`username`, `email`)를 담습니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 영속화되지 않으며, 24시간 뒤 만료됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    pub username: String,
    pub email: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 이 시각 이전에는 유효하지 않음 (Unix timestamp)
    pub nbf: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}
