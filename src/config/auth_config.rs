//! # Authentication Configuration Module
//!
//! JWT 토큰, 세션 쿠키, 신뢰 모드 등 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 신뢰 모드
//!
//! | 모드 | 동작 |
//! |------|------|
//! | `verify` | 공유 비밀키로 HS256 서명과 만료를 직접 검증 |
//! | `gateway` | 상위 API 게이트웨이가 검증한 토큰의 payload만 디코딩 |
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export AUTH_TRUST_MODE="verify"
//! ```

/// 개발 환경에서만 사용하는 기본 서명 키
pub const DEFAULT_JWT_SECRET: &str = "your-secret-key-change-in-production";

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// 토큰 유효 시간 (고정 24시간)
    pub const EXPIRATION_HOURS: i64 = 24;

    /// 게이트웨이가 검증 키를 찾을 때 사용하는 `kid` 헤더 값
    pub const KEY_ID: &'static str = "jwt-issuer-key";
}

/// 세션 쿠키 설정
pub struct SessionCookieConfig;

impl SessionCookieConfig {
    /// 토큰을 담는 쿠키 이름
    pub const NAME: &'static str = "auth_token";

    /// 쿠키 Max-Age (초)
    pub const MAX_AGE_SECONDS: i64 = JwtConfig::EXPIRATION_HOURS * 60 * 60;
}

/// 들어오는 토큰을 어떻게 신뢰할지 결정하는 모드
///
/// 프로세스당 하나의 모드만 사용되며 모드 간 폴백은 없습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustMode {
    /// 서명/만료를 직접 검증
    Verify,
    /// 게이트웨이 검증 결과를 신뢰하고 payload만 읽음
    Gateway,
}

impl TrustMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "verify" => Some(TrustMode::Verify),
            "gateway" => Some(TrustMode::Gateway),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrustMode::Verify => "verify",
            TrustMode::Gateway => "gateway",
        }
    }
}
