//! # JWT 토큰 발급 서비스
//!
//! 로그인 성공 시 HS256으로 서명된 세션 토큰을 발급하고,
//! 검증 모드에서는 같은 키로 서명과 유효 기간을 확인합니다.
//!
//! ## 토큰 구조
//!
//! ```text
//! header:  { "alg": "HS256", "typ": "JWT", "kid": "jwt-issuer-key" }
//! payload: { "sub": "<user id>", "username": "...", "email": "...",
//!            "iat": 1700000000, "nbf": 1700000000, "exp": 1700086400 }
//! ```
//!
//! `kid`는 상위 API 게이트웨이가 검증 키를 찾는 데 사용합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::JwtConfig;
use crate::domain::models::token::SessionClaims;
use crate::errors::{AppError, AppResult};

/// 세션 토큰 발급/검증기
///
/// 서명 키는 시작 시 설정에서 한 번 읽어 보관합니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_nbf = true;
        validation.set_required_spec_claims(&["exp", "nbf", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// 사용자 정보로 24시간 유효한 토큰을 발급합니다.
    pub fn generate_token(&self, user_id: &str, username: &str, email: &str) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::EXPIRATION_HOURS);

        let claims = SessionClaims {
            sub: user_id.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: expiration.timestamp(),
        };

        self.sign(&claims)
    }

    fn sign(&self, claims: &SessionClaims) -> AppResult<String> {
        let mut header = Header::new(Algorithm::HS256);
        header.kid = Some(JwtConfig::KEY_ID.to_string());

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 서명과 유효 기간을 검증하고 클레임을 반환합니다.
    ///
    /// 어떤 실패든 401로 취급합니다.
    pub fn verify_token(&self, token: &str) -> AppResult<SessionClaims> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => "토큰이 만료되었습니다",
                    ErrorKind::ImmatureSignature => "아직 유효하지 않은 토큰입니다",
                    ErrorKind::InvalidSignature => "서명이 일치하지 않습니다",
                    _ => "유효하지 않은 토큰입니다",
                };
                log::warn!("🔒 토큰 검증 실패: {} ({})", reason, e);
                AppError::AuthenticationError("Invalid or expired token".to_string())
            })
    }
}
