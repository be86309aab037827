//! # 세션 해석기
//!
//! `auth_token` 쿠키로 들어온 토큰에서 사용자 식별 정보를 복원합니다.
//! 프로세스당 하나의 [`TrustMode`]가 선택되며 모드 간 폴백은 없습니다.
//!
//! | 모드 | 구현 | 검증 |
//! |------|------|------|
//! | `verify` | [`VerifyingSessionResolver`] | HS256 서명, `exp`, `nbf` |
//! | `gateway` | [`GatewaySessionResolver`] | 없음 (payload 디코딩만) |

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;

use crate::config::TrustMode;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::services::auth::token_service::TokenService;

/// 토큰 문자열을 사용자 식별 정보로 바꾸는 계약
pub trait SessionResolver: Send + Sync {
    fn resolve(&self, token: &str) -> AppResult<AuthenticatedUser>;

    fn mode(&self) -> TrustMode;
}

fn unauthorized() -> AppError {
    AppError::AuthenticationError("Invalid or expired token".to_string())
}

/// `sub`는 사용자 ObjectId여야 합니다. 아니면 세션이 없는 것으로 봅니다.
fn require_user_id(sub: &str) -> AppResult<()> {
    ObjectId::parse_str(sub.trim()).map(|_| ()).map_err(|_| {
        log::warn!("🔒 세션 sub가 사용자 ID 형식이 아닙니다");
        unauthorized()
    })
}

/// 공유 비밀키로 서명을 직접 검증하는 해석기
pub struct VerifyingSessionResolver {
    token_service: Arc<TokenService>,
}

impl VerifyingSessionResolver {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl SessionResolver for VerifyingSessionResolver {
    fn resolve(&self, token: &str) -> AppResult<AuthenticatedUser> {
        let claims = self.token_service.verify_token(token)?;
        require_user_id(&claims.sub)?;
        Ok(AuthenticatedUser::from(claims))
    }

    fn mode(&self) -> TrustMode {
        TrustMode::Verify
    }
}

/// 게이트웨이가 전달한 payload
#[derive(Debug, Deserialize)]
struct GatewayPayload {
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

/// 상위 API 게이트웨이가 서명과 만료를 이미 검증했다고 신뢰하는 해석기
///
/// 암호학적 검증을 하지 않으므로 게이트웨이 뒤에서만 사용해야 합니다.
#[derive(Default)]
pub struct GatewaySessionResolver;

impl SessionResolver for GatewaySessionResolver {
    fn resolve(&self, token: &str) -> AppResult<AuthenticatedUser> {
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 {
            log::warn!("🔒 게이트웨이 토큰 형식 오류: {}개 세그먼트", segments.len());
            return Err(unauthorized());
        }

        // 일부 발급자는 패딩을 붙이므로 제거 후 디코딩
        let bytes = URL_SAFE_NO_PAD
            .decode(segments[1].trim_end_matches('='))
            .map_err(|_| unauthorized())?;

        let payload: GatewayPayload = serde_json::from_slice(&bytes).map_err(|_| unauthorized())?;

        let user_id = payload.sub.ok_or_else(unauthorized)?;
        require_user_id(&user_id)?;

        Ok(AuthenticatedUser {
            user_id,
            username: payload.username.unwrap_or_default(),
            email: payload.email.unwrap_or_default(),
        })
    }

    fn mode(&self) -> TrustMode {
        TrustMode::Gateway
    }
}

/// 설정된 모드에 맞는 해석기를 생성합니다.
pub fn build_session_resolver(
    mode: TrustMode,
    token_service: Arc<TokenService>,
) -> Arc<dyn SessionResolver> {
    match mode {
        TrustMode::Verify => Arc::new(VerifyingSessionResolver::new(token_service)),
        TrustMode::Gateway => Arc::new(GatewaySessionResolver),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forged_token(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_verify_mode_resolves_issued_token() {
        let tokens = Arc::new(TokenService::new("secret"));
        let resolver = build_session_resolver(TrustMode::Verify, tokens.clone());
        let user_id = ObjectId::new().to_hex();
        let token = tokens.generate_token(&user_id, "ada", "ada@example.com").unwrap();

        let user = resolver.resolve(&token).unwrap();
        assert_eq!(user.user_id, user_id);
        assert_eq!(user.username, "ada");
        assert_eq!(resolver.mode(), TrustMode::Verify);
    }

    #[test]
    fn test_verify_mode_rejects_forged_token() {
        let tokens = Arc::new(TokenService::new("secret"));
        let resolver = VerifyingSessionResolver::new(tokens);

        let payload = format!(
            r#"{{"sub":"{}","username":"ada","email":"a@b.co"}}"#,
            ObjectId::new().to_hex()
        );
        assert!(resolver.resolve(&forged_token(&payload)).is_err());
    }

    #[test]
    fn test_verify_mode_rejects_non_object_id_subject() {
        let tokens = Arc::new(TokenService::new("secret"));
        let resolver = VerifyingSessionResolver::new(tokens.clone());
        let token = tokens.generate_token("42", "ada", "ada@example.com").unwrap();

        match resolver.resolve(&token) {
            Err(AppError::AuthenticationError(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_gateway_mode_reads_payload_without_verification() {
        let resolver = GatewaySessionResolver;
        let user_id = ObjectId::new().to_hex();
        let payload = format!(r#"{{"sub":"{}","username":"ada","email":"a@b.co"}}"#, user_id);

        let user = resolver.resolve(&forged_token(&payload)).unwrap();
        assert_eq!(user.user_id, user_id);
        assert_eq!(user.email, "a@b.co");
    }

    #[test]
    fn test_gateway_mode_accepts_issued_token() {
        let tokens = TokenService::new("secret");
        let user_id = ObjectId::new().to_hex();
        let token = tokens.generate_token(&user_id, "grace", "grace@example.com").unwrap();

        let user = GatewaySessionResolver.resolve(&token).unwrap();
        assert_eq!(user.user_id, user_id);
    }

    #[test]
    fn test_gateway_mode_rejects_malformed_tokens() {
        let resolver = GatewaySessionResolver;

        assert!(resolver.resolve("only.two").is_err());
        assert!(resolver.resolve("a.%%%.c").is_err());
        assert!(resolver.resolve(&forged_token("not json")).is_err());
        assert!(resolver.resolve(&forged_token(r#"{"username":"ada"}"#)).is_err());
        assert!(resolver.resolve(&forged_token(r#"{"sub":""}"#)).is_err());
    }

    #[test]
    fn test_gateway_mode_rejects_non_object_id_subject() {
        let token = forged_token(r#"{"sub":"42","username":"x","email":"x@y.z"}"#);

        match GatewaySessionResolver.resolve(&token) {
            Err(AppError::AuthenticationError(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
