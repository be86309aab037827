//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 보안 관련 설정을 관리합니다.
//! 모든 값은 시작 시 한 번 [`AppConfig`]로 읽어 들이고, 이후에는
//! 공유 상태를 통해 참조로만 전달됩니다.

use std::env;

use crate::config::auth_config::{DEFAULT_JWT_SECRET, TrustMode};
use crate::errors::{AppError, AppResult};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `Development`를 기본값으로 사용합니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Development)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 허용되는 bcrypt cost 범위
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 15;

    /// 명시된 cost가 유효하면 그대로, 아니면 환경 기본값을 사용합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn resolve_cost(raw: Option<&str>, env: &Environment) -> u32 {
        raw.and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|cost| (Self::MIN_COST..=Self::MAX_COST).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(env))
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 요청 제한 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

/// 애플리케이션 전체 설정
///
/// `main`에서 [`AppConfig::from_env`]로 한 번 생성한 뒤
/// [`AppState`](crate::state::AppState)에 담겨 공유됩니다.
///
/// ## 환경 변수
///
/// | 변수 | 기본값 |
/// |------|--------|
/// | `DATABASE_URL` | `mongodb://localhost:27017` |
/// | `DATABASE_NAME` | `users_api` |
/// | `JWT_SECRET` | 개발용 기본 키 (프로덕션에서는 필수) |
/// | `HOST` / `PORT` | `0.0.0.0` / `3001` |
/// | `GRPC_PORT` | `50051` |
/// | `ENVIRONMENT` | `development` |
/// | `AUTH_TRUST_MODE` | `verify` |
/// | `BCRYPT_COST` | 환경별 기본값 |
/// | `RATE_LIMIT_PER_SECOND` / `RATE_LIMIT_BURST_SIZE` | `100` / `200` |
/// | `CORS_ALLOWED_ORIGINS` | localhost 개발 오리진 |
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_name: String,
    pub jwt_secret: String,
    pub host: String,
    pub port: u16,
    pub grpc_port: u16,
    pub environment: Environment,
    pub trust_mode: TrustMode,
    pub bcrypt_cost: u32,
    pub rate_limit: RateLimitConfig,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 조회 함수로부터 설정을 구성합니다.
    ///
    /// 빈 문자열은 설정되지 않은 것으로 취급합니다.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let environment = get("ENVIRONMENT")
            .map(|value| Environment::from_str(&value))
            .unwrap_or(Environment::Development);

        let jwt_secret = match get("JWT_SECRET") {
            Some(secret) => secret,
            None if environment.is_production() => {
                return Err(AppError::InternalError(
                    "JWT_SECRET must be set in production".to_string(),
                ));
            }
            None => {
                log::warn!("⚠️ JWT_SECRET 미설정 - 개발용 기본 키를 사용합니다");
                DEFAULT_JWT_SECRET.to_string()
            }
        };

        let trust_mode = match get("AUTH_TRUST_MODE") {
            Some(value) => TrustMode::parse(&value).ok_or_else(|| {
                AppError::InternalError(format!(
                    "AUTH_TRUST_MODE must be 'verify' or 'gateway', got '{}'",
                    value
                ))
            })?,
            None => TrustMode::Verify,
        };

        let port = parse_or(get("PORT"), "PORT", 3001u16)?;
        let grpc_port = parse_or(get("GRPC_PORT"), "GRPC_PORT", 50051u16)?;
        let bcrypt_cost = PasswordConfig::resolve_cost(get("BCRYPT_COST").as_deref(), &environment);

        let rate_limit = RateLimitConfig {
            per_second: get("RATE_LIMIT_PER_SECOND")
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            burst_size: get("RATE_LIMIT_BURST_SIZE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(200),
        };

        let cors_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_cors_origins);

        Ok(Self {
            database_url: get("DATABASE_URL")
                .unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            database_name: get("DATABASE_NAME").unwrap_or_else(|| "users_api".to_string()),
            jwt_secret,
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            grpc_port,
            environment,
            trust_mode,
            bcrypt_cost,
            rate_limit,
            cors_origins,
        })
    }

    /// 세션 쿠키에 Secure 속성을 붙일지 여부
    pub fn secure_cookies(&self) -> bool {
        self.environment.is_production()
    }

    /// 테스트용 설정
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::from_lookup(|key| match key {
            "ENVIRONMENT" => Some("test".to_string()),
            "JWT_SECRET" => Some("test-secret-key".to_string()),
            _ => None,
        })
        .expect("test config")
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, key: &str, default: T) -> AppResult<T> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::InternalError(format!("{} has an invalid value '{}'", key, value))),
        None => Ok(default),
    }
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
        "http://127.0.0.1:3000".to_string(),
    ]
}
