//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 [`AppConfig`] 하나로 모아 시작 시 한 번 읽습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 요청 제한 설정
//! - [`auth_config`] - JWT, 세션 쿠키, 신뢰 모드 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Server will bind to {}:{}", config.host, config.port);
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수 (프로덕션)
//!
//! ```bash
//! export ENVIRONMENT="production"
//! export JWT_SECRET="your-super-secret-key"
//! export DATABASE_URL="mongodb://user:pass@db:27017"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export PORT="3001"
//! export GRPC_PORT="50051"
//! export AUTH_TRUST_MODE="gateway"  # verify | gateway
//! export BCRYPT_COST="12"           # 4-15 범위
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
