//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 REST, GraphQL, gRPC
//! 세 인터페이스가 동일한 에러 분류를 공유하도록 합니다.
//!
//! | 변형 | HTTP | gRPC |
//! |------|------|------|
//! | `ValidationError` | 400 | `InvalidArgument` |
//! | `AuthenticationError` | 401 | `Unauthenticated` |
//! | `NotFound` | 404 | `NotFound` |
//! | `ConflictError` | 409 | `AlreadyExists` |
//! | `DatabaseError` / `InternalError` | 500 | `Internal` |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn register(req: RegisterRequest) -> Result<UserResponse, AppError> {
//!     if repo.exists_by_email(&req.email).await? {
//!         return Err(AppError::ConflictError("Email already exists".to_string()));
//!     }
//!     // ...
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 핸들러에서 `?`로 전파하면 자동으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("{0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("{0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("{0}")]
    AuthenticationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// GraphQL `extensions.code` 등에 노출되는 기계 판독용 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "BAD_REQUEST",
            AppError::AuthenticationError(_) => "UNAUTHORIZED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ConflictError(_) => "CONFLICT",
            AppError::DatabaseError(_) | AppError::InternalError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// 클라이언트에게 노출해도 되는 메시지
    ///
    /// 500 계열은 내부 상세를 숨기고 고정 문구만 내려보냅니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러는 `{"error": "..."}` 형태의 JSON 본문으로 내려갑니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if matches!(self, AppError::DatabaseError(_) | AppError::InternalError(_)) {
            log::error!("요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.public_message()
            }))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        if is_duplicate_key(&e) {
            return AppError::ConflictError("Username or email already exists".to_string());
        }
        AppError::DatabaseError(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::ValidationError(e.to_string())
    }
}

impl From<AppError> for tonic::Status {
    fn from(e: AppError) -> Self {
        let message = e.public_message();
        match e {
            AppError::ValidationError(_) => tonic::Status::invalid_argument(message),
            AppError::AuthenticationError(_) => tonic::Status::unauthenticated(message),
            AppError::NotFound(_) => tonic::Status::not_found(message),
            AppError::ConflictError(_) => tonic::Status::already_exists(message),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                tonic::Status::internal(message)
            }
        }
    }
}

/// MongoDB unique 인덱스 위반(E11000) 여부
pub fn is_duplicate_key(e: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match e.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        ErrorKind::Command(command_error) => command_error.code == 11000,
        _ => false,
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
