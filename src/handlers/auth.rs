//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 로그아웃, 현재 사용자 조회를 처리합니다.
//! 세션 토큰은 응답 본문이 아니라 `auth_token` HttpOnly 쿠키로만 전달됩니다.
//!
//! | 메서드 | 경로 | 인증 | 결과 |
//! |--------|------|------|------|
//! | `POST` | `/api/auth/register` | - | 201 `{message, user}` |
//! | `POST` | `/api/auth/login` | - | 200 `{message, user}` + 쿠키 |
//! | `POST` | `/api/auth/logout` | - | 200 `{message}` + 쿠키 삭제 |
//! | `GET` | `/api/auth/me` | 세션 | 200 user |

use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::{HttpResponse, get, post, web};

use crate::config::SessionCookieConfig;
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::dto::users::response::{AuthResponse, MessageResponse, UserResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::state::AppState;

/// 세션 쿠키를 생성합니다. `max_age`가 음수면 브라우저가 즉시 삭제합니다.
fn session_cookie(value: String, max_age_seconds: i64, secure: bool) -> Cookie<'static> {
    Cookie::build(SessionCookieConfig::NAME, value)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::seconds(max_age_seconds))
        .finish()
}

#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(AuthResponse::new("User registered successfully", user)))
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.authenticate(payload.into_inner()).await?;

    let user_id = user
        .id_string()
        .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;
    let token = state
        .token_service
        .generate_token(&user_id, &user.username, &user.email)?;

    log::info!("🔑 로그인 성공 - 사용자: {}, ID: {}", user.username, user_id);

    let cookie = session_cookie(
        token,
        SessionCookieConfig::MAX_AGE_SECONDS,
        state.config.secure_cookies(),
    );

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(AuthResponse::new("Login successful", UserResponse::from(user))))
}

#[post("/logout")]
pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    let cookie = session_cookie(String::new(), -1, state.config.secure_cookies());

    HttpResponse::Ok()
        .cookie(cookie)
        .json(MessageResponse::new("Logout successful"))
}

#[get("/me")]
pub async fn me(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let profile = state.user_service.get_user(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}
