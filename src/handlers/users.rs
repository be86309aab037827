//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 모든 엔드포인트는 세션이 필요하며, 인증된 사용자라면 누구나 호출할 수 있습니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/users` | 사용자 목록 | 200 OK |
//! | `GET` | `/api/users/search?q=` | 이름/사용자명 검색 | 200 OK |
//! | `GET` | `/api/users/username/{username}` | 사용자명으로 조회 | 200 OK |
//! | `GET` | `/api/users/email/{email}` | 이메일로 조회 | 200 OK |
//! | `GET` | `/api/users/{id}` | 사용자 조회 | 200 OK |
//! | `PUT` | `/api/users/{id}` | 부분 수정 | 200 OK |
//! | `DELETE` | `/api/users/{id}` | 소프트 삭제 | 200 OK |
//!
//! 고정 경로(`search`, `username`, `email`)는 `/{id}`보다 먼저 등록해야 합니다.

use actix_web::{HttpResponse, delete, get, put, web};
use serde::Deserialize;

use crate::domain::dto::users::request::UpdateUserRequest;
use crate::domain::dto::users::response::MessageResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[get("")]
pub async fn list_users(
    state: web::Data<AppState>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let users = state.user_service.list_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

#[get("/search")]
pub async fn search_users(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let users = state.user_service.search_users(&query.q).await?;
    Ok(HttpResponse::Ok().json(users))
}

#[get("/username/{username}")]
pub async fn get_user_by_username(
    state: web::Data<AppState>,
    username: web::Path<String>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.get_user_by_username(&username).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[get("/email/{email}")]
pub async fn get_user_by_email(
    state: web::Data<AppState>,
    email: web::Path<String>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.get_user_by_email(&email).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[get("/{user_id}")]
pub async fn get_user(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.get_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[put("/{user_id}")]
pub async fn update_user(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = state
        .user_service
        .update_user(&user_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(user))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.user_service.delete_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("User deleted successfully")))
}
