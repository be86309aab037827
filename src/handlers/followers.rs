//! # Follower HTTP Handlers
//!
//! 현재 세션 사용자 기준의 팔로우/언팔로우와 팔로워 목록을 처리합니다.
//!
//! | 메서드 | 경로 | 결과 |
//! |--------|------|------|
//! | `POST` | `/api/followers/follow` | 201 `{message, follower}` |
//! | `DELETE` | `/api/followers/unfollow/{id}` | 200 `{message}` |
//! | `GET` | `/api/followers/my-followers` | 200 `[follower]` |
//! | `GET` | `/api/followers/my-following` | 200 `[follower]` |

use actix_web::{HttpResponse, delete, get, post, web};
use validator::Validate;

use crate::domain::dto::followers::request::FollowRequest;
use crate::domain::dto::followers::response::FollowResponse;
use crate::domain::dto::users::response::MessageResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::state::AppState;

#[post("/follow")]
pub async fn follow(
    state: web::Data<AppState>,
    payload: web::Json<FollowRequest>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let follower = state
        .follower_service
        .follow(&user.user_id, &payload.followed_id)
        .await?;

    Ok(HttpResponse::Created().json(FollowResponse {
        message: "Successfully followed user".to_string(),
        follower,
    }))
}

#[delete("/unfollow/{user_id}")]
pub async fn unfollow(
    state: web::Data<AppState>,
    followed_id: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state
        .follower_service
        .unfollow(&user.user_id, &followed_id)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Successfully unfollowed user")))
}

#[get("/my-followers")]
pub async fn my_followers(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let followers = state.follower_service.followers_of(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(followers))
}

#[get("/my-following")]
pub async fn my_following(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let following = state.follower_service.following_of(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(following))
}
