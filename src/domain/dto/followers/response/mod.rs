use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::followers::Follower;

/// 팔로우 관계 응답 DTO
///
/// 간선 양쪽 사용자의 공개 프로필을 함께 포함합니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FollowerResponse {
    pub id: String,
    pub follower_id: String,
    pub followed_id: String,
    pub followed_since: DateTime<Utc>,
    pub follower: UserResponse,
    pub followed: UserResponse,
}

impl FollowerResponse {
    pub fn new(edge: Follower, follower: UserResponse, followed: UserResponse) -> Self {
        Self {
            id: edge.id_string().unwrap_or_default(),
            follower_id: edge.follower_id.to_hex(),
            followed_id: edge.followed_id.to_hex(),
            followed_since: edge.followed_since.to_chrono(),
            follower,
            followed,
        }
    }
}

/// 팔로우 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowResponse {
    pub message: String,
    pub follower: FollowerResponse,
}
