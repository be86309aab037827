//! GraphQL 출력/입력 타입
//!
//! REST DTO를 그대로 노출하지 않고 GraphQL 전용 타입으로 변환합니다.
//! 시각 값은 RFC 3339 문자열로 내려갑니다.

use async_graphql::{InputObject, SimpleObject};

use crate::domain::dto::followers::response::FollowerResponse;
use crate::domain::dto::users::request::RegisterRequest;
use crate::domain::dto::users::response::UserResponse;

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "User")]
pub struct UserObject {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserResponse> for UserObject {
    fn from(user: UserResponse) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            username: user.username,
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

/// 팔로우 관계와 양쪽 사용자
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Follower")]
pub struct FollowerObject {
    pub id: String,
    pub follower_id: String,
    pub followed_id: String,
    pub followed_since: String,
    pub follower: UserObject,
    pub followed: UserObject,
}

impl From<FollowerResponse> for FollowerObject {
    fn from(edge: FollowerResponse) -> Self {
        Self {
            id: edge.id,
            follower_id: edge.follower_id,
            followed_id: edge.followed_id,
            followed_since: edge.followed_since.to_rfc3339(),
            follower: edge.follower.into(),
            followed: edge.followed.into(),
        }
    }
}

/// `createUser` 입력. 검증 규칙은 REST 회원가입과 같습니다.
#[derive(Debug, Clone, InputObject)]
pub struct CreateUserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

impl From<CreateUserInput> for RegisterRequest {
    fn from(input: CreateUserInput) -> Self {
        Self {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            username: input.username,
            password: input.password,
        }
    }
}
