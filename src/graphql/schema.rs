//! GraphQL Query / Mutation 루트
//!
//! 리졸버는 서비스 계층을 그대로 호출하며, 서비스 에러는
//! `extensions.code`가 붙은 GraphQL 에러로 변환됩니다.

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Schema};

use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::graphql::types::{CreateUserInput, FollowerObject, UserObject};
use crate::services::followers::FollowerService;
use crate::services::users::UserService;

pub type UsersSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.public_message()).extend_with(|_, e| e.set("code", self.code()))
    }
}

/// 서비스 결과를 GraphQL 결과로 변환
fn resolve<T>(result: AppResult<T>) -> async_graphql::Result<T> {
    result.map_err(|e| e.extend())
}

fn users_of(ctx: &Context<'_>) -> async_graphql::Result<Arc<UserService>> {
    Ok(ctx.data::<Arc<UserService>>()?.clone())
}

fn followers_of(ctx: &Context<'_>) -> async_graphql::Result<Arc<FollowerService>> {
    Ok(ctx.data::<Arc<FollowerService>>()?.clone())
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<UserObject>> {
        let users = resolve(users_of(ctx)?.list_users().await)?;
        Ok(users.into_iter().map(UserObject::from).collect())
    }

    async fn user(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<UserObject> {
        Ok(resolve(users_of(ctx)?.get_user(&id).await)?.into())
    }

    async fn user_by_username(
        &self,
        ctx: &Context<'_>,
        username: String,
    ) -> async_graphql::Result<UserObject> {
        Ok(resolve(users_of(ctx)?.get_user_by_username(&username).await)?.into())
    }

    async fn user_by_email(&self, ctx: &Context<'_>, email: String) -> async_graphql::Result<UserObject> {
        Ok(resolve(users_of(ctx)?.get_user_by_email(&email).await)?.into())
    }

    /// 이름, 성, 사용자명에 대한 대소문자 무시 부분 일치 검색
    async fn search_users(&self, ctx: &Context<'_>, query: String) -> async_graphql::Result<Vec<UserObject>> {
        let users = resolve(users_of(ctx)?.search_users(&query).await)?;
        Ok(users.into_iter().map(UserObject::from).collect())
    }

    /// `userId`가 팔로우하는 관계 목록
    async fn following(&self, ctx: &Context<'_>, user_id: String) -> async_graphql::Result<Vec<FollowerObject>> {
        let edges = resolve(followers_of(ctx)?.following_of(&user_id).await)?;
        Ok(edges.into_iter().map(FollowerObject::from).collect())
    }

    /// `userId`를 팔로우하는 관계 목록
    async fn followers(&self, ctx: &Context<'_>, user_id: String) -> async_graphql::Result<Vec<FollowerObject>> {
        let edges = resolve(followers_of(ctx)?.followers_of(&user_id).await)?;
        Ok(edges.into_iter().map(FollowerObject::from).collect())
    }

    async fn is_following(
        &self,
        ctx: &Context<'_>,
        follower_id: String,
        followed_id: String,
    ) -> async_graphql::Result<bool> {
        resolve(followers_of(ctx)?.is_following(&follower_id, &followed_id).await)
    }

    async fn follower_relationship(
        &self,
        ctx: &Context<'_>,
        follower_id: String,
        followed_id: String,
    ) -> async_graphql::Result<Option<FollowerObject>> {
        let edge = resolve(followers_of(ctx)?.relationship(&follower_id, &followed_id).await)?;
        Ok(edge.map(FollowerObject::from))
    }

    async fn follower_count(&self, ctx: &Context<'_>, user_id: String) -> async_graphql::Result<u64> {
        resolve(followers_of(ctx)?.follower_count(&user_id).await)
    }

    async fn following_count(&self, ctx: &Context<'_>, user_id: String) -> async_graphql::Result<u64> {
        resolve(followers_of(ctx)?.following_count(&user_id).await)
    }

    /// 세션 쿠키로 식별된 현재 사용자
    async fn me(&self, ctx: &Context<'_>) -> async_graphql::Result<UserObject> {
        let session = ctx
            .data_opt::<AuthenticatedUser>()
            .ok_or_else(|| AppError::AuthenticationError("Unauthorized".to_string()).extend())?;

        Ok(resolve(users_of(ctx)?.get_user(&session.user_id).await)?.into())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_user(&self, ctx: &Context<'_>, input: CreateUserInput) -> async_graphql::Result<UserObject> {
        Ok(resolve(users_of(ctx)?.register(input.into()).await)?.into())
    }
}

/// 서비스를 스키마 데이터로 주입해 스키마를 구성합니다.
pub fn build_schema(user_service: Arc<UserService>, follower_service: Arc<FollowerService>) -> UsersSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(user_service)
        .data(follower_service)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::domain::dto::users::request::RegisterRequest;
    use crate::state::AppState;
    use serde_json::Value;

    fn setup() -> (AppState, UsersSchema) {
        let state = AppState::for_tests(AppConfig::for_tests());
        let schema = build_schema(state.user_service.clone(), state.follower_service.clone());
        (state, schema)
    }

    async fn execute(schema: &UsersSchema, request: impl Into<async_graphql::Request>) -> Value {
        let response = schema.execute(request).await;
        serde_json::to_value(&response).unwrap()
    }

    async fn seed(state: &AppState, username: &str) -> String {
        state
            .user_service
            .register(RegisterRequest {
                first_name: username.to_string(),
                last_name: "Tester".to_string(),
                email: format!("{}@example.com", username),
                username: username.to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap()
            .id
    }

    #[actix_web::test]
    async fn test_create_user_and_query_by_username() {
        let (_, schema) = setup();

        let created = execute(
            &schema,
            r#"mutation {
                createUser(input: {
                    firstName: "Ada", lastName: "Lovelace",
                    email: "ada@example.com", username: "ada", password: "secret1"
                }) { id username createdAt }
            }"#,
        )
        .await;
        assert!(created.get("errors").is_none());
        assert_eq!(created["data"]["createUser"]["username"], "ada");

        let found = execute(&schema, r#"{ userByUsername(username: "ada") { firstName email } }"#).await;
        assert_eq!(found["data"]["userByUsername"]["firstName"], "Ada");
        assert_eq!(found["data"]["userByUsername"]["email"], "ada@example.com");
    }

    #[actix_web::test]
    async fn test_errors_carry_code_extension() {
        let (state, schema) = setup();
        seed(&state, "ada").await;

        let duplicate = execute(
            &schema,
            r#"mutation {
                createUser(input: {
                    firstName: "Ada", lastName: "Again",
                    email: "ada@example.com", username: "ada2", password: "secret1"
                }) { id }
            }"#,
        )
        .await;
        assert_eq!(duplicate["errors"][0]["extensions"]["code"], "CONFLICT");

        let invalid = execute(&schema, r#"{ user(id: "nope") { id } }"#).await;
        assert_eq!(invalid["errors"][0]["message"], "Invalid user ID");
        assert_eq!(invalid["errors"][0]["extensions"]["code"], "BAD_REQUEST");
    }

    #[actix_web::test]
    async fn test_follower_queries() {
        let (state, schema) = setup();
        let ada = seed(&state, "ada").await;
        let grace = seed(&state, "grace").await;
        state.follower_service.follow(&ada, &grace).await.unwrap();

        let query = format!(
            r#"{{
                isFollowing(followerId: "{ada}", followedId: "{grace}")
                reverse: isFollowing(followerId: "{grace}", followedId: "{ada}")
                followerCount(userId: "{grace}")
                followingCount(userId: "{grace}")
                followers(userId: "{grace}") {{ follower {{ username }} }}
                followerRelationship(followerId: "{ada}", followedId: "{grace}") {{ followedSince }}
            }}"#
        );
        let body = execute(&schema, query).await;
        let data = &body["data"];

        assert_eq!(data["isFollowing"], true);
        assert_eq!(data["reverse"], false);
        assert_eq!(data["followerCount"], 1);
        assert_eq!(data["followingCount"], 0);
        assert_eq!(data["followers"][0]["follower"]["username"], "ada");
        assert!(data["followerRelationship"]["followedSince"].is_string());
    }

    #[actix_web::test]
    async fn test_me_uses_request_session() {
        let (state, schema) = setup();
        let ada = seed(&state, "ada").await;

        let anonymous = execute(&schema, "{ me { username } }").await;
        assert_eq!(anonymous["errors"][0]["extensions"]["code"], "UNAUTHORIZED");

        let request = async_graphql::Request::new("{ me { username } }").data(AuthenticatedUser {
            user_id: ada,
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
        });
        let body = execute(&schema, request).await;
        assert_eq!(body["data"]["me"]["username"], "ada");
    }
}
