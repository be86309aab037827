//! # 팔로우 관계 서비스
//!
//! 사용자 간 팔로우/언팔로우와 관계 조회를 담당합니다.
//! 목록 응답에는 간선 양쪽 사용자의 공개 프로필이 함께 실립니다.

use std::collections::HashMap;
use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::domain::dto::followers::response::FollowerResponse;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::followers::Follower;
use crate::errors::{AppError, AppResult};
use crate::repositories::followers::FollowerRepository;
use crate::repositories::users::UserRepository;
use crate::utils::string_utils::parse_user_id;

pub struct FollowerService {
    user_repo: Arc<dyn UserRepository>,
    follower_repo: Arc<dyn FollowerRepository>,
}

impl FollowerService {
    pub fn new(user_repo: Arc<dyn UserRepository>, follower_repo: Arc<dyn FollowerRepository>) -> Self {
        Self {
            user_repo,
            follower_repo,
        }
    }

    /// `follower_id`가 `followed_id`를 팔로우합니다.
    pub async fn follow(&self, follower_id: &str, followed_id: &str) -> AppResult<FollowerResponse> {
        let follower_oid = parse_user_id(follower_id)?;
        let followed_oid = parse_user_id(followed_id)?;

        if follower_oid == followed_oid {
            return Err(AppError::ValidationError("Cannot follow yourself".to_string()));
        }

        let follower = self
            .user_repo
            .find_by_id(&follower_oid)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        let followed = self
            .user_repo
            .find_by_id(&followed_oid)
            .await?
            .ok_or_else(|| AppError::NotFound("User to follow not found".to_string()))?;

        if self.follower_repo.find(&follower_oid, &followed_oid).await?.is_some() {
            return Err(AppError::ConflictError("Already following this user".to_string()));
        }

        let edge = self
            .follower_repo
            .create(Follower::new(follower_oid, followed_oid))
            .await?;

        log::info!("🤝 팔로우: {} → {}", follower.username, followed.username);

        Ok(FollowerResponse::new(
            edge,
            UserResponse::from(follower),
            UserResponse::from(followed),
        ))
    }

    pub async fn unfollow(&self, follower_id: &str, followed_id: &str) -> AppResult<()> {
        let follower_oid = parse_user_id(follower_id)?;
        let followed_oid = parse_user_id(followed_id)?;

        if !self.follower_repo.delete(&follower_oid, &followed_oid).await? {
            return Err(AppError::NotFound("Not following this user".to_string()));
        }

        log::info!("👋 언팔로우: {} → {}", follower_id, followed_id);
        Ok(())
    }

    /// `user_id`를 팔로우하는 관계 목록
    pub async fn followers_of(&self, user_id: &str) -> AppResult<Vec<FollowerResponse>> {
        let user_oid = parse_user_id(user_id)?;
        let edges = self.follower_repo.find_followers_of(&user_oid).await?;
        self.hydrate(edges).await
    }

    /// `user_id`가 팔로우하는 관계 목록
    pub async fn following_of(&self, user_id: &str) -> AppResult<Vec<FollowerResponse>> {
        let user_oid = parse_user_id(user_id)?;
        let edges = self.follower_repo.find_following_of(&user_oid).await?;
        self.hydrate(edges).await
    }

    pub async fn is_following(&self, follower_id: &str, followed_id: &str) -> AppResult<bool> {
        Ok(self.relationship(follower_id, followed_id).await?.is_some())
    }

    pub async fn relationship(
        &self,
        follower_id: &str,
        followed_id: &str,
    ) -> AppResult<Option<FollowerResponse>> {
        let follower_oid = parse_user_id(follower_id)?;
        let followed_oid = parse_user_id(followed_id)?;

        match self.follower_repo.find(&follower_oid, &followed_oid).await? {
            Some(edge) => Ok(self.hydrate(vec![edge]).await?.into_iter().next()),
            None => Ok(None),
        }
    }

    pub async fn follower_count(&self, user_id: &str) -> AppResult<u64> {
        let user_oid = parse_user_id(user_id)?;
        self.follower_repo.count_followers(&user_oid).await
    }

    pub async fn following_count(&self, user_id: &str) -> AppResult<u64> {
        let user_oid = parse_user_id(user_id)?;
        self.follower_repo.count_following(&user_oid).await
    }

    /// 간선 목록에 양쪽 사용자 프로필을 채웁니다.
    ///
    /// 활성 사용자가 아닌 쪽이 있는 간선은 제외합니다.
    async fn hydrate(&self, edges: Vec<Follower>) -> AppResult<Vec<FollowerResponse>> {
        if edges.is_empty() {
            return Ok(Vec::new());
        }

        let mut ids: Vec<ObjectId> = edges
            .iter()
            .flat_map(|edge| [edge.follower_id, edge.followed_id])
            .collect();
        ids.sort();
        ids.dedup();

        let users: HashMap<ObjectId, UserResponse> = self
            .user_repo
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .filter_map(|user| user.id.map(|id| (id, UserResponse::from(user))))
            .collect();

        Ok(edges
            .into_iter()
            .filter_map(|edge| {
                let follower = users.get(&edge.follower_id)?.clone();
                let followed = users.get(&edge.followed_id)?.clone();
                Some(FollowerResponse::new(edge, follower, followed))
            })
            .collect())
    }
}
