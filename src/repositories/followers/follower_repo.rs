//! # 팔로워 리포지토리 구현
//!
//! `followers` 컬렉션의 방향성 간선을 관리합니다.
//! 간선은 언팔로우나 사용자 삭제 시 물리적으로 삭제됩니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, IndexModel,
    bson::{Document, doc, oid::ObjectId},
    options::IndexOptions,
};

use crate::db::Database;
use crate::domain::entities::followers::Follower;
use crate::errors::{AppError, AppResult, is_duplicate_key};

/// 팔로우 관계 저장소 추상화
#[async_trait]
pub trait FollowerRepository: Send + Sync {
    /// 간선을 저장합니다. 같은 순서쌍이 이미 있으면 `ConflictError`.
    async fn create(&self, edge: Follower) -> AppResult<Follower>;

    async fn find(&self, follower_id: &ObjectId, followed_id: &ObjectId) -> AppResult<Option<Follower>>;

    /// 간선을 삭제하고 실제로 삭제되었는지 반환합니다.
    async fn delete(&self, follower_id: &ObjectId, followed_id: &ObjectId) -> AppResult<bool>;

    /// `user_id`를 팔로우하는 간선들
    async fn find_followers_of(&self, user_id: &ObjectId) -> AppResult<Vec<Follower>>;

    /// `user_id`가 팔로우하는 간선들
    async fn find_following_of(&self, user_id: &ObjectId) -> AppResult<Vec<Follower>>;

    async fn count_followers(&self, user_id: &ObjectId) -> AppResult<u64>;

    async fn count_following(&self, user_id: &ObjectId) -> AppResult<u64>;

    /// 사용자가 어느 방향으로든 포함된 모든 간선을 삭제합니다.
    async fn delete_all_for_user(&self, user_id: &ObjectId) -> AppResult<u64>;
}

/// MongoDB 기반 팔로워 리포지토리
pub struct MongoFollowerRepository {
    collection: Collection<Follower>,
}

impl MongoFollowerRepository {
    pub const COLLECTION: &'static str = "followers";

    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<Follower>(Self::COLLECTION),
        }
    }

    async fn find_many(&self, filter: Document) -> AppResult<Vec<Follower>> {
        let edges = self
            .collection
            .find(filter)
            .sort(doc! { "followed_since": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(edges)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let pair_index = IndexModel::builder()
            .keys(doc! { "follower_id": 1, "followed_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("follower_followed_unique".to_string())
                .build())
            .build();

        let followed_index = IndexModel::builder()
            .keys(doc! { "followed_id": 1 })
            .options(IndexOptions::builder()
                .name("followed_id".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([pair_index, followed_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl FollowerRepository for MongoFollowerRepository {
    async fn create(&self, mut edge: Follower) -> AppResult<Follower> {
        let result = self.collection.insert_one(&edge).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::ConflictError("Already following this user".to_string())
            } else {
                AppError::from(e)
            }
        })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("insert did not return an ObjectId".to_string())
        })?;
        edge.id = Some(id);

        Ok(edge)
    }

    async fn find(&self, follower_id: &ObjectId, followed_id: &ObjectId) -> AppResult<Option<Follower>> {
        Ok(self
            .collection
            .find_one(doc! { "follower_id": *follower_id, "followed_id": *followed_id })
            .await?)
    }

    async fn delete(&self, follower_id: &ObjectId, followed_id: &ObjectId) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "follower_id": *follower_id, "followed_id": *followed_id })
            .await?;
        Ok(result.deleted_count > 0)
    }

    async fn find_followers_of(&self, user_id: &ObjectId) -> AppResult<Vec<Follower>> {
        self.find_many(doc! { "followed_id": *user_id }).await
    }

    async fn find_following_of(&self, user_id: &ObjectId) -> AppResult<Vec<Follower>> {
        self.find_many(doc! { "follower_id": *user_id }).await
    }

    async fn count_followers(&self, user_id: &ObjectId) -> AppResult<u64> {
        Ok(self
            .collection
            .count_documents(doc! { "followed_id": *user_id })
            .await?)
    }

    async fn count_following(&self, user_id: &ObjectId) -> AppResult<u64> {
        Ok(self
            .collection
            .count_documents(doc! { "follower_id": *user_id })
            .await?)
    }

    async fn delete_all_for_user(&self, user_id: &ObjectId) -> AppResult<u64> {
        let result = self
            .collection
            .delete_many(doc! {
                "$or": [{ "follower_id": *user_id }, { "followed_id": *user_id }]
            })
            .await?;
        Ok(result.deleted_count)
    }
}
