//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//!
//! ## 특징
//!
//! - **trait 경계**: 서비스는 [`UserRepository`] trait에만 의존
//! - **소프트 삭제**: 모든 조회는 `deleted_at: null`인 활성 사용자만 대상
//! - **데이터 무결성**: `(email, deleted_at)`, `(username, deleted_at)` 복합 unique 인덱스

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, IndexModel,
    bson::{Bson, Document, doc, oid::ObjectId},
    options::IndexOptions,
};

use crate::db::Database;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};

/// 사용자 저장소 추상화
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 새 사용자를 저장하고 ID가 채워진 엔티티를 반환합니다.
    async fn create(&self, user: User) -> AppResult<User>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// 여러 ID를 한 번에 조회합니다. 존재하지 않는 ID는 건너뜁니다.
    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 활성 사용자 전체 (최근 가입 순)
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// 이름/성/사용자명에 대한 대소문자 무시 부분 문자열 검색
    async fn search(&self, query: &str) -> AppResult<Vec<User>>;

    /// 저장된 문서를 통째로 교체합니다. 대상이 없으면 `NotFound`.
    async fn replace(&self, user: &User) -> AppResult<()>;
}

/// MongoDB 기반 사용자 리포지토리
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<User>(Self::COLLECTION),
        }
    }

    /// 활성 사용자 조건을 덧붙인 필터
    fn active(mut filter: Document) -> Document {
        filter.insert("deleted_at", Bson::Null);
        filter
    }

    async fn find_many(&self, filter: Document) -> AppResult<Vec<User>> {
        let users = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(users)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        // 활성 사용자는 deleted_at이 null이므로 활성 사용자 간에만 이메일이 유일
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1, "deleted_at": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_active_unique".to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1, "deleted_at": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_active_unique".to_string())
                .build())
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, username_index, created_at_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self.collection.insert_one(&user).await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("insert did not return an ObjectId".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self.collection.find_one(Self::active(doc! { "_id": *id })).await?)
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.find_many(Self::active(doc! { "_id": { "$in": ids.to_vec() } })).await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .collection
            .find_one(Self::active(doc! { "username": username }))
            .await?)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .collection
            .find_one(Self::active(doc! { "email": email }))
            .await?)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.find_many(Self::active(doc! {})).await
    }

    async fn search(&self, query: &str) -> AppResult<Vec<User>> {
        self.find_many(Self::active(search_filter(query))).await
    }

    async fn replace(&self, user: &User) -> AppResult<()> {
        let id = user
            .id
            .ok_or_else(|| AppError::InternalError("cannot replace a user without id".to_string()))?;

        let result = self.collection.replace_one(doc! { "_id": id }, user).await?;
        if result.matched_count == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        Ok(())
    }
}

/// 이름/사용자명 대상 대소문자 무시 부분 문자열 검색 필터
///
/// 검색어는 정규식 메타문자를 이스케이프해 리터럴로 취급합니다.
fn search_filter(query: &str) -> Document {
    let pattern = regex::escape(query);
    let regex = |field: &str| doc! { field: { "$regex": pattern.as_str(), "$options": "i" } };

    doc! {
        "$or": [regex("first_name"), regex("last_name"), regex("username")]
    }
}
