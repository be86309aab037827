//! Follower Entity
//!
//! 팔로우 관계(방향성 간선)를 표현합니다. `follower_id`가 `followed_id`를 팔로우합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 팔로우 관계 엔티티
///
/// 순서쌍 `(follower_id, followed_id)`당 최대 하나만 존재합니다 (unique 인덱스).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Follower {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub follower_id: ObjectId,
    pub followed_id: ObjectId,
    pub followed_since: DateTime,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Follower {
    pub fn new(follower_id: ObjectId, followed_id: ObjectId) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            follower_id,
            followed_id,
            followed_since: now,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.to_hex())
    }
}
