//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! `users` 컬렉션의 문서 구조와 1:1로 대응합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::domain::dto::users::request::UpdateUserRequest;

/// 사용자 엔티티
///
/// 삭제는 `deleted_at`을 채우는 소프트 삭제로 처리됩니다.
/// 활성 사용자는 `deleted_at: null`로 저장되며, 이 값이 email/username
/// 복합 unique 인덱스의 일부가 되어 "삭제되지 않은 사용자 간 유일성"을 보장합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    /// 사용자 이메일 (활성 사용자 간 unique)
    pub email: String,
    /// 사용자 이름 (활성 사용자 간 unique)
    pub username: String,
    /// bcrypt 해시. 외부로 직렬화되지 않습니다.
    pub password_hash: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    /// 소프트 삭제 시각
    #[serde(default)]
    pub deleted_at: Option<DateTime>,
}

impl User {
    /// 새 사용자 생성
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        username: String,
        password_hash: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            first_name,
            last_name,
            email,
            username,
            password_hash,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// 사용자 ID를 문자열로 반환
    pub fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.to_hex())
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// 부분 업데이트를 적용합니다.
    ///
    /// 값이 있는 필드만 덮어씁니다. 비밀번호는 이미 해시된 값을 받습니다.
    pub fn apply_update(&mut self, update: UpdateUserRequest, password_hash: Option<String>) {
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(username) = update.username {
            self.username = username;
        }
        if let Some(hash) = password_hash {
            self.password_hash = hash;
        }
        self.updated_at = DateTime::now();
    }

    /// 소프트 삭제 표시
    pub fn mark_deleted(&mut self) {
        let now = DateTime::now();
        self.deleted_at = Some(now);
        self.updated_at = now;
    }
}
