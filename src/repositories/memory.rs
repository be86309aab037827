//! 테스트용 인메모리 리포지토리
//!
//! MongoDB 구현과 같은 계약(활성 사용자 필터, 유일성 충돌, 정렬)을 따릅니다.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::followers::Follower;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::followers::FollowerRepository;
use crate::repositories::users::UserRepository;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    fn active(&self) -> Vec<User> {
        let mut users: Vec<User> = self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| !u.is_deleted())
            .cloned()
            .collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        users
    }

    /// 소프트 삭제된 행까지 포함한 전체 행 수
    pub fn total_rows(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn conflicts(existing: &[User], candidate: &User) -> bool {
        existing.iter().any(|u| {
            !u.is_deleted()
                && !candidate.is_deleted()
                && u.id != candidate.id
                && (u.email == candidate.email || u.username == candidate.username)
        })
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if Self::conflicts(&users, &user) {
            return Err(AppError::ConflictError("Username or email already exists".to_string()));
        }
        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self.active().into_iter().find(|u| u.id.as_ref() == Some(id)))
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<User>> {
        Ok(self
            .active()
            .into_iter()
            .filter(|u| u.id.map(|id| ids.contains(&id)).unwrap_or(false))
            .collect())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.active().into_iter().find(|u| u.username == username))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.active().into_iter().find(|u| u.email == email))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.active())
    }

    async fn search(&self, query: &str) -> AppResult<Vec<User>> {
        let needle = query.to_lowercase();
        Ok(self
            .active()
            .into_iter()
            .filter(|u| {
                u.first_name.to_lowercase().contains(&needle)
                    || u.last_name.to_lowercase().contains(&needle)
                    || u.username.to_lowercase().contains(&needle)
            })
            .collect())
    }

    async fn replace(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();
        if Self::conflicts(&users, user) {
            return Err(AppError::ConflictError("Username or email already exists".to_string()));
        }
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user.clone();
                Ok(())
            }
            None => Err(AppError::NotFound("User not found".to_string())),
        }
    }
}

#[derive(Default)]
pub struct InMemoryFollowerRepository {
    edges: Mutex<Vec<Follower>>,
}

impl InMemoryFollowerRepository {
    fn matching<F>(&self, predicate: F) -> Vec<Follower>
    where
        F: Fn(&Follower) -> bool,
    {
        let mut edges: Vec<Follower> = self
            .edges
            .lock()
            .unwrap()
            .iter()
            .filter(|e| predicate(e))
            .cloned()
            .collect();
        edges.sort_by(|a, b| b.followed_since.cmp(&a.followed_since));
        edges
    }
}

#[async_trait]
impl FollowerRepository for InMemoryFollowerRepository {
    async fn create(&self, mut edge: Follower) -> AppResult<Follower> {
        let mut edges = self.edges.lock().unwrap();
        if edges
            .iter()
            .any(|e| e.follower_id == edge.follower_id && e.followed_id == edge.followed_id)
        {
            return Err(AppError::ConflictError("Already following this user".to_string()));
        }
        edge.id = Some(ObjectId::new());
        edges.push(edge.clone());
        Ok(edge)
    }

    async fn find(&self, follower_id: &ObjectId, followed_id: &ObjectId) -> AppResult<Option<Follower>> {
        Ok(self
            .matching(|e| e.follower_id == *follower_id && e.followed_id == *followed_id)
            .into_iter()
            .next())
    }

    async fn delete(&self, follower_id: &ObjectId, followed_id: &ObjectId) -> AppResult<bool> {
        let mut edges = self.edges.lock().unwrap();
        let before = edges.len();
        edges.retain(|e| !(e.follower_id == *follower_id && e.followed_id == *followed_id));
        Ok(edges.len() < before)
    }

    async fn find_followers_of(&self, user_id: &ObjectId) -> AppResult<Vec<Follower>> {
        Ok(self.matching(|e| e.followed_id == *user_id))
    }

    async fn find_following_of(&self, user_id: &ObjectId) -> AppResult<Vec<Follower>> {
        Ok(self.matching(|e| e.follower_id == *user_id))
    }

    async fn count_followers(&self, user_id: &ObjectId) -> AppResult<u64> {
        Ok(self.matching(|e| e.followed_id == *user_id).len() as u64)
    }

    async fn count_following(&self, user_id: &ObjectId) -> AppResult<u64> {
        Ok(self.matching(|e| e.follower_id == *user_id).len() as u64)
    }

    async fn delete_all_for_user(&self, user_id: &ObjectId) -> AppResult<u64> {
        let mut edges = self.edges.lock().unwrap();
        let before = edges.len();
        edges.retain(|e| e.follower_id != *user_id && e.followed_id != *user_id);
        Ok((before - edges.len()) as u64)
    }
}
