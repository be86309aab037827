//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! REST, GraphQL, gRPC 세 인터페이스가 모두 이 서비스를 공유합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Registration        Authentication       User Query            │
//! │  • Input Valid       • Password Verify    • By ID/Username/Email│
//! │  • Duplicate Chk     • Identical Failure  • Search / Batch      │
//! │  • Password Hash                          • Entity to DTO       │
//! │                                                                 │
//! │  Profile Mgmt                                                   │
//! │  • Partial Update (re-hash password)                            │
//! │  • Soft Delete + follower edge cleanup                          │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 │
//!                                 ▼
//!              UserRepository / FollowerRepository (trait)
//! ```
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 환경별 cost (개발/테스트 4, 스테이징 10, 운영 12)
//! - **동일한 실패 응답**: 존재하지 않는 사용자명과 잘못된 비밀번호는 같은 401
//! - **민감 정보 제거**: DTO 변환 시 비밀번호 해시 제외

use std::sync::Arc;

use bcrypt::{hash, verify};
use validator::Validate;

use crate::domain::dto::users::request::{LoginRequest, RegisterRequest, UpdateUserRequest};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::followers::FollowerRepository;
use crate::repositories::users::UserRepository;
use crate::utils::string_utils::{parse_user_id, validate_required_string};

const DUPLICATE_USER: &str = "Username or email already exists";
const INVALID_CREDENTIALS: &str = "Invalid credentials";
const USER_NOT_FOUND: &str = "User not found";

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    follower_repo: Arc<dyn FollowerRepository>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        follower_repo: Arc<dyn FollowerRepository>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            user_repo,
            follower_repo,
            bcrypt_cost,
        }
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        let hash_start = std::time::Instant::now();
        let password_hash = hash(password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        log::debug!("Password hashing took: {:?} (cost {})", hash_start.elapsed(), self.bcrypt_cost);
        Ok(password_hash)
    }

    /// 신규 사용자를 등록합니다.
    ///
    /// 활성 사용자 중 같은 이메일이나 사용자명이 있으면 409를 반환합니다.
    /// 동시 요청 경합은 unique 인덱스가 최종적으로 막습니다.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserResponse> {
        let start_time = std::time::Instant::now();
        request.validate()?;

        if self.user_repo.find_by_email(&request.email).await?.is_some()
            || self.user_repo.find_by_username(&request.username).await?.is_some()
        {
            return Err(AppError::ConflictError(DUPLICATE_USER.to_string()));
        }

        let password_hash = self.hash_password(&request.password)?;

        let user = User::new(
            request.first_name,
            request.last_name,
            request.email,
            request.username,
            password_hash,
        );

        let created_user = self.user_repo.create(user).await?;

        log::info!(
            "👤 사용자 등록 완료: {} ({:?})",
            created_user.username,
            start_time.elapsed()
        );

        Ok(UserResponse::from(created_user))
    }

    /// 사용자명/비밀번호를 검증합니다.
    ///
    /// 사용자가 없거나 비밀번호가 틀린 경우 모두 같은 에러를 반환합니다.
    pub async fn authenticate(&self, request: LoginRequest) -> AppResult<User> {
        request.validate()?;

        let Some(user) = self.user_repo.find_by_username(&request.username).await? else {
            log::warn!("🔒 로그인 실패: 알 수 없는 사용자명");
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        };

        let verify_start = std::time::Instant::now();
        let is_valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            log::warn!("🔒 로그인 실패: 비밀번호 불일치 ({})", user.username);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        Ok(user)
    }

    async fn load(&self, id: &str) -> AppResult<User> {
        let object_id = parse_user_id(id)?;
        self.user_repo
            .find_by_id(&object_id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    pub async fn get_user(&self, id: &str) -> AppResult<UserResponse> {
        Ok(UserResponse::from(self.load(id).await?))
    }

    pub async fn get_user_by_username(&self, username: &str) -> AppResult<UserResponse> {
        self.user_repo
            .find_by_username(username)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    pub async fn get_user_by_email(&self, email: &str) -> AppResult<UserResponse> {
        self.user_repo
            .find_by_email(email)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.user_repo.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn search_users(&self, query: &str) -> AppResult<Vec<UserResponse>> {
        let query = validate_required_string(query, "Search query")?;
        let users = self.user_repo.search(&query).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 여러 ID를 한 번에 조회합니다.
    ///
    /// 존재하지 않는 ID는 결과에서 빠지고, 형식이 잘못된 ID는 400입니다.
    pub async fn get_users_by_ids(&self, ids: &[String]) -> AppResult<Vec<UserResponse>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let object_ids = ids
            .iter()
            .map(|id| parse_user_id(id))
            .collect::<AppResult<Vec<_>>>()?;

        let users = self.user_repo.find_by_ids(&object_ids).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 값이 있는 필드만 갱신합니다.
    pub async fn update_user(&self, id: &str, request: UpdateUserRequest) -> AppResult<UserResponse> {
        request.validate()?;
        let mut user = self.load(id).await?;

        if let Some(email) = request.email.as_deref().filter(|email| *email != user.email) {
            if self.user_repo.find_by_email(email).await?.is_some() {
                return Err(AppError::ConflictError(DUPLICATE_USER.to_string()));
            }
        }
        if let Some(username) = request.username.as_deref().filter(|name| *name != user.username) {
            if self.user_repo.find_by_username(username).await?.is_some() {
                return Err(AppError::ConflictError(DUPLICATE_USER.to_string()));
            }
        }

        let password_hash = match request.password.as_deref() {
            Some(password) => Some(self.hash_password(password)?),
            None => None,
        };

        user.apply_update(request, password_hash);
        self.user_repo.replace(&user).await?;

        log::info!("✏️ 사용자 정보 수정: {}", user.username);
        Ok(UserResponse::from(user))
    }

    /// 사용자를 소프트 삭제하고 관련 팔로우 관계를 모두 제거합니다.
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        let mut user = self.load(id).await?;
        let object_id = parse_user_id(id)?;

        user.mark_deleted();
        self.user_repo.replace(&user).await?;

        let removed_edges = self.follower_repo.delete_all_for_user(&object_id).await?;
        log::info!(
            "🗑️ 사용자 삭제: {} (팔로우 관계 {}건 정리)",
            user.username,
            removed_edges
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::followers::Follower;
    use crate::repositories::memory::{InMemoryFollowerRepository, InMemoryUserRepository};

    fn service() -> (UserService, Arc<InMemoryUserRepository>, Arc<InMemoryFollowerRepository>) {
        let users = Arc::new(InMemoryUserRepository::default());
        let followers = Arc::new(InMemoryFollowerRepository::default());
        (UserService::new(users.clone(), followers.clone(), 4), users, followers)
    }

    fn register_request(username: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            username: username.to_string(),
            password: "secret1".to_string(),
        }
    }

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_hashes_password() {
        let (service, users, _) = service();
        let created = service.register(register_request("ada", "ada@example.com")).await.unwrap();

        let stored = users.find_by_username("ada").await.unwrap().unwrap();
        assert_eq!(created.id, stored.id_string().unwrap());
        assert_ne!(stored.password_hash, "secret1");
        assert!(verify("secret1", &stored.password_hash).unwrap());
    }

    #[actix_web::test]
    async fn test_register_duplicate_email_or_username_conflicts() {
        let (service, _, _) = service();
        service.register(register_request("ada", "ada@example.com")).await.unwrap();

        let same_email = service.register(register_request("other", "ada@example.com")).await;
        assert!(matches!(same_email, Err(AppError::ConflictError(_))));

        let same_username = service.register(register_request("ada", "other@example.com")).await;
        assert!(matches!(same_username, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_register_invalid_input_is_rejected() {
        let (service, _, _) = service();
        let mut request = register_request("ada", "ada@example.com");
        request.password = "123".to_string();

        let result = service.register(request).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_login_failures_are_indistinguishable() {
        let (service, _, _) = service();
        service.register(register_request("ada", "ada@example.com")).await.unwrap();

        let wrong_password = service.authenticate(login("ada", "wrong-pass")).await.unwrap_err();
        let unknown_user = service.authenticate(login("nobody", "secret1")).await.unwrap_err();

        assert!(matches!(wrong_password, AppError::AuthenticationError(_)));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
        assert_eq!(wrong_password.to_string(), "Invalid credentials");
    }

    #[actix_web::test]
    async fn test_login_succeeds_with_correct_password() {
        let (service, _, _) = service();
        let created = service.register(register_request("ada", "ada@example.com")).await.unwrap();

        let user = service.authenticate(login("ada", "secret1")).await.unwrap();
        assert_eq!(user.id_string().unwrap(), created.id);
    }

    #[actix_web::test]
    async fn test_partial_update_leaves_other_fields() {
        let (service, _, _) = service();
        let created = service.register(register_request("ada", "ada@example.com")).await.unwrap();

        let update = UpdateUserRequest {
            last_name: Some("Byron".to_string()),
            ..Default::default()
        };
        let updated = service.update_user(&created.id, update).await.unwrap();

        assert_eq!(updated.last_name, "Byron");
        assert_eq!(updated.first_name, created.first_name);
        assert_eq!(updated.email, created.email);
        assert_eq!(updated.username, created.username);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[actix_web::test]
    async fn test_update_password_is_rehashed() {
        let (service, _, _) = service();
        let created = service.register(register_request("ada", "ada@example.com")).await.unwrap();

        let update = UpdateUserRequest {
            password: Some("new-secret".to_string()),
            ..Default::default()
        };
        service.update_user(&created.id, update).await.unwrap();

        assert!(service.authenticate(login("ada", "secret1")).await.is_err());
        assert!(service.authenticate(login("ada", "new-secret")).await.is_ok());
    }

    #[actix_web::test]
    async fn test_update_to_taken_email_conflicts() {
        let (service, _, _) = service();
        service.register(register_request("ada", "ada@example.com")).await.unwrap();
        let grace = service.register(register_request("grace", "grace@example.com")).await.unwrap();

        let update = UpdateUserRequest {
            email: Some("ada@example.com".to_string()),
            ..Default::default()
        };
        let result = service.update_user(&grace.id, update).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_invalid_and_unknown_ids() {
        let (service, _, _) = service();

        assert!(matches!(
            service.get_user("not-an-id").await,
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            service.get_user(&mongodb::bson::oid::ObjectId::new().to_hex()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_soft_delete_hides_user_and_frees_identity() {
        let (service, users, followers) = service();
        let ada = service.register(register_request("ada", "ada@example.com")).await.unwrap();
        let grace = service.register(register_request("grace", "grace@example.com")).await.unwrap();

        let ada_id = parse_user_id(&ada.id).unwrap();
        let grace_id = parse_user_id(&grace.id).unwrap();
        followers.create(Follower::new(ada_id, grace_id)).await.unwrap();
        followers.create(Follower::new(grace_id, ada_id)).await.unwrap();

        service.delete_user(&ada.id).await.unwrap();

        assert!(matches!(service.get_user(&ada.id).await, Err(AppError::NotFound(_))));
        assert_eq!(users.total_rows(), 2);
        assert_eq!(followers.count_followers(&grace_id).await.unwrap(), 0);
        assert_eq!(followers.count_following(&grace_id).await.unwrap(), 0);

        // 삭제된 사용자의 이메일/사용자명은 재사용 가능
        assert!(service.register(register_request("ada", "ada@example.com")).await.is_ok());
    }

    #[actix_web::test]
    async fn test_search_is_case_insensitive_substring() {
        let (service, _, _) = service();
        service.register(register_request("ada", "ada@example.com")).await.unwrap();
        let mut grace = register_request("ghopper", "grace@example.com");
        grace.first_name = "Grace".to_string();
        grace.last_name = "Hopper".to_string();
        service.register(grace).await.unwrap();

        let results = service.search_users("HOP").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].username, "ghopper");

        assert!(service.search_users("  ").await.is_err());
    }

    #[actix_web::test]
    async fn test_search_matches_metacharacters_literally() {
        let (service, _, _) = service();
        let mut dotted = register_request("dotted", "dotted@example.com");
        dotted.first_name = "A.B".to_string();
        service.register(dotted).await.unwrap();
        let mut plain = register_request("plain", "plain@example.com");
        plain.first_name = "Axb".to_string();
        service.register(plain).await.unwrap();

        let results = service.search_users("a.b").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].username, "dotted");
    }

    #[actix_web::test]
    async fn test_batch_lookup_skips_unknown_ids() {
        let (service, _, _) = service();
        let ada = service.register(register_request("ada", "ada@example.com")).await.unwrap();

        let ids = vec![ada.id.clone(), mongodb::bson::oid::ObjectId::new().to_hex()];
        let users = service.get_users_by_ids(&ids).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, ada.id);

        assert!(service.get_users_by_ids(&[]).await.unwrap().is_empty());
    }
}
