//! 애플리케이션 공유 상태
//!
//! 시작 시 한 번 구성되어 HTTP 워커, GraphQL 스키마, gRPC 서버가
//! 참조로 공유합니다. 이후에는 변경되지 않습니다.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::repositories::followers::FollowerRepository;
use crate::repositories::users::UserRepository;
use crate::services::auth::{SessionResolver, TokenService, build_session_resolver};
use crate::services::followers::FollowerService;
use crate::services::users::UserService;

pub struct AppState {
    pub config: AppConfig,
    pub user_service: Arc<UserService>,
    pub follower_service: Arc<FollowerService>,
    pub token_service: Arc<TokenService>,
    pub session_resolver: Arc<dyn SessionResolver>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        user_repo: Arc<dyn UserRepository>,
        follower_repo: Arc<dyn FollowerRepository>,
    ) -> Self {
        let token_service = Arc::new(TokenService::new(&config.jwt_secret));
        let session_resolver = build_session_resolver(config.trust_mode, token_service.clone());

        let user_service = Arc::new(UserService::new(
            user_repo.clone(),
            follower_repo.clone(),
            config.bcrypt_cost,
        ));
        let follower_service = Arc::new(FollowerService::new(user_repo, follower_repo));

        Self {
            config,
            user_service,
            follower_service,
            token_service,
            session_resolver,
        }
    }

    /// 인메모리 리포지토리를 사용하는 테스트용 상태
    #[cfg(test)]
    pub fn for_tests(config: AppConfig) -> Self {
        use crate::repositories::memory::{InMemoryFollowerRepository, InMemoryUserRepository};

        Self::new(
            config,
            Arc::new(InMemoryUserRepository::default()),
            Arc::new(InMemoryFollowerRepository::default()),
        )
    }
}
