//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 인증, 사용자, 팔로워 라우트와 GraphQL, 헬스체크 엔드포인트를 포함합니다.
//!
//! # Auth Middleware Usage
//!
//! 라우트에 따라 다른 인증 레벨을 적용합니다:
//!
//! ```rust,ignore
//! // 세션 필수: 쿠키가 없거나 유효하지 않으면 401
//! web::scope("/api/users").wrap(AuthMiddleware::required())
//!
//! // 세션 선택: 있으면 사용자 정보를 넣고, 없어도 통과
//! web::resource("/graphql").wrap(AuthMiddleware::optional())
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! let state = web::Data::new(AppState::new(config, user_repo, follower_repo));
//! let app = App::new().configure(configure_app(state));
//! ```

use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::errors::AppError;
use crate::graphql::build_schema;
use crate::handlers;
use crate::middlewares::AuthMiddleware;
use crate::state::AppState;

/// 라우트 테스트용 앱을 구성합니다. `(service, state)`를 반환합니다.
#[cfg(test)]
#[macro_export]
macro_rules! test_app {
    () => {
        $crate::test_app!($crate::config::AppConfig::for_tests())
    };
    ($config:expr) => {{
        let state = ::actix_web::web::Data::new($crate::state::AppState::for_tests($config));
        let app = ::actix_web::test::init_service(
            ::actix_web::App::new().configure($crate::routes::configure_app(state.clone())),
        )
        .await;
        (app, state)
    }};
}

/// 공유 상태, GraphQL 스키마, 추출자 설정과 모든 라우트를 등록합니다.
pub fn configure_app(state: web::Data<AppState>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        let schema = build_schema(state.user_service.clone(), state.follower_service.clone());

        cfg.app_data(state)
            .app_data(web::Data::new(schema))
            .app_data(json_config())
            .app_data(query_config());

        configure_all_routes(cfg);
    }
}

/// 잘못된 JSON 본문을 `{"error": ...}` 400 응답으로 바꿉니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_user_routes(cfg);
    configure_follower_routes(cfg);
    configure_graphql_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// - `POST /api/auth/register` - 회원가입 (Public)
/// - `POST /api/auth/login` - 로그인, `auth_token` 쿠키 발급 (Public)
/// - `POST /api/auth/logout` - 쿠키 삭제 (Public)
/// - `GET /api/auth/me` - 현재 사용자 (세션 필요)
///
/// ```bash
/// curl -X POST http://localhost:3001/api/auth/login \
///   -H "Content-Type: application/json" \
///   -c cookies.txt \
///   -d '{"username":"ada","password":"secret1"}'
///
/// curl -b cookies.txt http://localhost:3001/api/auth/me
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::logout)
            // 세션이 필요한 라우트는 마지막에 등록
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::auth::me),
            ),
    );
}

/// 사용자 관련 라우트를 설정합니다. 모두 세션이 필요합니다.
///
/// 고정 경로는 `/{user_id}`보다 먼저 등록해야 합니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::list_users)
            .service(handlers::users::search_users)
            .service(handlers::users::get_user_by_username)
            .service(handlers::users::get_user_by_email)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

fn configure_follower_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/followers")
            .wrap(AuthMiddleware::required())
            .service(handlers::followers::follow)
            .service(handlers::followers::unfollow)
            .service(handlers::followers::my_followers)
            .service(handlers::followers::my_following),
    );
}

fn configure_graphql_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/graphql")
            .wrap(AuthMiddleware::optional())
            .route(web::post().to(handlers::graphql::graphql_handler)),
    )
    .service(web::resource("/playground").route(web::get().to(handlers::graphql::playground)));
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:3001/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "OK",
///   "message": "Users API is running",
///   "version": "0.1.0",
///   "timestamp": "2025-01-01T00:00:00+00:00"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "OK",
        "message": "Users API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
