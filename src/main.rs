//! 사용자 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버와 tonic gRPC 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB 연결을 설정하고 쿠키 세션 기반의 REST / GraphQL API를 제공합니다.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use users_service_backend::config::AppConfig;
use users_service_backend::db::Database;
use users_service_backend::grpc;
use users_service_backend::repositories::followers::MongoFollowerRepository;
use users_service_backend::repositories::users::MongoUserRepository;
use users_service_backend::routes::configure_app;
use users_service_backend::state::AppState;
use users_service_backend::utils::display_terminal;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    display_terminal::print_boxed_title("👥 USERS API");

    display_terminal::print_step_start(1, "설정 로드");
    let config = AppConfig::from_env().map_err(|e| {
        error!("설정 로드 실패: {}", e);
        std::io::Error::other(e)
    })?;
    info!("🔐 인증 신뢰 모드: {}", config.trust_mode.as_str());
    display_terminal::print_step_complete(1, "설정 로드");

    // 데이터 스토어 및 서비스 초기화
    display_terminal::print_step_start(2, "데이터베이스 연결");
    let state = initialize_state(config).await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        std::io::Error::other(e)
    })?;
    display_terminal::print_step_complete(2, "데이터베이스 연결");

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    let state = web::Data::new(state);

    // gRPC 서버는 같은 런타임에서 별도 포트로 실행
    display_terminal::print_step_start(3, "gRPC 서버 시작");
    let (grpc_addr, incoming) = grpc::bind(grpc_address(&state.config)?).await.map_err(|e| {
        error!("gRPC 포트 바인딩 실패: {}", e);
        e
    })?;
    info!("📡 gRPC 서버 시작: {}", grpc_addr);
    let user_service = state.user_service.clone();
    actix_web::rt::spawn(async move {
        if let Err(e) = grpc::serve(incoming, user_service).await {
            error!("gRPC 서버 종료: {}", e);
        }
    });
    display_terminal::print_step_complete(3, "gRPC 서버 시작");

    // HTTP 서버 시작
    start_http_server(state, grpc_addr).await
}

/// MongoDB에 연결하고 인덱스를 만든 뒤 공유 상태를 구성합니다
async fn initialize_state(config: AppConfig) -> users_service_backend::errors::AppResult<AppState> {
    info!("📡 데이터베이스 연결 중...");
    let database = Database::connect(&config.database_url, &config.database_name).await?;
    display_terminal::print_sub_task("database", database.database_name());

    let user_repo = MongoUserRepository::new(&database);
    let follower_repo = MongoFollowerRepository::new(&database);

    user_repo.create_indexes().await?;
    display_terminal::print_sub_task("users indexes", "OK");
    follower_repo.create_indexes().await?;
    display_terminal::print_sub_task("followers indexes", "OK");

    Ok(AppState::new(config, Arc::new(user_repo), Arc::new(follower_repo)))
}

fn grpc_address(config: &AppConfig) -> std::io::Result<SocketAddr> {
    format!("{}:{}", config.host, config.grpc_port)
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(state: web::Data<AppState>, grpc_addr: SocketAddr) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", state.config.host, state.config.port);

    // Rate Limiting 설정
    let rate_limit = state.config.rate_limit.clone();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "RATE_LIMIT_PER_SECOND와 RATE_LIMIT_BURST_SIZE는 0보다 커야 합니다",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second, rate_limit.burst_size
    );

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    display_terminal::print_endpoints_summary(
        &bind_address,
        &grpc_addr.to_string(),
        state.session_resolver.mode().as_str(),
    );

    let cors_origins = state.config.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 공유 상태와 라우트 설정
            .configure(configure_app(state.clone()))
    })
    .bind(bind_address)?
    .workers(4) // 워커 스레드 수
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 표준 출력으로 남깁니다
    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => println!("Current profile: {} ({} 로드 됨)", profile, file),
        Err(e) => println!("Current profile: {} (env 파일 없음: {})", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 쿠키 세션을 사용하므로 허용 Origin을 명시하고 자격 증명을 허용합니다.
fn configure_cors(origins: &[String]) -> Cors {
    let cors = origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // 자격 증명(쿠키 등) 지원
        .supports_credentials()
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
