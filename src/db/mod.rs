//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 드라이버가 내부적으로 연결 풀을 관리하므로 `Database`는 복제해서 공유합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::connect(&config.database_url, &config.database_name).await?;
//! let users = database.get_database().collection::<User>("users");
//! ```

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::errors::{AppResult, ErrorContext};

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 연결 직후 `ping` 명령으로 연결 상태를 검증합니다.
    pub async fn connect(uri: &str, database_name: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .context("DATABASE_URL 파싱 실패")?;

        // 모니터링 도구에서 식별할 수 있도록 애플리케이션 이름 설정
        client_options.app_name = Some("users_api".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .with_context(|| format!("MongoDB ping 실패 ({})", database_name))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
