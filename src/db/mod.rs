//! Database Connection Management Module
//!
//! 두 저장소의 연결 핸들을 관리합니다.
//!
//! - [`Database`]: 링크(북마크)를 저장하는 MongoDB 문서 저장소
//! - [`PgDatabase`]: 사용자를 저장하는 PostgreSQL 관계형 저장소
//!
//! 두 핸들은 전역 변수가 아니라 `main.rs`에서 명시적으로 생성되어
//! 리포지토리에 주입되며, 서버 종료 시 `shutdown`/`close`로 해제됩니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::{Database, PgDatabase};
//!
//! let database = Database::new().await?;
//! let pg = PgDatabase::new().await?;
//! // ... 서버 실행 ...
//! pg.close().await;
//! database.shutdown().await;
//! ```

pub mod postgres;

pub use postgres::PgDatabase;

use log::info;
use mongodb::{bson::doc, options::ClientOptions, Client};

use crate::config::MongoConfig;
use crate::core::errors::{AppError, AppResult};

/// MongoDB 데이터베이스 연결 래퍼
///
/// 클라이언트는 내부적으로 커넥션 풀을 가지므로 clone 비용이 낮습니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 설정(`MONGODB_URI`, `DATABASE_NAME`)으로 새 연결을 생성합니다.
    pub async fn new() -> AppResult<Self> {
        Self::connect(&MongoConfig::uri(), &MongoConfig::database_name()).await
    }

    /// 주어진 URI와 데이터베이스 이름으로 연결하고 ping으로 검증합니다.
    pub async fn connect(uri: &str, database_name: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::database("parse mongodb uri", e))?;

        client_options.app_name = Some("umanager".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::database("create mongodb client", e))?;

        let database = Self {
            client,
            database_name: database_name.to_string(),
        };
        database.ping().await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(database)
    }

    /// `ping` 명령으로 연결 상태를 확인합니다.
    pub async fn ping(&self) -> AppResult<()> {
        self.get_database()
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|e| AppError::database("mongodb ping", e))
    }

    /// 리포지토리가 컬렉션에 접근할 때 사용하는 `mongodb::Database`를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// 진행 중인 작업을 마무리하고 클라이언트 리소스를 해제합니다.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("MongoDB 연결 종료");
    }
}
