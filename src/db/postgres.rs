//! PostgreSQL 커넥션 풀 관리

use log::info;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::PostgresConfig;
use crate::core::errors::{AppError, AppResult};

/// users 테이블 부트스트랩 DDL
///
/// 버전 관리되는 마이그레이션이 아니라 빈 데이터베이스에서 서비스를
/// 바로 띄우기 위한 최소 스키마입니다.
const USERS_TABLE_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id         UUID PRIMARY KEY,
        username   TEXT NOT NULL UNIQUE,
        password   TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )
"#;

/// PostgreSQL 커넥션 풀 래퍼
#[derive(Clone)]
pub struct PgDatabase {
    pool: PgPool,
}

impl PgDatabase {
    /// 설정(`DATABASE_URL`, `PG_MAX_CONNECTIONS`)으로 풀을 생성합니다.
    pub async fn new() -> AppResult<Self> {
        Self::connect(&PostgresConfig::url(), PostgresConfig::max_connections()).await
    }

    pub async fn connect(url: &str, max_connections: u32) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| AppError::database("connect postgres", e))?;

        info!("✅ PostgreSQL 연결 성공 (max_connections={})", max_connections);

        Ok(Self { pool })
    }

    /// users 테이블이 없으면 생성합니다.
    pub async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::query(USERS_TABLE_DDL)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database("create users table", e))?;
        Ok(())
    }

    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| AppError::database("postgres ping", e))
    }

    /// 리포지토리에 주입할 풀을 반환합니다. `PgPool`은 clone 비용이 낮습니다.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// 모든 커넥션을 닫습니다. 이후의 acquire는 실패합니다.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("PostgreSQL 풀 종료");
    }
}
