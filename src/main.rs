//! umanager 메인 애플리케이션
//!
//! composition root입니다. 저장소 핸들을 명시적으로 생성해 리포지토리와
//! 서비스에 주입하고, Actix-web 서버가 종료되면 핸들을 해제합니다.

use std::io;
use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use umanager::config::{Environment, ServerConfig, TimeoutConfig};
use umanager::core::errors::AppError;
use umanager::db::{Database, PgDatabase};
use umanager::repositories::links::MongoLinkRepository;
use umanager::repositories::users::PgUserRepository;
use umanager::routes::configure_all_routes;
use umanager::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let env_file = load_env_file();
    init_logging();

    match env_file {
        Ok(name) => info!("{} 파일 로드 됨", name),
        Err(e) => error!("환경 파일 로드 실패: {}", e),
    }

    info!("🚀 umanager 시작중... ({:?})", Environment::current());

    let (database, pg) = initialize_data_stores().await.map_err(startup_error)?;

    let repository_timeout = TimeoutConfig::repository_timeout();
    let links = MongoLinkRepository::new(&database, repository_timeout);
    links.create_indexes().await.map_err(startup_error)?;

    let users = Arc::new(PgUserRepository::new(pg.pool().clone(), repository_timeout));
    let user_service = web::Data::new(UserService::new(users, TimeoutConfig::rpc_timeout()));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    let result = start_http_server(user_service, database.clone(), pg.clone()).await;

    // 서버 종료 후 저장소 핸들 해제
    pg.close().await;
    database.shutdown().await;

    info!("👋 umanager 종료");
    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    user_service: web::Data<UserService>,
    database: Database,
    pg: PgDatabase,
) -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 RPC: http://{}/rpc/UserService/{{Method}}", bind_address);

    let database = web::Data::new(database);
    let pg = web::Data::new(pg);

    HttpServer::new(move || {
        App::new()
            .app_data(user_service.clone())
            .app_data(database.clone())
            .app_data(pg.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거보다 먼저 호출되므로 결과는 반환만 하고 로깅은 호출자가 합니다.
fn load_env_file() -> Result<&'static str, dotenv::Error> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 `info,actix_web=info`를 사용합니다.
///
/// ```bash
/// RUST_LOG=umanager::repositories=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// MongoDB와 PostgreSQL 연결을 초기화하고 users 스키마를 준비합니다
async fn initialize_data_stores() -> Result<(Database, PgDatabase), AppError> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new().await?;
    let pg = PgDatabase::new().await?;
    pg.ensure_schema().await?;

    Ok((database, pg))
}

fn startup_error(err: AppError) -> io::Error {
    error!("❌ 초기화 실패: {}", err);
    io::Error::other(err)
}
