//! API 라우트 설정 모듈
//!
//! 원격 호출 표면과 헬스체크 엔드포인트를 등록합니다.
//!
//! - `POST /rpc/UserService/{CreateUser,GetUser,UpdateUser,DeleteUser,ListUsers}`
//! - `GET /health`
//!
//! 핸들러가 사용하는 상태(`UserService`, `Database`, `PgDatabase`)는
//! `main.rs`에서 `web::Data`로 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use log::warn;
use serde_json::json;

use crate::config::TimeoutConfig;
use crate::core::errors::AppResult;
use crate::core::status::Status;
use crate::core::timeout::with_timeout;
use crate::db::{Database, PgDatabase};
use crate::handlers;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// `UserService` 라우트를 설정합니다
///
/// 본문을 JSON으로 해석하지 못한 요청도 `INVALID_ARGUMENT` 상태로 응답합니다.
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        Status::invalid_argument(err.to_string()).into()
    });

    cfg.service(
        web::scope("/rpc/UserService")
            .app_data(json_config)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
            .service(handlers::users::list_users),
    );
}

/// 두 저장소에 ping을 보내 서비스 상태를 확인합니다
///
/// 하나라도 실패하면 `503`과 함께 `degraded`를 반환합니다.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "umanager",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "stores": { "mongodb": "up", "postgres": "up" }
/// }
/// ```
#[get("/health")]
async fn health_check(
    database: web::Data<Database>,
    pg: web::Data<PgDatabase>,
) -> HttpResponse {
    let timeout = TimeoutConfig::repository_timeout();

    let mongodb = with_timeout("health.mongodb", timeout, database.ping()).await;
    let postgres = with_timeout("health.postgres", timeout, pg.ping()).await;

    let healthy = mongodb.is_ok() && postgres.is_ok();

    for (store, result) in [("mongodb", &mongodb), ("postgres", &postgres)] {
        if let Err(e) = result {
            warn!("헬스체크 실패 ({}): {}", store, e);
        }
    }

    let body = json!({
        "status": if healthy { "healthy" } else { "degraded" },
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "stores": {
            "mongodb": store_state(&mongodb),
            "postgres": store_state(&postgres),
        }
    });

    if healthy {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}

fn store_state(result: &AppResult<()>) -> &'static str {
    if result.is_ok() { "up" } else { "down" }
}
