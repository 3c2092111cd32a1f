//! # User RPC HTTP Handlers
//!
//! `UserService`의 원격 호출 표면을 actix-web 라우트로 노출합니다.
//! 모든 메서드는 `POST /rpc/UserService/{Method}` 형태이며 JSON 본문을 주고받습니다.
//!
//! | 메서드 | 요청 | 응답 |
//! |--------|------|------|
//! | `CreateUser` | `{id, username, password}` | `{}` |
//! | `GetUser` | `{id}` | `{id, username, password, created_at, updated_at}` |
//! | `UpdateUser` | `{id, username, password}` | `{}` |
//! | `DeleteUser` | `{id}` | `{}` |
//! | `ListUsers` | 없음 또는 `{}` | `{users: [...]}` |
//!
//! 실패는 [`Status`]가 `ResponseError`로 변환합니다.
//!
//! ```bash
//! curl -X POST http://localhost:8080/rpc/UserService/GetUser \
//!   -H "Content-Type: application/json" \
//!   -d '{"id":"3fa85f64-5717-4562-b3fc-2c963f66afa6"}'
//! ```

use actix_web::{post, web, HttpResponse};

use crate::core::status::Status;
use crate::domain::dto::users::request::{
    CreateUserRequest, DeleteUserRequest, Empty, GetUserRequest, UpdateUserRequest,
};
use crate::services::users::UserService;

#[post("/CreateUser")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, Status> {
    let reply = service.create_user(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(reply))
}

#[post("/GetUser")]
pub async fn get_user(
    service: web::Data<UserService>,
    payload: web::Json<GetUserRequest>,
) -> Result<HttpResponse, Status> {
    let user = service.get_user(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// 존재하지 않는 id도 생성됩니다 (upsert).
#[post("/UpdateUser")]
pub async fn update_user(
    service: web::Data<UserService>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, Status> {
    let reply = service.update_user(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(reply))
}

#[post("/DeleteUser")]
pub async fn delete_user(
    service: web::Data<UserService>,
    payload: web::Json<DeleteUserRequest>,
) -> Result<HttpResponse, Status> {
    let reply = service.delete_user(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(reply))
}

/// 본문은 생략할 수 있습니다. 본문이 있으면 JSON `Empty`로 해석되어야 합니다.
#[post("/ListUsers")]
pub async fn list_users(
    service: web::Data<UserService>,
    body: web::Bytes,
) -> Result<HttpResponse, Status> {
    let request = parse_optional_body(&body)?;
    let reply = service.list_users(request).await?;
    Ok(HttpResponse::Ok().json(reply))
}

fn parse_optional_body(body: &[u8]) -> Result<Empty, Status> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Empty::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| Status::invalid_argument(format!("Json deserialize error: {}", e)))
}
