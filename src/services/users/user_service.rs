//! # 사용자 RPC 서비스
//!
//! 원격 호출 요청을 [`UserRepository`] 호출로, 리포지토리 결과와 에러를
//! 응답 메시지와 [`Status`]로 변환합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! 요청 → id 파싱 (실패 시 INVALID_ARGUMENT, 리포지토리 미호출)
//!      → validator 검증
//!      → with_timeout(rpc_timeout, repository 호출)
//!      → ErrorKind → Code 변환
//! ```
//!
//! ## 현재 동작
//!
//! - `CreateUser`와 `UpdateUser`는 같은 upsert 경로를 사용합니다. 이미 존재하는
//!   id로 `CreateUser`를 호출하면 `ALREADY_EXISTS` 대신 갱신으로 성공합니다.
//!   존재하지 않는 id로 `UpdateUser`를 호출하면 새로 생성됩니다.
//! - `DeleteUser`는 존재하지 않는 id에도 성공하며, 모든 리포지토리 에러는
//!   `INTERNAL`로 보고됩니다.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info};
use uuid::Uuid;
use validator::Validate;

use crate::core::errors::{AppError, AppResult, ErrorKind};
use crate::core::status::{Code, Status};
use crate::core::timeout::with_timeout;
use crate::domain::dto::users::request::{
    CreateUserRequest, DeleteUserRequest, Empty, GetUserRequest, UpdateUserRequest,
};
use crate::domain::dto::users::response::{ListUsersResponse, UserResponse};
use crate::domain::entities::users::NewUser;
use crate::repositories::users::UserRepository;

/// 사용자 RPC 서비스
///
/// 리포지토리는 생성자로 주입되며, 호출마다 `timeout` 예산이 적용됩니다.
pub struct UserService {
    users: Arc<dyn UserRepository>,
    timeout: Duration,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, timeout: Duration) -> Self {
        Self { users, timeout }
    }

    /// `CreateUser(id, username, password) → Empty`
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<Empty, Status> {
        let id = parse_id(&request.id)?;
        validate(&request)?;

        let user = self
            .call("CreateUser", self.users.upsert(NewUser::new(id, request.username, request.password)))
            .await?;

        info!("✅ 사용자 저장 완료: {} ({})", user.id, user.username);
        Ok(Empty::default())
    }

    /// `GetUser(id) → User`
    pub async fn get_user(&self, request: GetUserRequest) -> Result<UserResponse, Status> {
        let id = parse_id(&request.id)?;

        let user = self.call("GetUser", self.users.find_by_id(id)).await?;
        Ok(UserResponse::from(user))
    }

    /// `UpdateUser(id, username, password) → Empty`
    ///
    /// 존재하지 않는 id도 생성됩니다.
    pub async fn update_user(&self, request: UpdateUserRequest) -> Result<Empty, Status> {
        let id = parse_id(&request.id)?;
        validate(&request)?;

        let user = self
            .call("UpdateUser", self.users.upsert(NewUser::new(id, request.username, request.password)))
            .await?;

        info!("✅ 사용자 갱신 완료: {}", user.id);
        Ok(Empty::default())
    }

    /// `DeleteUser(id) → Empty`
    pub async fn delete_user(&self, request: DeleteUserRequest) -> Result<Empty, Status> {
        let id = parse_id(&request.id)?;

        self.call("DeleteUser", self.users.delete_by_id(id))
            .await
            .map_err(|status| match status.code {
                Code::Internal => status,
                _ => Status::internal(status.message),
            })?;

        info!("🗑️ 사용자 삭제 요청 처리: {}", id);
        Ok(Empty::default())
    }

    /// `ListUsers(Empty) → {users}`
    pub async fn list_users(&self, _request: Empty) -> Result<ListUsersResponse, Status> {
        let users = self.call("ListUsers", self.users.find_all()).await?;

        Ok(ListUsersResponse {
            users: users.into_iter().map(UserResponse::from).collect(),
        })
    }

    async fn call<T, F>(&self, method: &'static str, future: F) -> Result<T, Status>
    where
        F: Future<Output = AppResult<T>>,
    {
        with_timeout(method, self.timeout, future)
            .await
            .map_err(|e| to_status(method, e))
    }
}

fn parse_id(raw: &str) -> Result<Uuid, Status> {
    Uuid::parse_str(raw).map_err(|e| {
        debug!("잘못된 사용자 id {:?}: {}", raw, e);
        Status::invalid_argument(format!("invalid user id {:?}: {}", raw, e))
    })
}

fn validate<T: Validate>(request: &T) -> Result<(), Status> {
    request
        .validate()
        .map_err(|e| Status::invalid_argument(e.to_string()))
}

/// 리포지토리 에러를 상태로 변환합니다.
///
/// `Conflict`와 `NotFound`만 고유 코드를 유지하고 나머지는 모두 `INTERNAL`입니다.
/// `INVALID_ARGUMENT`는 [`parse_id`]와 [`validate`]만 생성합니다.
fn to_status(method: &'static str, err: AppError) -> Status {
    let code = match err.kind() {
        ErrorKind::Conflict => Code::AlreadyExists,
        ErrorKind::NotFound => Code::NotFound,
        ErrorKind::InvalidArgument | ErrorKind::Internal => Code::Internal,
    };

    match code {
        Code::Internal => error!("{} 실패: {}", method, err),
        _ => debug!("{} 거부: {}", method, err),
    }
    Status::new(code, err.to_string())
}
