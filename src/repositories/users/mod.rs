//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`] trait이 계약이고, 구현체는 두 가지입니다.
//!
//! - [`PgUserRepository`](user_repo::PgUserRepository): PostgreSQL `users` 테이블
//! - [`InMemoryUserRepository`](memory::InMemoryUserRepository): 테스트 더블
//!
//! 핸들러와 테스트는 구체 타입이 아니라 `Arc<dyn UserRepository>`에 의존합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let repo: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool, timeout));
//! let stored = repo.upsert(NewUser::new(id, "alice", "x")).await?;
//! let found = repo.find_by_id(id).await?;
//! ```

pub mod memory;
pub mod user_repo;

pub use memory::InMemoryUserRepository;
pub use user_repo::PgUserRepository;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::errors::AppResult;
use crate::domain::entities::users::{NewUser, User};

/// 사용자 리포지토리 계약
///
/// 모든 메서드는 구현체에 설정된 timeout 안에서 수행되며, 실패는
/// [`ErrorKind`](crate::core::errors::ErrorKind) 하나로 분류된 [`AppError`](crate::core::errors::AppError)로 반환됩니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// id 기준 insert-or-replace
    ///
    /// - 행이 없으면 `created_at = updated_at = now`로 삽입
    /// - 행이 있으면 username, password, `updated_at = now`를 교체하고 `created_at` 유지
    ///
    /// 저장된 레코드를 반환합니다. id 충돌은 흡수되므로 `Conflict`를 반환하지 않으며,
    /// 모든 저장소 실패는 `Internal`입니다.
    async fn upsert(&self, user: NewUser) -> AppResult<User>;

    /// create-only 삽입
    ///
    /// id 또는 username이 이미 존재하면 `Conflict`를 반환합니다.
    async fn insert(&self, user: NewUser) -> AppResult<User>;

    /// id로 조회. 없으면 `NotFound`.
    async fn find_by_id(&self, id: Uuid) -> AppResult<User>;

    /// username으로 조회. 없으면 `NotFound`.
    async fn find_by_username(&self, username: &str) -> AppResult<User>;

    /// 모든 사용자를 `created_at ASC, id ASC` 순서로 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// id로 삭제합니다. 존재하지 않는 id도 성공입니다 (멱등 삭제).
    async fn delete_by_id(&self, id: Uuid) -> AppResult<()>;
}
