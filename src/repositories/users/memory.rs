//! 인메모리 사용자 리포지토리 (테스트 더블)
//!
//! PostgreSQL 구현과 같은 의미론(upsert, 멱등 삭제, username 유니크,
//! 정렬 순서, timeout)을 HashMap 위에서 재현합니다.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use super::UserRepository;
use crate::config::TimeoutConfig;
use crate::core::errors::{AppError, AppResult};
use crate::core::timeout::with_timeout;
use crate::domain::entities::server_timestamp;
use crate::domain::entities::users::{NewUser, User};

#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
    timeout: Duration,
    latency: Duration,
    calls: AtomicUsize,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new(Duration::from_millis(
            TimeoutConfig::DEFAULT_REPOSITORY_TIMEOUT_MS,
        ))
    }
}

impl InMemoryUserRepository {
    pub fn new(timeout: Duration) -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            timeout,
            latency: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    /// 모든 호출 앞에 인위적인 지연을 넣습니다 (timeout 테스트용).
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// 지금까지 리포지토리 메서드가 호출된 횟수
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn scoped<T, F>(&self, operation: &'static str, op: F) -> AppResult<T>
    where
        F: FnOnce(&RwLock<HashMap<Uuid, User>>) -> AppResult<T> + Send,
        T: Send,
    {
        self.calls.fetch_add(1, Ordering::SeqCst);
        with_timeout(operation, self.timeout, async {
            if !self.latency.is_zero() {
                tokio::time::sleep(self.latency).await;
            }
            op(&self.users)
        })
        .await
    }
}

fn poisoned() -> AppError {
    AppError::InternalError("in-memory user store lock poisoned".to_string())
}

fn username_taken(users: &HashMap<Uuid, User>, username: &str, except: Uuid) -> bool {
    users
        .values()
        .any(|existing| existing.username == username && existing.id != except)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn upsert(&self, user: NewUser) -> AppResult<User> {
        self.scoped("users.upsert", move |users| {
            let mut users = users.write().map_err(|_| poisoned())?;
            if username_taken(&users, &user.username, user.id) {
                return Err(AppError::database(
                    "upsert user",
                    format!("duplicate key value violates unique constraint on username {}", user.username),
                ));
            }

            let now = server_timestamp();
            let stored = match users.get(&user.id) {
                Some(existing) => User {
                    id: user.id,
                    username: user.username,
                    password: user.password,
                    created_at: existing.created_at,
                    updated_at: now.max(existing.created_at),
                },
                None => user.into_user(now),
            };

            users.insert(stored.id, stored.clone());
            Ok(stored)
        })
        .await
    }

    async fn insert(&self, user: NewUser) -> AppResult<User> {
        self.scoped("users.insert", move |users| {
            let mut users = users.write().map_err(|_| poisoned())?;
            if users.contains_key(&user.id) {
                return Err(AppError::ConflictError(format!("user {} already exists", user.id)));
            }
            if username_taken(&users, &user.username, user.id) {
                return Err(AppError::ConflictError(format!(
                    "username {} already exists",
                    user.username
                )));
            }

            let stored = user.into_user(server_timestamp());
            users.insert(stored.id, stored.clone());
            Ok(stored)
        })
        .await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<User> {
        self.scoped("users.find_by_id", move |users| {
            users
                .read()
                .map_err(|_| poisoned())?
                .get(&id)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("user {}", id)))
        })
        .await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<User> {
        let username = username.to_string();
        self.scoped("users.find_by_username", move |users| {
            users
                .read()
                .map_err(|_| poisoned())?
                .values()
                .find(|user| user.username == username)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("user with username {}", username)))
        })
        .await
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.scoped("users.find_all", |users| {
            let mut all: Vec<User> = users
                .read()
                .map_err(|_| poisoned())?
                .values()
                .cloned()
                .collect();
            all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
            Ok(all)
        })
        .await
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        self.scoped("users.delete_by_id", move |users| {
            users.write().map_err(|_| poisoned())?.remove(&id);
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorKind;
    use crate::core::status::{Code, Status};

    fn repo() -> InMemoryUserRepository {
        InMemoryUserRepository::new(Duration::from_secs(1))
    }

    #[tokio::test]
    async fn test_upsert_then_find_round_trip() {
        let repo = repo();
        let id = Uuid::new_v4();

        let stored = repo.upsert(NewUser::new(id, "alice", "secret")).await.unwrap();
        let found = repo.find_by_id(id).await.unwrap();

        assert_eq!(found, stored);
        assert_eq!(found.id, id);
        assert_eq!(found.username, "alice");
        assert_eq!(found.password, "secret");
        assert!(found.updated_at >= found.created_at);
    }

    #[tokio::test]
    async fn test_second_upsert_preserves_created_at() {
        let repo = repo();
        let id = Uuid::new_v4();

        let first = repo.upsert(NewUser::new(id, "alice", "x")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(2)).await;
        let second = repo.upsert(NewUser::new(id, "alice2", "y")).await.unwrap();

        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(second.username, "alice2");
        assert_eq!(repo.find_by_id(id).await.unwrap(), second);
    }

    #[tokio::test]
    async fn test_upsert_never_reports_conflict() {
        let repo = repo();
        repo.upsert(NewUser::new(Uuid::new_v4(), "alice", "x")).await.unwrap();

        let error = repo
            .upsert(NewUser::new(Uuid::new_v4(), "alice", "y"))
            .await
            .unwrap_err();

        assert!(error.is(ErrorKind::Internal));
    }

    #[tokio::test]
    async fn test_insert_is_create_only() {
        let repo = repo();
        let id = Uuid::new_v4();
        repo.insert(NewUser::new(id, "alice", "x")).await.unwrap();

        let same_id = repo.insert(NewUser::new(id, "bob", "x")).await.unwrap_err();
        assert!(same_id.is(ErrorKind::Conflict));
        assert_eq!(Status::from(same_id).code, Code::AlreadyExists);

        let same_name = repo
            .insert(NewUser::new(Uuid::new_v4(), "alice", "x"))
            .await
            .unwrap_err();
        assert!(same_name.is(ErrorKind::Conflict));
    }

    #[tokio::test]
    async fn test_missing_user_is_not_found() {
        let repo = repo();

        let by_id = repo.find_by_id(Uuid::new_v4()).await.unwrap_err();
        let by_name = repo.find_by_username("ghost").await.unwrap_err();

        assert!(by_id.is(ErrorKind::NotFound));
        assert!(by_name.is(ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn test_find_by_username() {
        let repo = repo();
        let id = Uuid::new_v4();
        repo.upsert(NewUser::new(id, "carol", "x")).await.unwrap();

        assert_eq!(repo.find_by_username("carol").await.unwrap().id, id);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = repo();
        let id = Uuid::new_v4();
        repo.upsert(NewUser::new(id, "dave", "x")).await.unwrap();

        repo.delete_by_id(id).await.unwrap();
        repo.delete_by_id(id).await.unwrap();
        repo.delete_by_id(Uuid::new_v4()).await.unwrap();

        assert!(repo.find_by_id(id).await.unwrap_err().is(ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn test_find_all_orders_by_creation() {
        let repo = repo();
        assert!(repo.find_all().await.unwrap().is_empty());

        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        repo.upsert(NewUser::new(first, "first", "x")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(2)).await;
        repo.upsert(NewUser::new(second, "second", "x")).await.unwrap();

        let ids: Vec<Uuid> = repo.find_all().await.unwrap().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[tokio::test]
    async fn test_slow_store_times_out() {
        let repo = InMemoryUserRepository::new(Duration::from_millis(10))
            .with_latency(Duration::from_millis(200));

        let error = repo.find_by_id(Uuid::new_v4()).await.unwrap_err();

        assert!(error.is_timeout());
        assert!(error.is(ErrorKind::Internal));
        assert_eq!(repo.calls(), 1);
    }
}
