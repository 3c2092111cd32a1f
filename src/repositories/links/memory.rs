//! 인메모리 링크 리포지토리 (테스트 더블)
//!
//! 삽입 순서를 저장소의 반환 순서로 사용합니다.

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use super::LinkRepository;
use crate::config::TimeoutConfig;
use crate::core::errors::{AppError, AppResult};
use crate::core::timeout::with_timeout;
use crate::domain::entities::links::{Link, LinkCriteria, NewLink};
use crate::domain::entities::server_timestamp;

#[derive(Debug)]
pub struct InMemoryLinkRepository {
    links: RwLock<Vec<Link>>,
    timeout: Duration,
    latency: Duration,
}

impl Default for InMemoryLinkRepository {
    fn default() -> Self {
        Self::new(Duration::from_millis(
            TimeoutConfig::DEFAULT_REPOSITORY_TIMEOUT_MS,
        ))
    }
}

impl InMemoryLinkRepository {
    pub fn new(timeout: Duration) -> Self {
        Self {
            links: RwLock::new(Vec::new()),
            timeout,
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn scoped<T, F>(&self, operation: &'static str, op: F) -> AppResult<T>
    where
        F: FnOnce(&RwLock<Vec<Link>>) -> AppResult<T> + Send,
        T: Send,
    {
        with_timeout(operation, self.timeout, async {
            if !self.latency.is_zero() {
                tokio::time::sleep(self.latency).await;
            }
            op(&self.links)
        })
        .await
    }
}

fn poisoned() -> AppError {
    AppError::InternalError("in-memory link store lock poisoned".to_string())
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, link: NewLink) -> AppResult<Link> {
        self.scoped("links.create", move |links| {
            let link = link.into_link(server_timestamp());
            links.write().map_err(|_| poisoned())?.push(link.clone());
            Ok(link)
        })
        .await
    }

    async fn find_by_owner_and_url(&self, url: &str, user_id: Uuid) -> AppResult<Link> {
        let url = url.to_string();
        self.scoped("links.find_by_owner_and_url", move |links| {
            links
                .read()
                .map_err(|_| poisoned())?
                .iter()
                .find(|link| link.url == url && link.user_id == user_id)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("link {} for user {}", url, user_id)))
        })
        .await
    }

    async fn find_by_criteria(&self, criteria: &LinkCriteria) -> AppResult<Vec<Link>> {
        let criteria = criteria.clone();
        self.scoped("links.find_by_criteria", move |links| {
            let offset = criteria.offset.unwrap_or(0);
            let limit = criteria.limit.unwrap_or(u64::MAX);

            Ok(links
                .read()
                .map_err(|_| poisoned())?
                .iter()
                .filter(|link| criteria.matches(link))
                .skip(usize::try_from(offset).unwrap_or(usize::MAX))
                .take(usize::try_from(limit).unwrap_or(usize::MAX))
                .cloned()
                .collect())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorKind;

    async fn seeded() -> (InMemoryLinkRepository, Uuid, Uuid) {
        let repo = InMemoryLinkRepository::new(Duration::from_secs(1));
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let fixtures = [
            (alice, "https://go.dev", vec!["go"]),
            (alice, "https://rust-lang.org", vec!["rust", "lang"]),
            (bob, "https://gobyexample.com", vec!["go", "tutorial"]),
            (bob, "https://docs.rs", vec!["rust"]),
            (alice, "https://example.com", vec![]),
        ];
        for (owner, url, tags) in fixtures {
            repo.create(NewLink::new(Uuid::new_v4(), owner, url, url).with_tags(tags))
                .await
                .unwrap();
        }

        (repo, alice, bob)
    }

    fn urls(links: &[Link]) -> Vec<&str> {
        links.iter().map(|link| link.url.as_str()).collect()
    }

    #[tokio::test]
    async fn test_create_assigns_equal_timestamps() {
        let repo = InMemoryLinkRepository::default();
        let owner = Uuid::new_v4();

        let link = repo
            .create(
                NewLink::new(Uuid::new_v4(), owner, "Rust", "https://rust-lang.org")
                    .with_images(["logo.png"]),
            )
            .await
            .unwrap();

        assert_eq!(link.created_at, link.updated_at);
        assert!(link.images.contains("logo.png"));
    }

    #[tokio::test]
    async fn test_create_does_not_deduplicate() {
        let repo = InMemoryLinkRepository::default();
        let owner = Uuid::new_v4();

        for _ in 0..2 {
            repo.create(NewLink::new(Uuid::new_v4(), owner, "dup", "https://dup.example"))
                .await
                .unwrap();
        }

        let all = repo.find_by_criteria(&LinkCriteria::new().user(owner)).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_find_by_owner_and_url() {
        let (repo, alice, bob) = seeded().await;

        let found = repo.find_by_owner_and_url("https://go.dev", alice).await.unwrap();
        assert_eq!(found.user_id, alice);

        let missing = repo.find_by_owner_and_url("https://go.dev", bob).await.unwrap_err();
        assert!(missing.is(ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn test_empty_criteria_returns_everything() {
        let (repo, _, _) = seeded().await;
        let all = repo.find_by_criteria(&LinkCriteria::new()).await.unwrap();
        assert_eq!(all.len(), 5);
    }

    #[tokio::test]
    async fn test_tag_filter_returns_links_containing_tag() {
        let (repo, _, _) = seeded().await;

        let go = repo.find_by_criteria(&LinkCriteria::new().tags(["go"])).await.unwrap();

        assert_eq!(urls(&go), vec!["https://go.dev", "https://gobyexample.com"]);
        assert!(go.iter().all(|link| link.tags.contains("go")));
    }

    #[tokio::test]
    async fn test_user_and_tag_filters_combine() {
        let (repo, _, bob) = seeded().await;

        let links = repo
            .find_by_criteria(&LinkCriteria::new().user(bob).tags(["rust"]))
            .await
            .unwrap();

        assert_eq!(urls(&links), vec!["https://docs.rs"]);
    }

    #[tokio::test]
    async fn test_limit_and_offset_apply_after_filtering() {
        let (repo, alice, _) = seeded().await;

        let page = repo
            .find_by_criteria(&LinkCriteria::new().limit(2).offset(1))
            .await
            .unwrap();
        assert_eq!(urls(&page), vec!["https://rust-lang.org", "https://gobyexample.com"]);

        let alice_page = repo
            .find_by_criteria(&LinkCriteria::new().user(alice).offset(1).limit(5))
            .await
            .unwrap();
        assert_eq!(urls(&alice_page), vec!["https://rust-lang.org", "https://example.com"]);
    }

    #[tokio::test]
    async fn test_no_match_is_empty_not_error() {
        let (repo, _, _) = seeded().await;

        let none = repo
            .find_by_criteria(&LinkCriteria::new().tags(["haskell"]))
            .await
            .unwrap();
        assert!(none.is_empty());

        let zero = repo.find_by_criteria(&LinkCriteria::new().limit(0)).await.unwrap();
        assert!(zero.is_empty());
    }

    #[tokio::test]
    async fn test_slow_store_times_out() {
        let repo = InMemoryLinkRepository::new(Duration::from_millis(10))
            .with_latency(Duration::from_millis(200));

        let error = repo.find_by_criteria(&LinkCriteria::new()).await.unwrap_err();
        assert!(error.is_timeout());
    }
}
