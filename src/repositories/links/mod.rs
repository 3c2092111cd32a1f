//! 링크(북마크) 데이터 액세스 계층
//!
//! - [`MongoLinkRepository`](link_repo::MongoLinkRepository): MongoDB `links` 컬렉션
//! - [`InMemoryLinkRepository`](memory::InMemoryLinkRepository): 테스트 더블
//!
//! # Examples
//!
//! ```rust,ignore
//! let repo = MongoLinkRepository::new(&database, timeout);
//! repo.create(NewLink::new(id, owner, "Rust", "https://rust-lang.org").with_tags(["rust"])).await?;
//!
//! let rust_links = repo.find_by_criteria(&LinkCriteria::new().tags(["rust"]).limit(10)).await?;
//! ```

pub mod link_repo;
pub mod memory;

pub use link_repo::MongoLinkRepository;
pub use memory::InMemoryLinkRepository;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::errors::AppResult;
use crate::domain::entities::links::{Link, LinkCriteria, NewLink};

/// 링크 리포지토리 계약
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// `created_at = updated_at = now`를 할당하고 존재 확인 없이 그대로 저장합니다.
    ///
    /// 저장 실패는 `Internal`입니다.
    async fn create(&self, link: NewLink) -> AppResult<Link>;

    /// `(url, user_id)`로 한 건을 조회합니다.
    ///
    /// 일치하는 문서가 없으면 `NotFound`이며, 빈 레코드를 반환하는 일은 없습니다.
    async fn find_by_owner_and_url(&self, url: &str, user_id: Uuid) -> AppResult<Link>;

    /// 조건에 존재하는 필드만으로 필터를 만들어 조회합니다.
    ///
    /// 태그는 "하나라도 포함" 의미이고, `offset`/`limit`은 필터 이후에 적용됩니다.
    /// 일치하는 링크가 없으면 빈 벡터를 반환합니다. `limit == Some(0)`도 빈 벡터입니다.
    async fn find_by_criteria(&self, criteria: &LinkCriteria) -> AppResult<Vec<Link>>;
}
