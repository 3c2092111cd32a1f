//! # MongoDB 링크 리포지토리
//!
//! `links` 컬렉션에 대한 [`LinkRepository`] 구현입니다.
//!
//! ## 컬렉션 구조
//!
//! - **컬렉션명**: `links`
//! - **`_id`**: 링크 UUID (하이픈 문자열)
//! - **인덱스**: `(user_id, url)` 조회용 (유니크 아님), `tags` 멀티키
//!
//! ## 조회 조건 → 필터 변환
//!
//! | LinkCriteria | MongoDB |
//! |--------------|---------|
//! | `user_id: Some(id)` | `{ "user_id": "<uuid>" }` |
//! | `tags: Some(set)` | `{ "tags": { "$in": [...] } }` |
//! | `offset: Some(n)` | `FindOptions::skip` |
//! | `limit: Some(n)` | `FindOptions::limit` |
//!
//! 모든 드라이버 에러(디코딩, 연결, 쓰기 실패)는 `Internal`로 분류됩니다.

use std::time::Duration;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, error, info};
use mongodb::{
    bson::{doc, Document},
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};
use uuid::Uuid;

use super::LinkRepository;
use crate::core::errors::{AppError, AppResult};
use crate::core::timeout::with_timeout;
use crate::db::Database;
use crate::domain::entities::links::{Link, LinkCriteria, NewLink};
use crate::domain::entities::server_timestamp;

pub const LINKS_COLLECTION: &str = "links";

/// MongoDB 기반 링크 리포지토리
#[derive(Clone)]
pub struct MongoLinkRepository {
    collection: Collection<Link>,
    timeout: Duration,
}

impl MongoLinkRepository {
    pub fn new(database: &Database, timeout: Duration) -> Self {
        Self {
            collection: database.get_database().collection::<Link>(LINKS_COLLECTION),
            timeout,
        }
    }

    /// 조회용 인덱스를 생성합니다. 애플리케이션 시작 시 한 번 호출합니다.
    ///
    /// `(user_id, url)` 인덱스는 유니크가 아닙니다. 중복 링크 감지는 이 계층의
    /// 책임이 아닙니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let owner_url_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "url": 1 })
            .options(IndexOptions::builder()
                .name("user_id_url".to_string())
                .build())
            .build();

        let tags_index = IndexModel::builder()
            .keys(doc! { "tags": 1 })
            .options(IndexOptions::builder()
                .name("tags".to_string())
                .build())
            .build();

        with_timeout("links.create_indexes", self.timeout, async {
            self.collection
                .create_indexes([owner_url_index, tags_index])
                .await
                .map_err(|e| store_error("create link indexes", e))
        })
        .await?;

        info!("✅ links 컬렉션 인덱스 생성 완료");
        Ok(())
    }
}

#[async_trait]
impl LinkRepository for MongoLinkRepository {
    async fn create(&self, link: NewLink) -> AppResult<Link> {
        with_timeout("links.create", self.timeout, async {
            let link = link.into_link(server_timestamp());

            self.collection
                .insert_one(&link)
                .await
                .map_err(|e| store_error("insert link", e))?;

            debug!("링크 저장 완료: {} ({})", link.id, link.url);
            Ok(link)
        })
        .await
    }

    async fn find_by_owner_and_url(&self, url: &str, user_id: Uuid) -> AppResult<Link> {
        with_timeout("links.find_by_owner_and_url", self.timeout, async {
            self.collection
                .find_one(doc! { "url": url, "user_id": user_id.to_string() })
                .await
                .map_err(|e| store_error("find link by owner and url", e))?
                .ok_or_else(|| AppError::NotFound(format!("link {} for user {}", url, user_id)))
        })
        .await
    }

    async fn find_by_criteria(&self, criteria: &LinkCriteria) -> AppResult<Vec<Link>> {
        if criteria.limit == Some(0) {
            return Ok(Vec::new());
        }

        let filter = build_filter(criteria);
        let options = find_options(criteria);

        with_timeout("links.find_by_criteria", self.timeout, async {
            let cursor = self
                .collection
                .find(filter)
                .with_options(options)
                .await
                .map_err(|e| store_error("find links", e))?;

            cursor
                .try_collect::<Vec<Link>>()
                .await
                .map_err(|e| store_error("decode links", e))
        })
        .await
    }
}

/// 존재하는 조건 필드만으로 필터 문서를 만듭니다.
fn build_filter(criteria: &LinkCriteria) -> Document {
    let mut filter = Document::new();

    if let Some(user_id) = criteria.user_id {
        filter.insert("user_id", user_id.to_string());
    }

    if let Some(tags) = &criteria.tags {
        let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
        filter.insert("tags", doc! { "$in": tags });
    }

    filter
}

fn find_options(criteria: &LinkCriteria) -> FindOptions {
    let mut options = FindOptions::default();
    options.skip = criteria.offset;
    options.limit = criteria
        .limit
        .map(|limit| i64::try_from(limit).unwrap_or(i64::MAX));
    options
}

fn store_error(context: &'static str, err: mongodb::error::Error) -> AppError {
    error!("MongoDB 오류 ({}): {}", context, err);
    AppError::database(context, err)
}
