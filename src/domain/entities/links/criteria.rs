//! 링크 조회 조건
//!
//! 모든 필드는 선택적이며, 값의 "존재"가 필터 적용 여부를 결정합니다.
//! 빈 값이 아니라 `None`이어야 제약이 없습니다.

use std::collections::BTreeSet;

use uuid::Uuid;

use super::link::Link;

/// 링크 조회 조건
///
/// | 필드 | `None` | `Some(v)` |
/// |------|--------|-----------|
/// | `user_id` | 제약 없음 | 소유자가 `v`인 링크 |
/// | `tags` | 제약 없음 | 태그 집합이 `v`와 하나라도 겹치는 링크 (빈 집합은 아무것도 매칭하지 않음) |
/// | `offset` | 건너뛰지 않음 | 필터 결과에서 앞의 `v`개를 건너뜀 |
/// | `limit` | 제한 없음 | 최대 `v`개 반환 |
///
/// ```rust,ignore
/// let criteria = LinkCriteria::new()
///     .user(owner_id)
///     .tags(["rust", "go"])
///     .offset(1)
///     .limit(2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkCriteria {
    pub user_id: Option<Uuid>,
    pub tags: Option<BTreeSet<String>>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl LinkCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// 필터 조건(`user_id`, `tags`)에 링크가 부합하는지 확인합니다.
    ///
    /// `limit`/`offset`은 필터 이후 단계이므로 여기서 고려하지 않습니다.
    pub fn matches(&self, link: &Link) -> bool {
        if let Some(user_id) = self.user_id {
            if link.user_id != user_id {
                return false;
            }
        }

        match &self.tags {
            Some(tags) => !tags.is_disjoint(&link.tags),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::links::NewLink;
    use chrono::Utc;

    fn link(owner: Uuid, tags: &[&str]) -> Link {
        NewLink::new(Uuid::new_v4(), owner, "title", "https://example.com")
            .with_tags(tags.iter().copied())
            .into_link(Utc::now())
    }

    #[test]
    fn test_empty_criteria_matches_everything() {
        let criteria = LinkCriteria::new();
        assert!(criteria.matches(&link(Uuid::new_v4(), &[])));
        assert!(criteria.matches(&link(Uuid::new_v4(), &["go"])));
    }

    #[test]
    fn test_tag_filter_is_match_any() {
        let criteria = LinkCriteria::new().tags(["go"]);

        assert!(criteria.matches(&link(Uuid::new_v4(), &["go"])));
        assert!(criteria.matches(&link(Uuid::new_v4(), &["go", "rust"])));
        assert!(!criteria.matches(&link(Uuid::new_v4(), &["rust"])));
        assert!(!criteria.matches(&link(Uuid::new_v4(), &[])));
    }

    #[test]
    fn test_present_empty_tag_set_matches_nothing() {
        let criteria = LinkCriteria::new().tags(Vec::<String>::new());
        assert!(!criteria.matches(&link(Uuid::new_v4(), &["go"])));
    }

    #[test]
    fn test_user_filter_combines_with_tags() {
        let owner = Uuid::new_v4();
        let criteria = LinkCriteria::new().user(owner).tags(["go"]);

        assert!(criteria.matches(&link(owner, &["go"])));
        assert!(!criteria.matches(&link(owner, &["rust"])));
        assert!(!criteria.matches(&link(Uuid::new_v4(), &["go"])));
    }
}
