//! Link Entity Implementation
//!
//! 문서 저장소의 `links` 컬렉션 문서와 매핑되는 북마크 엔티티입니다.

use std::collections::BTreeSet;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 북마크 엔티티
///
/// `(url, user_id)` 쌍은 존재 여부 조회에 쓰이지만 이 계층에서 유니크를
/// 강제하지 않습니다. 중복 감지는 호출자의 책임입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "_id", with = "uuid_string")]
    pub id: Uuid,
    pub title: String,
    pub url: String,
    /// 이미지 참조 집합
    #[serde(default)]
    pub images: BTreeSet<String>,
    /// 태그 집합
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// 소유 사용자
    #[serde(with = "uuid_string")]
    pub user_id: Uuid,
    #[serde(with = "bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// 링크 생성 입력값
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub images: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub user_id: Uuid,
}

impl NewLink {
    pub fn new(id: Uuid, user_id: Uuid, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            url: url.into(),
            images: BTreeSet::new(),
            tags: BTreeSet::new(),
            user_id,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// BSON 날짜는 밀리초 정밀도이므로 `now`를 밀리초로 잘라 할당합니다.
    pub fn into_link(self, now: DateTime<Utc>) -> Link {
        let now = now.trunc_subsecs(3);
        Link {
            id: self.id,
            title: self.title,
            url: self.url,
            images: self.images,
            tags: self.tags,
            user_id: self.user_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// UUID를 항상 하이픈 문자열로 저장합니다.
///
/// 필터 값(`user_id.to_string()`)과 저장된 값의 표현이 일치해야 조회가 됩니다.
pub(crate) mod uuid_string {
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};
    use uuid::Uuid;

    pub fn serialize<S: Serializer>(id: &Uuid, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&id.hyphenated())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Uuid::parse_str(&raw).map_err(D::Error::custom)
    }
}

/// `DateTime<Utc>`를 BSON 날짜(`ElementType::DateTime`)로 저장합니다.
pub(crate) mod bson_datetime {
    use chrono::{DateTime, Utc};
    use mongodb::bson;
    use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        bson::DateTime::from_millis(at.timestamp_millis()).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let stored = bson::DateTime::deserialize(deserializer)?;
        DateTime::<Utc>::from_timestamp_millis(stored.timestamp_millis())
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {}", stored)))
    }
}
