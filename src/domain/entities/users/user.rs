//! User Entity Implementation
//!
//! 관계형 저장소의 `users` 테이블 한 행과 1:1로 대응하는 사용자 엔티티입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 엔티티
///
/// - `id`: 호출자가 생성 시 지정하며 서버에서 생성하지 않습니다. 생성 후 변경 불가.
/// - `username`: 유니크 비즈니스 키 (저장소의 unique 제약), 변경 가능
/// - `password`: 전달받은 그대로 저장되는 불투명 자격 증명 (해싱하지 않음)
/// - `created_at` / `updated_at`: 서버가 할당, 항상 `updated_at >= created_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// upsert / insert 입력값
///
/// 타임스탬프는 리포지토리가 할당하므로 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: Uuid,
    pub username: String,
    pub password: String,
}

impl NewUser {
    pub fn new(id: Uuid, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
        }
    }

    /// 최초 생성 시점의 레코드로 변환합니다 (`created_at == updated_at == now`).
    pub fn into_user(self, now: DateTime<Utc>) -> User {
        User {
            id: self.id,
            username: self.username,
            password: self.password,
            created_at: now,
            updated_at: now,
        }
    }
}
