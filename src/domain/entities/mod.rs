//! # Domain Entities Module
//!
//! 저장소에 영속되는 핵심 엔티티들을 정의합니다.
//!
//! ```text
//! entities/
//! ├── users/  ← PostgreSQL `users` 테이블 (User, NewUser)
//! └── links/  ← MongoDB `links` 컬렉션 (Link, NewLink, LinkCriteria)
//! ```
//!
//! ## 타임스탬프
//!
//! `created_at` / `updated_at`은 항상 서버가 [`server_timestamp`]로 할당합니다.
//! PostgreSQL `TIMESTAMPTZ`는 마이크로초 정밀도이므로 할당 시점에 잘라내어
//! 쓰기 결과와 다시 읽은 레코드가 동일하도록 합니다.

use chrono::{DateTime, SubsecRound, Utc};

pub mod links;
pub mod users;

pub use links::{Link, LinkCriteria, NewLink};
pub use users::{NewUser, User};

/// 마이크로초 단위로 잘린 현재 UTC 시각
pub fn server_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
