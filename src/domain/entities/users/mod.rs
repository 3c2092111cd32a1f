//! Users Entity Module
//!
//! 사용자 도메인의 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::NewUser;
//!
//! let draft = NewUser::new(Uuid::new_v4(), "alice", "opaque-secret");
//! let stored = user_repo.upsert(draft).await?;
//! ```

pub mod user;

pub use user::{NewUser, User};
