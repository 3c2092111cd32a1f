//! Links Entity Module
//!
//! 북마크(링크) 엔티티와 조회 조건을 정의합니다.

pub mod criteria;
pub mod link;

pub use criteria::LinkCriteria;
pub use link::{Link, NewLink};
