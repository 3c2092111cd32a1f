//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 저장소에 영속되는 엔티티 (User, Link) 및 조회 조건
//! └── dto       - 원격 호출 요청/응답 메시지
//!      │
//!      ▼
//! Repositories (users: PostgreSQL, links: MongoDB)
//! ```

pub mod dto;
pub mod entities;
