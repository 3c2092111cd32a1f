//! umanager 사용자/북마크 관리 백엔드
//!
//! 사용자 계정은 PostgreSQL에, 링크(북마크)는 MongoDB에 저장하고
//! 사용자 관리 기능을 원격 호출(RPC) 표면으로 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: id 기준 upsert, 조회, 목록, 멱등 삭제
//! - **링크 저장소**: 소유자/URL 조회, 태그(하나라도 포함)·페이지 조건 검색
//! - **에러 분류 체계**: 저장소 에러 → `ErrorKind` → RPC 상태 코드
//! - **호출별 timeout**: 모든 리포지토리/RPC 호출에 deadline 적용
//! - **명시적 의존성 주입**: 저장소 핸들과 리포지토리는 `main.rs`에서 생성
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← POST /rpc/UserService/*, GET /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← JSON 요청/응답
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 입력 검증, timeout, ErrorKind → Status
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 저장소 에러 분류
//! └─────────────────┘
//!          │
//!          ▼
//! ┌────────────────────┐
//! │ PostgreSQL/MongoDB │ ← 저장소
//! └────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use umanager::repositories::users::InMemoryUserRepository;
//! use umanager::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserRepository::default()), timeout);
//! service.create_user(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
