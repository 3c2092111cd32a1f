//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 좁은 async 트레이트로 노출되며, 실제 저장소 구현과
//! 인메모리 테스트 더블이 같은 트레이트를 구현합니다.
//!
//! | 트레이트 | 저장소 구현 | 테스트 더블 |
//! |----------|-------------|-------------|
//! | [`LinkRepository`](links::LinkRepository) | MongoDB `links` | [`InMemoryLinkRepository`](links::InMemoryLinkRepository) |
//! | [`UserRepository`](users::UserRepository) | PostgreSQL `users` | [`InMemoryUserRepository`](users::InMemoryUserRepository) |
//!
//! 저장소별 에러는 이 계층을 벗어나기 전에 [`ErrorKind`](crate::core::ErrorKind)로
//! 분류됩니다.

pub mod links;
pub mod users;
