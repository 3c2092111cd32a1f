//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 리포지토리 트레이트 객체를 생성자로 주입받으며,
//! 입력 검증, 호출별 timeout, 에러 분류 → 상태 코드 변환을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(users, TimeoutConfig::rpc_timeout());
//! let reply = service.list_users(Empty {}).await?;
//! ```

pub mod users;
