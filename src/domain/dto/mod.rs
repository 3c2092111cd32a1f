//! # Data Transfer Objects Module
//!
//! 원격 호출 인터페이스에서 주고받는 메시지 구조를 정의합니다.
//! 엔티티와 달리 식별자와 타임스탬프는 문자열(UUID, RFC3339)로 표현됩니다.
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/   CreateUser, GetUser, UpdateUser, DeleteUser, Empty
//!     └── response/  UserResponse, ListUsersResponse
//! ```

pub mod users;

pub use users::*;
