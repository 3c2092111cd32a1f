//! # User Data Transfer Objects Module
//!
//! `UserService` RPC 표면의 요청/응답 메시지를 정의하는 모듈입니다.
//!
//! | RPC | 요청 | 응답 |
//! |-----|------|------|
//! | `CreateUser` | [`CreateUserRequest`] | [`Empty`] |
//! | `GetUser` | [`GetUserRequest`] | [`UserResponse`] |
//! | `UpdateUser` | [`UpdateUserRequest`] | [`Empty`] |
//! | `DeleteUser` | [`DeleteUserRequest`] | [`Empty`] |
//! | `ListUsers` | [`Empty`] | [`ListUsersResponse`] |

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
