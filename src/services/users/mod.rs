//! 사용자 RPC 서비스 모듈
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(PgUserRepository::new(pool, timeout)), rpc_timeout);
//! let user = service.get_user(GetUserRequest { id: "3fa85f64-5717-4562-b3fc-2c963f66afa6".into() }).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
