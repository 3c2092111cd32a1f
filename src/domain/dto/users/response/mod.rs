//! # 사용자 관련 응답 DTO 모듈
//!
//! `UserService` RPC 표면의 응답 메시지들을 정의합니다.
//! 타임스탬프는 초 단위 RFC3339 문자열(`2024-01-01T00:00:00Z`)로 직렬화됩니다.

pub mod user_response;

pub use user_response::*;
