//! 사용자 RPC 요청 메시지
//!
//! `id`는 문자열 그대로 받아 서비스 계층에서 UUID로 파싱합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

/// `CreateUser` 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 정규 UUID 문자열 (호출자가 지정)
    pub id: String,

    #[validate(length(min = 1, max = 255, message = "사용자명은 1-255자 사이여야 합니다"))]
    pub username: String,

    /// 불투명 자격 증명, 그대로 저장됨
    pub password: String,
}

/// `UpdateUser` 요청
///
/// 필드 구성은 `CreateUserRequest`와 같고, 동일한 upsert 경로로 처리됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    pub id: String,

    #[validate(length(min = 1, max = 255, message = "사용자명은 1-255자 사이여야 합니다"))]
    pub username: String,

    pub password: String,
}

/// `GetUser` 요청
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserRequest {
    pub id: String,
}

/// `DeleteUser` 요청
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUserRequest {
    pub id: String,
}

/// 빈 메시지 (`CreateUser`/`UpdateUser`/`DeleteUser` 응답, `ListUsers` 요청)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}
