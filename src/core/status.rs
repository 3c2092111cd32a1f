//! # RPC 상태 코드
//!
//! 서비스 계층이 호출자에게 돌려주는 프로토콜 수준의 실패 표현입니다.
//! [`AppError`]의 분류를 상태 코드로 한 번 더 변환합니다.
//!
//! | ErrorKind | Code | HTTP |
//! |-----------|------|------|
//! | `Conflict` | `AlreadyExists` | 409 |
//! | `NotFound` | `NotFound` | 404 |
//! | `InvalidArgument` | `InvalidArgument` | 400 |
//! | `Internal` (timeout 포함) | `Internal` | 500 |
//!
//! 응답 본문:
//!
//! ```json
//! { "code": "NOT_FOUND", "message": "Not found: user 3fa85f64-..." }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::errors::{AppError, ErrorKind};

/// 원격 호출 상태 코드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Code {
    InvalidArgument,
    NotFound,
    AlreadyExists,
    Internal,
}

impl Code {
    pub fn as_str(&self) -> &'static str {
        match self {
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::NotFound => "NOT_FOUND",
            Code::AlreadyExists => "ALREADY_EXISTS",
            Code::Internal => "INTERNAL",
        }
    }

    fn http_status(&self) -> StatusCode {
        match self {
            Code::InvalidArgument => StatusCode::BAD_REQUEST,
            Code::NotFound => StatusCode::NOT_FOUND,
            Code::AlreadyExists => StatusCode::CONFLICT,
            Code::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ErrorKind> for Code {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Conflict => Code::AlreadyExists,
            ErrorKind::NotFound => Code::NotFound,
            ErrorKind::InvalidArgument => Code::InvalidArgument,
            ErrorKind::Internal => Code::Internal,
        }
    }
}

/// 상태 코드와 진단 메시지
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}: {}", .code.as_str(), .message)]
pub struct Status {
    pub code: Code,
    pub message: String,
}

impl Status {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(Code::InvalidArgument, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(Code::Internal, message)
    }
}

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        Status::new(err.kind().into(), err.to_string())
    }
}

impl ResponseError for Status {
    fn status_code(&self) -> StatusCode {
        self.code.http_status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}
