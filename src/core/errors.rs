//! # Application Error Taxonomy
//!
//! 모든 리포지토리가 공유하는 에러 분류 체계입니다.
//! 저장소(MongoDB, PostgreSQL)별 에러는 리포지토리 경계에서 반드시
//! 아래 네 가지 [`ErrorKind`] 중 하나로 분류된 [`AppError`]로 변환됩니다.
//!
//! ## 분류 체계
//!
//! | ErrorKind | AppError 변형 | 발생 위치 |
//! |-----------|---------------|-----------|
//! | `NotFound` | `NotFound` | 조회 결과 없음 |
//! | `Conflict` | `ConflictError` | create-only insert의 키 중복 |
//! | `InvalidArgument` | `ValidationError` | 핸들러의 입력 검증 |
//! | `Internal` | `Timeout`, `DatabaseError`, `InternalError` | 그 외 모든 실패 |
//!
//! 호출자는 메시지 문자열이 아니라 [`AppError::kind`]에 대해 프로그래밍해야 합니다.
//! 원본 드라이버 에러는 `DatabaseError`의 `source`로 보존되어 로그 진단에 사용됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, ErrorKind};
//!
//! match repo.find_by_id(id).await {
//!     Err(e) if e.is(ErrorKind::NotFound) => { /* 404 */ }
//!     Err(e) if e.is_timeout() => log::warn!("느린 저장소: {}", e),
//!     other => { /* ... */ }
//! }
//! ```

use std::time::Duration;
use thiserror::Error;

/// 드라이버 에러를 보존하기 위한 박싱된 에러 타입
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// 도메인 에러 분류
///
/// 닫힌 집합이며, 모든 [`AppError`]는 정확히 하나의 분류에 속합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    InvalidArgument,
    Internal,
}

/// 애플리케이션 전역 에러 타입
///
/// 리포지토리와 서비스 계층이 반환하는 유일한 에러 타입입니다.
/// 변형은 진단 정보를 담고, 분류는 [`AppError::kind`]가 담당합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청된 레코드가 존재하지 않음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 유니크 키 충돌
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 입력값 검증 실패 (핸들러에서만 생성)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리포지토리/핸들러 작업이 제한 시간을 초과함
    ///
    /// 분류는 `Internal`이지만 [`AppError::is_timeout`]으로 다른 내부 오류와 구분됩니다.
    #[error("Timeout: {operation} exceeded {timeout:?}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },

    /// 저장소 드라이버 에러
    #[error("Database error: {context}: {source}")]
    DatabaseError {
        context: &'static str,
        #[source]
        source: BoxError,
    },

    /// 그 외 내부 오류
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 드라이버 에러를 원인으로 보존하는 `DatabaseError`를 생성합니다.
    pub fn database<E>(context: &'static str, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        AppError::DatabaseError {
            context,
            source: source.into(),
        }
    }

    /// 에러의 분류를 반환합니다.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::ConflictError(_) => ErrorKind::Conflict,
            AppError::ValidationError(_) => ErrorKind::InvalidArgument,
            AppError::Timeout { .. }
            | AppError::DatabaseError { .. }
            | AppError::InternalError(_) => ErrorKind::Internal,
        }
    }

    /// 에러가 주어진 분류에 속하는지 확인합니다.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == kind
    }

    /// 제한 시간 초과로 인한 에러인지 확인합니다.
    pub fn is_timeout(&self) -> bool {
        matches!(self, AppError::Timeout { .. })
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_each_variant_maps_to_exactly_one_kind() {
        assert_eq!(AppError::NotFound("user".into()).kind(), ErrorKind::NotFound);
        assert_eq!(AppError::ConflictError("dup".into()).kind(), ErrorKind::Conflict);
        assert_eq!(
            AppError::ValidationError("bad id".into()).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(AppError::InternalError("boom".into()).kind(), ErrorKind::Internal);
        assert_eq!(
            AppError::database("insert link", "connection reset").kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn test_timeout_is_internal_but_distinguishable() {
        let error = AppError::Timeout {
            operation: "users.find_by_id",
            timeout: Duration::from_millis(50),
        };

        assert!(error.is(ErrorKind::Internal));
        assert!(error.is_timeout());
        assert!(!AppError::InternalError("boom".into()).is_timeout());
        assert!(error.to_string().contains("users.find_by_id"));
    }

    #[test]
    fn test_database_error_preserves_source() {
        let error = AppError::database("find links", "socket closed");

        assert!(error.to_string().contains("find links"));
        assert!(error.to_string().contains("socket closed"));
        let source = error.source().expect("source should be preserved");
        assert_eq!(source.to_string(), "socket closed");
    }
}
