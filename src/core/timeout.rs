//! 작업별 제한 시간 적용
//!
//! 모든 리포지토리 작업은 호출 시점에 고정 timeout으로부터 새로운 deadline을
//! 만들고, 이를 다운스트림 저장소 호출에 붙입니다. deadline이 유일한 취소 수단이며
//! 재시도는 하지 않습니다.

use std::future::Future;
use std::time::Duration;

use log::warn;

use super::errors::{AppError, AppResult};

/// `future`를 `timeout` 안에 완료하지 못하면 [`AppError::Timeout`]을 반환합니다.
///
/// # 예제
///
/// ```rust,ignore
/// let user = with_timeout("users.find_by_id", self.timeout, async {
///     sqlx::query_as::<_, User>(SELECT_BY_ID).bind(id).fetch_one(&self.pool).await
///         .map_err(|e| classify_sqlx_error("find user by id", e))
/// }).await?;
/// ```
pub async fn with_timeout<T, F>(
    operation: &'static str,
    timeout: Duration,
    future: F,
) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    match tokio::time::timeout(timeout, future).await {
        Ok(result) => result,
        Err(_) => {
            warn!("⏱️ {} 작업이 {:?} 제한 시간을 초과했습니다", operation, timeout);
            Err(AppError::Timeout { operation, timeout })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorKind;

    #[tokio::test]
    async fn test_completes_within_deadline() {
        let result = with_timeout("fast", Duration::from_secs(1), async { Ok(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_inner_error_passes_through_unchanged() {
        let result: AppResult<()> = with_timeout("lookup", Duration::from_secs(1), async {
            Err(AppError::NotFound("user".into()))
        })
        .await;

        assert!(result.unwrap_err().is(ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn test_slow_future_times_out() {
        let result: AppResult<()> = with_timeout("slow", Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;

        let error = result.unwrap_err();
        assert!(error.is_timeout());
        assert!(error.is(ErrorKind::Internal));
    }
}
