//! # Core Module
//!
//! 모든 계층이 공유하는 기반 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 에러 분류 체계
//! - **ErrorKind**: `NotFound`, `Conflict`, `InvalidArgument`, `Internal`
//! - **AppError**: 진단 정보를 담은 `thiserror` 기반 에러 타입
//! - **AppResult**: `Result<T, AppError>` 별칭
//!
//! ### [`timeout`] - 작업별 제한 시간
//! - **with_timeout**: 호출마다 새 deadline을 만들어 future에 적용
//!
//! ### [`status`] - 원격 호출 상태 코드
//! - **Status / Code**: 분류 → 상태 코드 변환, `actix_web::ResponseError` 구현
//!
//! ## 의존성 주입
//!
//! 전역 서비스 로케이터는 사용하지 않습니다. 저장소 핸들과 리포지토리는
//! `main.rs`(composition root)에서 명시적으로 생성되어 생성자로 주입됩니다.
//!
//! ```rust,ignore
//! let database = Database::new().await?;
//! let links = MongoLinkRepository::new(&database, TimeoutConfig::repository_timeout());
//! let users = Arc::new(PgUserRepository::new(pg.pool().clone(), timeout));
//! let service = UserService::new(users, TimeoutConfig::rpc_timeout());
//! ```

pub mod errors;
pub mod status;
pub mod timeout;

pub use errors::*;
pub use status::*;
pub use timeout::*;
