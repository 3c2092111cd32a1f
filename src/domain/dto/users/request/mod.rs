//! # 사용자 관련 요청 DTO 모듈
//!
//! `UserService` RPC 표면의 요청 메시지들을 정의합니다.
//! 식별자는 정규 UUID 문자열로 주고받으며, 파싱은 서비스 계층에서
//! 리포지토리 호출 이전에 수행됩니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (actix-web `Json` 추출기)
//! 2. **형식 검증**: `validator`를 통한 길이 규칙
//! 3. **식별자 검증**: UUID 파싱 실패 시 `InvalidArgument`

pub mod user_request;

pub use user_request::*;
