//! HTTP 요청 핸들러 모듈
//!
//! 핸들러는 요청 본문을 추출해 서비스에 위임하고, 결과를 JSON 응답으로
//! 직렬화하는 역할만 합니다. 검증과 에러 변환은 서비스 계층이 담당합니다.

pub mod users;
