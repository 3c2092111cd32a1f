use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 사용자 응답 메시지
///
/// `password`는 저장된 불투명 값을 그대로 돌려줍니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub password: String,
    /// RFC3339 (`2024-01-01T00:00:00Z`)
    pub created_at: String,
    /// RFC3339 (`2024-01-01T00:00:00Z`)
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            password,
            created_at,
            updated_at,
        } = user;

        Self {
            id: id.to_string(),
            username,
            password,
            created_at: format_timestamp(&created_at),
            updated_at: format_timestamp(&updated_at),
        }
    }
}

/// `ListUsers` 응답. 사용자가 없어도 `users`는 빈 배열입니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub users: Vec<UserResponse>,
}

/// 초 단위 RFC3339, UTC는 `Z` 접미사
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    #[test]
    fn test_timestamps_are_rfc3339_seconds() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let updated = Utc.with_ymd_and_hms(2024, 1, 2, 12, 30, 5).unwrap();
        let user = User {
            id: Uuid::nil(),
            username: "alice".into(),
            password: "x".into(),
            created_at: created,
            updated_at: updated,
        };

        let response = UserResponse::from(user);
        assert_eq!(response.id, "00000000-0000-0000-0000-000000000000");
        assert_eq!(response.created_at, "2024-01-01T00:00:00Z");
        assert_eq!(response.updated_at, "2024-01-02T12:30:05Z");
        assert!(DateTime::parse_from_rfc3339(&response.updated_at).is_ok());
    }

    #[test]
    fn test_empty_list_serializes_as_array() {
        let json = serde_json::to_value(ListUsersResponse::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "users": [] }));
    }
}
