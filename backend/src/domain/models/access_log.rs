use chrono::{DateTime, Utc};
use shared::{Role, User};

/// One successful sign-in. Append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessLog {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub role: Role,
    pub timestamp: DateTime<Utc>,
}

impl AccessLog {
    pub fn generate_id(now_millis: u64) -> String {
        format!("log-{}", now_millis)
    }

    pub fn for_user(user: &User, now: DateTime<Utc>) -> Self {
        Self {
            id: Self::generate_id(now.timestamp_millis() as u64),
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            role: user.role,
            timestamp: now,
        }
    }
}
