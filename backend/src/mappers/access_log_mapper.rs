use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::models::AccessLog as DomainAccessLog;
use shared::AccessLog as SharedAccessLog;

pub struct AccessLogMapper;

impl AccessLogMapper {
    pub fn to_domain(dto: SharedAccessLog) -> Result<DomainAccessLog> {
        let timestamp = DateTime::parse_from_rfc3339(&dto.timestamp)
            .with_context(|| format!("Invalid access log timestamp '{}'", dto.timestamp))?
            .with_timezone(&Utc);

        Ok(DomainAccessLog {
            id: dto.id,
            username: dto.username,
            full_name: dto.full_name,
            role: dto.role,
            timestamp,
        })
    }

    pub fn to_dto(domain: DomainAccessLog) -> SharedAccessLog {
        SharedAccessLog {
            id: domain.id,
            username: domain.username,
            full_name: domain.full_name,
            role: domain.role,
            timestamp: domain.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Role;

    #[test]
    fn test_timestamp_is_parsed_and_written_back_in_utc() {
        let dto = SharedAccessLog {
            id: "log-1".to_string(),
            username: "admin".to_string(),
            full_name: "ผู้ดูแลระบบ".to_string(),
            role: Role::Admin,
            timestamp: "2025-01-10T08:30:00.000+07:00".to_string(),
        };
        let domain = AccessLogMapper::to_domain(dto).unwrap();
        assert_eq!(
            AccessLogMapper::to_dto(domain).timestamp,
            "2025-01-10T01:30:00.000Z"
        );
    }

    #[test]
    fn test_rejects_bad_timestamp() {
        let dto = SharedAccessLog {
            id: "log-1".to_string(),
            username: "admin".to_string(),
            full_name: "x".to_string(),
            role: Role::Admin,
            timestamp: "yesterday".to_string(),
        };
        assert!(AccessLogMapper::to_domain(dto).is_err());
    }
}
