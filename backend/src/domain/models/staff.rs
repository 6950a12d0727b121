use shared::POSITIONS;

#[derive(Debug, Clone, PartialEq)]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub position: String,
}

impl Staff {
    pub fn generate_id(now_millis: u64) -> String {
        format!("staff-{}", now_millis)
    }

    pub fn validate_new(name: &str, position: &str) -> Result<(), StaffValidationError> {
        if name.trim().is_empty() {
            return Err(StaffValidationError::EmptyName);
        }
        if name.chars().count() > 100 {
            return Err(StaffValidationError::NameTooLong);
        }
        if !POSITIONS.contains(&position) {
            return Err(StaffValidationError::UnknownPosition(position.to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StaffValidationError {
    #[error("Staff name cannot be empty")]
    EmptyName,
    #[error("Staff name cannot exceed 100 characters")]
    NameTooLong,
    #[error("Unknown position: {0}")]
    UnknownPosition(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_new_staff() {
        assert!(Staff::validate_new("นายสมชาย ใจดี", "ครู").is_ok());
        assert_eq!(Staff::validate_new("  ", "ครู"), Err(StaffValidationError::EmptyName));
        assert!(matches!(
            Staff::validate_new("Somchai", "janitor"),
            Err(StaffValidationError::UnknownPosition(_))
        ));
    }

    #[test]
    fn test_generate_id() {
        assert_eq!(Staff::generate_id(1736467200000), "staff-1736467200000");
    }
}
