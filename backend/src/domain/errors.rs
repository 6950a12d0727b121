//! Errors shared by the domain services.
//!
//! Validation errors live next to the model they validate.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind} not found: {id}")]
pub struct NotFoundError {
    pub kind: &'static str,
    pub id: String,
}

impl NotFoundError {
    pub fn new(kind: &'static str, id: impl Into<String>) -> Self {
        Self { kind, id: id.into() }
    }
}
