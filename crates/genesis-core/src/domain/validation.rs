use crate::domain::{entities::document::RESERVED_KEYS, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a project, group, or module identifier.
    ///
    /// Identifiers become directory names and parts of composite keys, so
    /// path separators, whitespace, and leading dots are rejected. Keys that
    /// mark a leaf node are rejected too: a group member named `type` would
    /// read back as the group's own entity.
    pub fn validate_identifier(value: &str) -> Result<(), DomainError> {
        let reject = |reason: &str| {
            Err(DomainError::InvalidIdentifier {
                value: value.into(),
                reason: reason.into(),
            })
        };

        if value.is_empty() {
            return reject("identifier cannot be empty");
        }
        if value.starts_with('.') {
            return reject("identifier cannot start with '.'");
        }
        if value.contains(['/', '\\']) {
            return reject("identifier cannot contain path separators");
        }
        if value.chars().any(char::is_whitespace) {
            return reject("identifier cannot contain whitespace");
        }
        if RESERVED_KEYS.contains(&value) {
            return reject("identifier is a reserved document key");
        }
        Ok(())
    }
}
