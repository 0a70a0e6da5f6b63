use crate::domain::error::DomainError;

/// Centralized domain validation.
///
/// Character-level rules for names live here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// A class name is `[A-Z][A-Za-z0-9]*`.
    pub fn validate_class_name(value: &str) -> Result<(), DomainError> {
        let Some(first) = value.chars().next() else {
            return Err(DomainError::invalid_identifier(value, "name is empty"));
        };

        if first.is_ascii_digit() {
            return Err(DomainError::invalid_identifier(
                value,
                "name starts with a digit",
            ));
        }
        if !first.is_ascii_uppercase() {
            return Err(DomainError::invalid_identifier(
                value,
                "name must start with an uppercase letter",
            ));
        }
        if let Some(bad) = value.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(DomainError::invalid_identifier(
                value,
                format!("character '{bad}' is not a letter or digit"),
            ));
        }

        Ok(())
    }

    /// A snake-case stem is one or more `[a-z][a-z0-9]*` segments joined by `_`.
    ///
    /// This is exactly the image of [`crate::domain::Identifier::as_snake`].
    pub fn validate_snake_stem(value: &str) -> Result<(), DomainError> {
        if value.is_empty() {
            return Err(DomainError::invalid_identifier(value, "name is empty"));
        }

        for segment in value.split('_') {
            let mut chars = segment.chars();
            match chars.next() {
                None => {
                    return Err(DomainError::invalid_identifier(
                        value,
                        "empty segment between underscores",
                    ));
                }
                Some(c) if !c.is_ascii_lowercase() => {
                    return Err(DomainError::invalid_identifier(
                        value,
                        "each segment must start with a lowercase letter",
                    ));
                }
                Some(_) => {}
            }
            if chars.any(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit())) {
                return Err(DomainError::invalid_identifier(
                    value,
                    "only lowercase letters, digits and underscores are allowed",
                ));
            }
        }

        Ok(())
    }
}
