//! Role and policy name validation

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::error::ProvisionError;

/// Maximum length for role names
pub const MAX_ROLE_NAME_LENGTH: usize = 64;

/// Maximum length for inline policy names
pub const MAX_POLICY_NAME_LENGTH: usize = 128;

/// Regex pattern for valid role and policy names
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9+=,.@_-]+$").unwrap());

/// Identity validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum IdentityValidationError {
    /// Name is empty
    EmptyName,
    /// Name exceeds maximum length
    NameTooLong { length: usize, max: usize },
    /// Name contains invalid characters
    InvalidNameFormat { name: String },
}

impl fmt::Display for IdentityValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Role name cannot be empty"),
            Self::NameTooLong { length, max } => {
                write!(f, "Name too long: {} characters (max {})", length, max)
            }
            Self::InvalidNameFormat { name } => {
                write!(
                    f,
                    "Invalid name format '{}': allowed characters are alphanumeric and +=,.@_-",
                    name
                )
            }
        }
    }
}

impl std::error::Error for IdentityValidationError {}

impl From<IdentityValidationError> for ProvisionError {
    fn from(err: IdentityValidationError) -> Self {
        ProvisionError::validation(err.to_string())
    }
}

/// Validate a role name
pub fn validate_role_name(name: &str) -> Result<(), IdentityValidationError> {
    validate_name(name, MAX_ROLE_NAME_LENGTH)
}

/// Validate an inline policy name
pub fn validate_policy_name(name: &str) -> Result<(), IdentityValidationError> {
    validate_name(name, MAX_POLICY_NAME_LENGTH)
}

fn validate_name(name: &str, max: usize) -> Result<(), IdentityValidationError> {
    if name.is_empty() {
        return Err(IdentityValidationError::EmptyName);
    }

    if name.len() > max {
        return Err(IdentityValidationError::NameTooLong {
            length: name.len(),
            max,
        });
    }

    if !NAME_PATTERN.is_match(name) {
        return Err(IdentityValidationError::InvalidNameFormat {
            name: name.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_role_names() {
        assert!(validate_role_name("BedrockKnowledgeBaseRole").is_ok());
        assert!(validate_role_name("kb-role_v2").is_ok());
        assert!(validate_role_name("service@account.role").is_ok());
    }

    #[test]
    fn test_invalid_role_names() {
        assert!(matches!(
            validate_role_name(""),
            Err(IdentityValidationError::EmptyName)
        ));

        let long_name = "a".repeat(65);
        assert!(matches!(
            validate_role_name(&long_name),
            Err(IdentityValidationError::NameTooLong { .. })
        ));

        assert!(matches!(
            validate_role_name("role with spaces"),
            Err(IdentityValidationError::InvalidNameFormat { .. })
        ));

        assert!(matches!(
            validate_role_name("role/name"),
            Err(IdentityValidationError::InvalidNameFormat { .. })
        ));
    }

    #[test]
    fn test_policy_name_length() {
        assert!(validate_policy_name(&"p".repeat(128)).is_ok());
        assert!(validate_policy_name(&"p".repeat(129)).is_err());
    }

    #[test]
    fn test_conversion_to_provision_error() {
        let err: ProvisionError = IdentityValidationError::EmptyName.into();
        assert_eq!(err.to_string(), "Validation error: Role name cannot be empty");
    }
}
