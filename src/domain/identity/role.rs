//! Role entity and related types

use serde::{Deserialize, Serialize};

use super::policy::PolicyDocument;
use super::validation::{IdentityValidationError, validate_policy_name, validate_role_name};

/// Role name - the idempotency key within an account
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoleName(String);

impl RoleName {
    /// Create a new RoleName after validation
    pub fn new(name: impl Into<String>) -> Result<Self, IdentityValidationError> {
        let name = name.into();
        validate_role_name(&name)?;
        Ok(Self(name))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoleName {
    type Error = IdentityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoleName> for String {
    fn from(name: RoleName) -> Self {
        name.0
    }
}

impl std::fmt::Display for RoleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque durable role identifier assigned by the identity subsystem
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleArn(String);

impl RoleArn {
    pub fn new(arn: impl Into<String>) -> Self {
        Self(arn.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for RoleArn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the role ensurer needs to converge a role into existence
#[derive(Debug, Clone)]
pub struct RoleSpec {
    /// Role name, unique per account
    pub name: RoleName,
    /// Who may assume the role
    pub trust_policy: PolicyDocument,
    /// Name of the inline permission policy
    pub policy_name: String,
    /// What the role may do
    pub permission_policy: PolicyDocument,
}

impl RoleSpec {
    pub fn new(
        name: RoleName,
        trust_policy: PolicyDocument,
        policy_name: impl Into<String>,
        permission_policy: PolicyDocument,
    ) -> Self {
        Self {
            name,
            trust_policy,
            policy_name: policy_name.into(),
            permission_policy,
        }
    }

    /// Validate the parts the identity subsystem would reject
    pub fn validate(&self) -> Result<(), IdentityValidationError> {
        validate_policy_name(&self.policy_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identity::policy::Statement;

    #[test]
    fn test_role_name_valid() {
        let name = RoleName::new("KBRole").unwrap();
        assert_eq!(name.as_str(), "KBRole");
        assert_eq!(name.to_string(), "KBRole");
    }

    #[test]
    fn test_role_name_invalid() {
        assert!(RoleName::new("").is_err());
        assert!(RoleName::new("bad name").is_err());
    }

    #[test]
    fn test_role_arn_display() {
        let arn = RoleArn::new("arn:aws:iam::123456789012:role/KBRole");
        assert_eq!(arn.to_string(), "arn:aws:iam::123456789012:role/KBRole");
        assert!(!arn.is_empty());
    }

    #[test]
    fn test_role_spec_validation() {
        let spec = RoleSpec::new(
            RoleName::new("KBRole").unwrap(),
            PolicyDocument::assume_role_for_service("bedrock.amazonaws.com"),
            "KBPolicy",
            PolicyDocument::new().with_statement(Statement::allow().with_action("bedrock:*")),
        );
        assert!(spec.validate().is_ok());

        let bad = RoleSpec::new(
            RoleName::new("KBRole").unwrap(),
            PolicyDocument::new(),
            "bad policy name!",
            PolicyDocument::new(),
        );
        assert!(bad.validate().is_err());
    }
}
