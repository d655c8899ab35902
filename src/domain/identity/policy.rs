//! Policy documents in the identity subsystem's wire form

use serde::Serialize;

use crate::domain::error::ProvisionError;

/// Policy language version understood by the identity subsystem
pub const POLICY_VERSION: &str = "2012-10-17";

/// Statement effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Effect {
    Allow,
    Deny,
}

/// Principal a trust policy grants assume rights to
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Principal {
    #[serde(skip_serializing_if = "Option::is_none")]
    service: Option<String>,
}

impl Principal {
    /// Principal for a managed service (e.g. "bedrock.amazonaws.com")
    pub fn service(name: impl Into<String>) -> Self {
        Self {
            service: Some(name.into()),
        }
    }
}

/// A single policy statement: effect + principal/action/resource patterns
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    effect: Effect,
    #[serde(skip_serializing_if = "Option::is_none")]
    principal: Option<Principal>,
    action: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    resource: Vec<String>,
}

impl Statement {
    /// Create an Allow statement with no actions or resources yet
    pub fn allow() -> Self {
        Self {
            effect: Effect::Allow,
            principal: None,
            action: Vec::new(),
            resource: Vec::new(),
        }
    }

    /// Create a Deny statement
    pub fn deny() -> Self {
        Self {
            effect: Effect::Deny,
            ..Self::allow()
        }
    }

    /// Set the service principal
    pub fn with_service_principal(mut self, service: impl Into<String>) -> Self {
        self.principal = Some(Principal::service(service));
        self
    }

    /// Add an action pattern
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action.push(action.into());
        self
    }

    /// Add several action patterns
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = String>) -> Self {
        self.action.extend(actions);
        self
    }

    /// Add a resource pattern
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource.push(resource.into());
        self
    }

    pub fn effect(&self) -> Effect {
        self.effect
    }

    pub fn actions(&self) -> &[String] {
        &self.action
    }
}

/// A versioned policy document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    version: &'static str,
    statement: Vec<Statement>,
}

impl PolicyDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self {
            version: POLICY_VERSION,
            statement: Vec::new(),
        }
    }

    /// Trust policy allowing a single managed-service principal to assume the role
    pub fn assume_role_for_service(service: impl Into<String>) -> Self {
        Self::new().with_statement(
            Statement::allow()
                .with_service_principal(service)
                .with_action("sts:AssumeRole"),
        )
    }

    /// Add a statement
    pub fn with_statement(mut self, statement: Statement) -> Self {
        self.statement.push(statement);
        self
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statement
    }

    /// Serialize to the JSON wire form the identity subsystem accepts
    pub fn to_json(&self) -> Result<String, ProvisionError> {
        serde_json::to_string(self)
            .map_err(|e| ProvisionError::validation(format!("unserializable policy document: {e}")))
    }
}

impl Default for PolicyDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trust_policy_wire_form() {
        let doc = PolicyDocument::assume_role_for_service("bedrock.amazonaws.com");

        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            serde_json::json!({
                "Version": "2012-10-17",
                "Statement": [{
                    "Effect": "Allow",
                    "Principal": { "Service": "bedrock.amazonaws.com" },
                    "Action": ["sts:AssumeRole"]
                }]
            })
        );
    }

    #[test]
    fn test_permission_policy_wire_form() {
        let doc = PolicyDocument::new().with_statement(
            Statement::allow()
                .with_action("bedrock:*")
                .with_action("aoss:*")
                .with_resource("*"),
        );

        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            serde_json::json!({
                "Version": "2012-10-17",
                "Statement": [{
                    "Effect": "Allow",
                    "Action": ["bedrock:*", "aoss:*"],
                    "Resource": ["*"]
                }]
            })
        );
    }

    #[test]
    fn test_deny_statement() {
        let statement = Statement::deny().with_action("iam:*");
        assert_eq!(statement.effect(), Effect::Deny);
        assert_eq!(statement.actions(), ["iam:*"]);
    }

    #[test]
    fn test_to_json_round_trips_through_serde() {
        let doc = PolicyDocument::assume_role_for_service("crawler-service");
        let json = doc.to_json().unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["Version"], "2012-10-17");
        assert_eq!(parsed["Statement"][0]["Principal"]["Service"], "crawler-service");
    }
}
