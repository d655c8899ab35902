//! Identity subsystem client trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::policy::PolicyDocument;
use super::role::{RoleArn, RoleName};
use crate::domain::error::ProvisionError;

/// Client trait for the identity subsystem, for dependency injection
///
/// Implementations translate between these operations and the concrete
/// identity API. `create_role` must fail with an `AlreadyExists` error kind
/// when the name is taken; everything else maps onto the provisioning error
/// taxonomy.
#[async_trait]
pub trait IdentityClient: Send + Sync + Debug {
    /// Create a role with the given trust policy, returning its durable identifier
    async fn create_role(
        &self,
        name: &RoleName,
        trust_policy: &PolicyDocument,
    ) -> Result<RoleArn, ProvisionError>;

    /// Fetch an existing role by name
    async fn get_role(&self, name: &RoleName) -> Result<RoleArn, ProvisionError>;

    /// Attach (or overwrite) an inline permission policy on the role
    async fn put_inline_policy(
        &self,
        name: &RoleName,
        policy_name: &str,
        policy: &PolicyDocument,
    ) -> Result<(), ProvisionError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Mock identity client for testing
    ///
    /// Enforces name uniqueness the way the remote subsystem does, which is
    /// the mechanism the role ensurer's idempotency rests on.
    #[derive(Debug, Default)]
    pub struct MockIdentityClient {
        roles: Mutex<HashMap<String, String>>,
        create_calls: AtomicUsize,
        get_calls: AtomicUsize,
        put_policy_calls: AtomicUsize,
        deny_create: AtomicBool,
        get_not_found: AtomicBool,
    }

    impl MockIdentityClient {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populate an existing role
        pub fn with_existing_role(self, name: &str) -> Self {
            self.roles
                .lock()
                .unwrap()
                .insert(name.to_string(), mock_arn(name));
            self
        }

        /// Make create_role fail with an authorization error
        pub fn with_create_denied(self) -> Self {
            self.deny_create.store(true, Ordering::SeqCst);
            self
        }

        /// Make get_role report the role as missing regardless of state
        pub fn with_get_not_found(self) -> Self {
            self.get_not_found.store(true, Ordering::SeqCst);
            self
        }

        pub fn create_calls(&self) -> usize {
            self.create_calls.load(Ordering::SeqCst)
        }

        pub fn get_calls(&self) -> usize {
            self.get_calls.load(Ordering::SeqCst)
        }

        pub fn put_policy_calls(&self) -> usize {
            self.put_policy_calls.load(Ordering::SeqCst)
        }

        /// Number of roles that currently exist
        pub fn role_count(&self) -> usize {
            self.roles.lock().unwrap().len()
        }
    }

    fn mock_arn(name: &str) -> String {
        format!("arn:aws:iam::123456789012:role/{name}")
    }

    #[async_trait]
    impl IdentityClient for MockIdentityClient {
        async fn create_role(
            &self,
            name: &RoleName,
            _trust_policy: &PolicyDocument,
        ) -> Result<RoleArn, ProvisionError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);

            if self.deny_create.load(Ordering::SeqCst) {
                return Err(ProvisionError::authorization(
                    "not authorized to perform iam:CreateRole",
                ));
            }

            let mut roles = self.roles.lock().unwrap();
            if roles.contains_key(name.as_str()) {
                return Err(ProvisionError::already_exists(format!(
                    "role '{name}' already exists"
                )));
            }

            let arn = mock_arn(name.as_str());
            roles.insert(name.as_str().to_string(), arn.clone());
            Ok(RoleArn::new(arn))
        }

        async fn get_role(&self, name: &RoleName) -> Result<RoleArn, ProvisionError> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);

            if self.get_not_found.load(Ordering::SeqCst) {
                return Err(ProvisionError::not_found(format!("role '{name}' not found")));
            }

            self.roles
                .lock()
                .unwrap()
                .get(name.as_str())
                .map(|arn| RoleArn::new(arn.clone()))
                .ok_or_else(|| ProvisionError::not_found(format!("role '{name}' not found")))
        }

        async fn put_inline_policy(
            &self,
            name: &RoleName,
            _policy_name: &str,
            _policy: &PolicyDocument,
        ) -> Result<(), ProvisionError> {
            self.put_policy_calls.fetch_add(1, Ordering::SeqCst);

            if !self.roles.lock().unwrap().contains_key(name.as_str()) {
                return Err(ProvisionError::not_found(format!("role '{name}' not found")));
            }

            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn name(s: &str) -> RoleName {
            RoleName::new(s).unwrap()
        }

        #[tokio::test]
        async fn test_mock_create_and_get() {
            let client = MockIdentityClient::new();
            let trust = PolicyDocument::assume_role_for_service("bedrock.amazonaws.com");

            let created = client.create_role(&name("KBRole"), &trust).await.unwrap();
            let fetched = client.get_role(&name("KBRole")).await.unwrap();

            assert_eq!(created, fetched);
            assert_eq!(client.role_count(), 1);
        }

        #[tokio::test]
        async fn test_mock_duplicate_create_conflicts() {
            let client = MockIdentityClient::new().with_existing_role("KBRole");
            let trust = PolicyDocument::new();

            let err = client.create_role(&name("KBRole"), &trust).await.unwrap_err();
            assert!(err.is_already_exists());
        }

        #[tokio::test]
        async fn test_mock_put_policy_requires_role() {
            let client = MockIdentityClient::new();
            let policy = PolicyDocument::new();

            let result = client
                .put_inline_policy(&name("missing"), "Policy", &policy)
                .await;
            assert!(result.is_err());
        }
    }
}
