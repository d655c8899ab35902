//! Role ensurer: create-or-fetch convergence for the execution role

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::error::ProvisionError;
use crate::domain::identity::{IdentityClient, RoleArn, RoleSpec};

/// Ensures a named execution role exists, idempotently.
///
/// The role name is the idempotency key: the identity subsystem's uniqueness
/// constraint turns a second create into an `AlreadyExists` error, which this
/// service recovers from by fetching the existing role. On the fetch path the
/// existing inline policy is left untouched.
#[derive(Debug, Clone)]
pub struct RoleEnsurer {
    identity: Arc<dyn IdentityClient>,
}

impl RoleEnsurer {
    pub fn new(identity: Arc<dyn IdentityClient>) -> Self {
        Self { identity }
    }

    /// Converge the role into existence and return its durable identifier.
    ///
    /// Only the `AlreadyExists` kind takes the fallback path; every other
    /// error, including `NotFound` from the fallback fetch itself, propagates
    /// unchanged.
    pub async fn ensure(&self, spec: &RoleSpec) -> Result<RoleArn, ProvisionError> {
        spec.validate()?;

        match self.identity.create_role(&spec.name, &spec.trust_policy).await {
            Ok(arn) => {
                self.identity
                    .put_inline_policy(&spec.name, &spec.policy_name, &spec.permission_policy)
                    .await?;

                info!(role = %spec.name, arn = %arn, "role created and permission policy attached");
                Ok(arn)
            }
            Err(err) if err.is_already_exists() => {
                debug!(role = %spec.name, "role already exists, fetching existing identifier");
                let arn = self.identity.get_role(&spec.name).await?;

                info!(role = %spec.name, arn = %arn, "reusing existing role");
                Ok(arn)
            }
            Err(err) => Err(err),
        }
    }
}
