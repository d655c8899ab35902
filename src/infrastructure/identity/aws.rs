//! Identity client over AWS IAM

use async_trait::async_trait;
use aws_sdk_iam::Client as IamClient;

use crate::domain::error::ProvisionError;
use crate::domain::identity::{IdentityClient, PolicyDocument, RoleArn, RoleName};
use crate::infrastructure::aws::classify_sdk_error;

/// Real AWS IAM client implementation
#[derive(Debug, Clone)]
pub struct AwsIdentityClient {
    client: IamClient,
}

impl AwsIdentityClient {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: IamClient::new(config),
        }
    }

    pub fn from_client(client: IamClient) -> Self {
        Self { client }
    }
}

fn role_arn_from(role: Option<&aws_sdk_iam::types::Role>) -> Result<RoleArn, ProvisionError> {
    let arn = role.map(|r| r.arn()).unwrap_or_default();

    if arn.is_empty() {
        return Err(ProvisionError::service(
            "identity subsystem returned no role identifier",
        ));
    }

    Ok(RoleArn::new(arn))
}

#[async_trait]
impl IdentityClient for AwsIdentityClient {
    async fn create_role(
        &self,
        name: &RoleName,
        trust_policy: &PolicyDocument,
    ) -> Result<RoleArn, ProvisionError> {
        let document = trust_policy.to_json()?;

        let output = self
            .client
            .create_role()
            .role_name(name.as_str())
            .assume_role_policy_document(document)
            .send()
            .await
            .map_err(|err| classify_sdk_error("create_role", err))?;

        role_arn_from(output.role())
    }

    async fn get_role(&self, name: &RoleName) -> Result<RoleArn, ProvisionError> {
        let output = self
            .client
            .get_role()
            .role_name(name.as_str())
            .send()
            .await
            .map_err(|err| classify_sdk_error("get_role", err))?;

        role_arn_from(output.role())
    }

    async fn put_inline_policy(
        &self,
        name: &RoleName,
        policy_name: &str,
        policy: &PolicyDocument,
    ) -> Result<(), ProvisionError> {
        let document = policy.to_json()?;

        self.client
            .put_role_policy()
            .role_name(name.as_str())
            .policy_name(policy_name)
            .policy_document(document)
            .send()
            .await
            .map_err(|err| classify_sdk_error("put_role_policy", err))?;

        Ok(())
    }
}
