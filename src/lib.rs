//! Knowledge base provisioner
//!
//! A small idempotent provisioning tool with two sequential components:
//! - a role ensurer that converges a named execution role into existence
//!   (create-or-fetch, idempotent by role name)
//! - a provisioner that creates a knowledge base and attaches a web crawler
//!   data source to it (pass-through, not idempotent: repeated runs create
//!   distinct resources)
//!
//! Both talk to their remote subsystems through client traits, so the
//! orchestration is testable without an AWS account.

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use infrastructure::identity::AwsIdentityClient;
use infrastructure::knowledge_base::AwsKnowledgeBaseControlPlane;
use infrastructure::services::{Provisioner, RoleEnsurer};

/// Build both provisioning services against the ambient AWS environment
pub async fn create_provisioner(config: &AppConfig) -> (RoleEnsurer, Provisioner) {
    let sdk_config = load_sdk_config(&config.aws).await;

    let identity = AwsIdentityClient::new(&sdk_config);
    let control_plane = AwsKnowledgeBaseControlPlane::new(&sdk_config);

    (
        RoleEnsurer::new(Arc::new(identity)),
        Provisioner::new(Arc::new(control_plane)),
    )
}

async fn load_sdk_config(aws: &config::AwsSettings) -> aws_config::SdkConfig {
    let defaults = aws_config::defaults(aws_config::BehaviorVersion::latest());

    match &aws.region {
        Some(region) => {
            defaults
                .region(aws_config::Region::new(region.clone()))
                .load()
                .await
        }
        None => defaults.load().await,
    }
}
