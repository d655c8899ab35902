//! Provisioner: parent knowledge base + child web crawler data source

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::domain::error::ProvisionError;
use crate::domain::identity::RoleArn;
use crate::domain::knowledge_base::validation::validate_crawler_config;
use crate::domain::knowledge_base::{
    CreateDataSourceRequest, CreateKnowledgeBaseRequest, DataSourceId, EmbeddingConfig,
    KnowledgeBaseControlPlane, KnowledgeBaseId, WebCrawlerConfig,
};

/// Inputs for one provisioning run
#[derive(Debug, Clone)]
pub struct ProvisionRequest {
    /// Site the crawler ingests; also templated into the descriptions
    pub target_url: String,
    /// Display name for the knowledge base
    pub name: String,
    /// Execution role owning the knowledge base
    pub role_arn: RoleArn,
    /// Embedding configuration for the vector store
    pub embedding: EmbeddingConfig,
    /// Crawl configuration for the data source
    pub crawler: WebCrawlerConfig,
}

impl ProvisionRequest {
    pub fn new(
        target_url: impl Into<String>,
        name: impl Into<String>,
        role_arn: RoleArn,
        embedding: EmbeddingConfig,
        crawler: WebCrawlerConfig,
    ) -> Self {
        Self {
            target_url: target_url.into(),
            name: name.into(),
            role_arn,
            embedding,
            crawler,
        }
    }

    fn validate(&self) -> Result<(), ProvisionError> {
        if self.name.is_empty() {
            return Err(ProvisionError::validation("resource name cannot be empty"));
        }

        if self.role_arn.is_empty() {
            return Err(ProvisionError::validation("role identifier cannot be empty"));
        }

        validate_crawler_config(&self.crawler)?;
        Ok(())
    }
}

/// Identifiers minted by one provisioning run
#[derive(Debug, Clone)]
pub struct ProvisionOutcome {
    pub knowledge_base_id: KnowledgeBaseId,
    pub data_source_id: DataSourceId,
    pub provisioned_at: DateTime<Utc>,
}

/// Creates a knowledge base and its web crawler data source, in that order.
///
/// Not idempotent: the control plane assigns fresh identifiers on every call,
/// so a retry after a partial failure double-provisions. If the data source
/// step fails the parent knowledge base is left in place; the propagated
/// error names the orphaned identifier.
#[derive(Debug, Clone)]
pub struct Provisioner {
    control_plane: Arc<dyn KnowledgeBaseControlPlane>,
}

impl Provisioner {
    pub fn new(control_plane: Arc<dyn KnowledgeBaseControlPlane>) -> Self {
        Self { control_plane }
    }

    pub async fn provision(
        &self,
        request: ProvisionRequest,
    ) -> Result<ProvisionOutcome, ProvisionError> {
        request.validate()?;

        let kb_request = CreateKnowledgeBaseRequest::new(
            &request.name,
            format!("Web crawler knowledge base for {}", request.target_url),
            request.role_arn.clone(),
            request.embedding.clone(),
        );

        info!(name = %request.name, url = %request.target_url, "creating knowledge base");
        let knowledge_base_id = self.control_plane.create_knowledge_base(&kb_request).await?;
        info!(knowledge_base_id = %knowledge_base_id, "knowledge base created");

        let ds_request = CreateDataSourceRequest::new(
            knowledge_base_id.clone(),
            format!("{}-webcrawler", request.name),
            format!("Web crawler for {}", request.target_url),
            request.crawler.clone(),
        );

        let data_source_id = match self.control_plane.create_data_source(&ds_request).await {
            Ok(id) => id,
            Err(err) => {
                warn!(
                    knowledge_base_id = %knowledge_base_id,
                    "data source creation failed, knowledge base left in place"
                );
                return Err(err.context(format!(
                    "data source creation failed, orphaned knowledge base '{knowledge_base_id}'"
                )));
            }
        };

        info!(data_source_id = %data_source_id, "data source created");

        Ok(ProvisionOutcome {
            knowledge_base_id,
            data_source_id,
            provisioned_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::knowledge_base::provider::mock::MockControlPlane;

    fn request(name: &str) -> ProvisionRequest {
        ProvisionRequest::new(
            "https://example.org",
            name,
            RoleArn::new("arn:aws:iam::123456789012:role/KBRole"),
            EmbeddingConfig::new("amazon.titan-embed-text-v1", 1536),
            WebCrawlerConfig::for_site("https://example.org")
                .with_crawl_depth(10)
                .with_max_urls_per_minute(60),
        )
    }

    #[tokio::test]
    async fn test_provision_returns_distinct_identifiers() {
        let plane = Arc::new(MockControlPlane::new());
        let provisioner = Provisioner::new(plane.clone());

        let outcome = provisioner.provision(request("Example-KB")).await.unwrap();

        assert!(!outcome.knowledge_base_id.is_empty());
        assert!(!outcome.data_source_id.is_empty());
        assert_ne!(
            outcome.knowledge_base_id.as_str(),
            outcome.data_source_id.as_str()
        );
    }

    #[tokio::test]
    async fn test_repeat_provision_creates_distinct_resources() {
        let plane = Arc::new(MockControlPlane::new());
        let provisioner = Provisioner::new(plane.clone());

        let first = provisioner.provision(request("Example-KB")).await.unwrap();
        let second = provisioner.provision(request("Example-KB")).await.unwrap();

        // no dedup by display name: every run mints a new knowledge base
        assert_ne!(first.knowledge_base_id, second.knowledge_base_id);
        assert_eq!(plane.knowledge_base_calls(), 2);
    }

    #[tokio::test]
    async fn test_data_source_created_under_returned_parent() {
        let plane = Arc::new(MockControlPlane::new());
        let provisioner = Provisioner::new(plane.clone());

        let outcome = provisioner.provision(request("Example-KB")).await.unwrap();

        let ds_requests = plane.ds_requests();
        assert_eq!(ds_requests.len(), 1);
        assert_eq!(ds_requests[0].knowledge_base_id, outcome.knowledge_base_id);
        assert_eq!(ds_requests[0].name, "Example-KB-webcrawler");
    }

    #[tokio::test]
    async fn test_parent_failure_short_circuits() {
        let plane = Arc::new(MockControlPlane::new().with_knowledge_base_failure());
        let provisioner = Provisioner::new(plane.clone());

        let err = provisioner.provision(request("Example-KB")).await.unwrap_err();

        assert!(matches!(err, ProvisionError::Service { .. }));
        assert_eq!(plane.data_source_calls(), 0);
    }

    #[tokio::test]
    async fn test_child_failure_names_orphaned_parent() {
        let plane = Arc::new(MockControlPlane::new().with_data_source_failure());
        let provisioner = Provisioner::new(plane.clone());

        let err = provisioner.provision(request("Example-KB")).await.unwrap_err();

        assert_eq!(plane.knowledge_base_calls(), 1);
        assert!(err.to_string().contains("orphaned knowledge base 'KB0001'"));
        // kind preserved so callers can still classify the failure
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_crawler_targets_caller_supplied_url() {
        let plane = Arc::new(MockControlPlane::new());
        let provisioner = Provisioner::new(plane.clone());

        let mut req = request("Example-KB");
        req.target_url = "https://docs.example.org".to_string();
        req.crawler = WebCrawlerConfig::for_site("https://docs.example.org");

        provisioner.provision(req).await.unwrap();

        let ds_requests = plane.ds_requests();
        assert_eq!(
            ds_requests[0].crawler.seed_urls[0].url,
            "https://docs.example.org"
        );
        assert_eq!(
            ds_requests[0].description,
            "Web crawler for https://docs.example.org"
        );
    }

    #[tokio::test]
    async fn test_invalid_crawler_rejected_before_any_call() {
        let plane = Arc::new(MockControlPlane::new());
        let provisioner = Provisioner::new(plane.clone());

        let mut req = request("Example-KB");
        req.crawler = WebCrawlerConfig::new(); // no seeds

        let err = provisioner.provision(req).await.unwrap_err();

        assert!(matches!(err, ProvisionError::Validation { .. }));
        assert_eq!(plane.knowledge_base_calls(), 0);
    }

    #[tokio::test]
    async fn test_descriptions_templated_from_target_url() {
        let plane = Arc::new(MockControlPlane::new());
        let provisioner = Provisioner::new(plane.clone());

        provisioner.provision(request("Example-KB")).await.unwrap();

        let kb_requests = plane.kb_requests();
        assert_eq!(
            kb_requests[0].description,
            "Web crawler knowledge base for https://example.org"
        );
    }
}
