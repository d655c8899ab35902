//! Knowledge base control plane trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::entity::{
    CreateDataSourceRequest, CreateKnowledgeBaseRequest, DataSourceId, KnowledgeBaseId,
};
use crate::domain::error::ProvisionError;

/// Client trait for the managed knowledge-base control plane
///
/// Both operations are pass-through creates: the control plane assigns the
/// identifiers, and repeated calls with the same display name create distinct
/// resources.
#[async_trait]
pub trait KnowledgeBaseControlPlane: Send + Sync + Debug {
    /// Create the parent knowledge base, returning its assigned id
    async fn create_knowledge_base(
        &self,
        request: &CreateKnowledgeBaseRequest,
    ) -> Result<KnowledgeBaseId, ProvisionError>;

    /// Create a web crawler data source under an existing knowledge base
    async fn create_data_source(
        &self,
        request: &CreateDataSourceRequest,
    ) -> Result<DataSourceId, ProvisionError>;
}
