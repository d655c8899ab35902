//! Knowledge base and data source types

use serde::{Deserialize, Serialize};

use super::crawler::WebCrawlerConfig;
use crate::domain::identity::RoleArn;

/// Opaque knowledge base identifier assigned by the control plane
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeBaseId(String);

impl KnowledgeBaseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for KnowledgeBaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque data source identifier, scoped to its parent knowledge base
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataSourceId(String);

impl DataSourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for DataSourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Numeric precision of the stored vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingDataType {
    Float32,
    Binary,
}

impl std::fmt::Display for EmbeddingDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float32 => write!(f, "FLOAT32"),
            Self::Binary => write!(f, "BINARY"),
        }
    }
}

/// Configuration for embedding generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Model identifier used for generating embeddings
    pub model_arn: String,
    /// Embedding dimensions
    pub dimensions: u32,
    /// Numeric precision tag
    pub data_type: EmbeddingDataType,
}

impl EmbeddingConfig {
    /// Create a new embedding configuration with float32 vectors
    pub fn new(model_arn: impl Into<String>, dimensions: u32) -> Self {
        Self {
            model_arn: model_arn.into(),
            dimensions,
            data_type: EmbeddingDataType::Float32,
        }
    }

    /// Set the data type
    pub fn with_data_type(mut self, data_type: EmbeddingDataType) -> Self {
        self.data_type = data_type;
        self
    }
}

/// Request to create the parent knowledge base
#[derive(Debug, Clone)]
pub struct CreateKnowledgeBaseRequest {
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Owning execution role
    pub role_arn: RoleArn,
    /// Embedding configuration
    pub embedding: EmbeddingConfig,
}

impl CreateKnowledgeBaseRequest {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        role_arn: RoleArn,
        embedding: EmbeddingConfig,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            role_arn,
            embedding,
        }
    }
}

/// Request to create a web crawler data source under a knowledge base
#[derive(Debug, Clone)]
pub struct CreateDataSourceRequest {
    /// Parent knowledge base
    pub knowledge_base_id: KnowledgeBaseId,
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Crawl configuration, attached verbatim
    pub crawler: WebCrawlerConfig,
}

impl CreateDataSourceRequest {
    pub fn new(
        knowledge_base_id: KnowledgeBaseId,
        name: impl Into<String>,
        description: impl Into<String>,
        crawler: WebCrawlerConfig,
    ) -> Self {
        Self {
            knowledge_base_id,
            name: name.into(),
            description: description.into(),
            crawler,
        }
    }
}
