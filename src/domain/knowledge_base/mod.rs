//! Knowledge base, data source and crawler configuration model

pub mod crawler;
pub mod entity;
pub mod provider;
pub mod validation;

pub use crawler::{CrawlScope, SeedUrl, WebCrawlerConfig};
pub use entity::{
    CreateDataSourceRequest, CreateKnowledgeBaseRequest, DataSourceId, EmbeddingConfig,
    EmbeddingDataType, KnowledgeBaseId,
};
pub use provider::KnowledgeBaseControlPlane;
pub use validation::CrawlerValidationError;
