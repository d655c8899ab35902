//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, AwsSettings, CrawlerSettings, EmbeddingSettings, KnowledgeBaseSettings, LogFormat,
    LoggingConfig, RoleConfig,
};
