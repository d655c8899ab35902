use serde::Deserialize;

use crate::domain::knowledge_base::crawler::{
    DEFAULT_CRAWL_DEPTH, DEFAULT_MAX_FILE_SIZE_BYTES, DEFAULT_MAX_LINKS_PER_PAGE,
    DEFAULT_MAX_URLS_PER_MINUTE,
};
use crate::domain::knowledge_base::{CrawlScope, EmbeddingDataType, WebCrawlerConfig};

/// Application configuration
///
/// Every literal the provisioner needs lives here rather than in code; the
/// defaults mirror a plain full-site crawl setup. The target URL deliberately
/// has no default and must come from configuration, environment or the CLI.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub role: RoleConfig,
    pub knowledge_base: KnowledgeBaseSettings,
    pub embedding: EmbeddingSettings,
    pub crawler: CrawlerSettings,
    pub aws: AwsSettings,
    pub logging: LoggingConfig,
}

/// Execution role to ensure before provisioning
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoleConfig {
    /// Role name - the idempotency key within the account
    pub name: String,
    /// Name of the inline permission policy attached on creation
    pub policy_name: String,
    /// Managed-service principal allowed to assume the role
    pub trusted_service: String,
    /// Action patterns the permission policy allows
    pub allowed_actions: Vec<String>,
    /// Resource pattern the permission policy applies to
    pub resource: String,
}

impl Default for RoleConfig {
    fn default() -> Self {
        Self {
            name: "BedrockKnowledgeBaseRole".to_string(),
            policy_name: "BedrockKnowledgeBasePolicy".to_string(),
            trusted_service: "bedrock.amazonaws.com".to_string(),
            allowed_actions: vec!["bedrock:*".to_string(), "aoss:*".to_string()],
            resource: "*".to_string(),
        }
    }
}

/// Knowledge base naming and targeting
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KnowledgeBaseSettings {
    /// Site the crawler ingests; no default on purpose
    pub target_url: Option<String>,
    /// Prefix for the generated, dated display name
    pub name_prefix: String,
}

impl Default for KnowledgeBaseSettings {
    fn default() -> Self {
        Self {
            target_url: None,
            name_prefix: "Website-KB".to_string(),
        }
    }
}

/// Embedding model configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmbeddingSettings {
    pub model_arn: String,
    pub dimensions: u32,
    pub data_type: EmbeddingDataType,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            model_arn: "arn:aws:bedrock:us-east-1::foundation-model/amazon.titan-embed-text-v1"
                .to_string(),
            dimensions: 1536,
            data_type: EmbeddingDataType::Float32,
        }
    }
}

/// Crawl limits and URL patterns
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerSettings {
    pub scope: CrawlScope,
    pub crawl_depth: u32,
    pub max_urls_per_minute: u32,
    pub max_links_per_page: u32,
    pub max_file_size_bytes: u64,
    /// Extra inclusion patterns beyond the derived site pattern
    pub inclusion_patterns: Vec<String>,
    pub exclusion_patterns: Vec<String>,
    pub respect_robots_txt: bool,
}

impl Default for CrawlerSettings {
    fn default() -> Self {
        let defaults = WebCrawlerConfig::default();

        Self {
            scope: CrawlScope::FullSite,
            crawl_depth: DEFAULT_CRAWL_DEPTH,
            max_urls_per_minute: DEFAULT_MAX_URLS_PER_MINUTE,
            max_links_per_page: DEFAULT_MAX_LINKS_PER_PAGE,
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            inclusion_patterns: Vec::new(),
            exclusion_patterns: defaults.exclusion_patterns,
            respect_robots_txt: defaults.respect_robots_txt,
        }
    }
}

/// AWS environment overrides
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AwsSettings {
    /// Region override; resolved from the ambient environment when unset
    pub region: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
