//! Provision command - ensure the execution role, then create the knowledge
//! base and its web crawler data source

use chrono::Utc;
use clap::Args;
use tracing::info;

use crate::config::{AppConfig, CrawlerSettings, EmbeddingSettings, RoleConfig};
use crate::domain::error::ProvisionError;
use crate::domain::identity::{PolicyDocument, RoleName, RoleSpec, Statement};
use crate::domain::knowledge_base::{EmbeddingConfig, WebCrawlerConfig};
use crate::infrastructure::logging;
use crate::infrastructure::services::ProvisionRequest;

#[derive(Debug, Args)]
pub struct ProvisionArgs {
    /// Target website to crawl (overrides knowledge_base.target_url)
    #[arg(long)]
    pub url: Option<String>,

    /// Display name for the knowledge base (defaults to a dated name)
    #[arg(long)]
    pub name: Option<String>,
}

/// Run one provisioning pass
pub async fn run(args: ProvisionArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_tracing(&config.logging);

    let target_url = args
        .url
        .or_else(|| config.knowledge_base.target_url.clone())
        .ok_or_else(|| {
            ProvisionError::configuration(
                "no target URL configured; pass --url or set knowledge_base.target_url",
            )
        })?;
    let name = args
        .name
        .unwrap_or_else(|| dated_resource_name(&config.knowledge_base.name_prefix));

    let role_spec = build_role_spec(&config.role)?;
    let (role_ensurer, provisioner) = crate::create_provisioner(&config).await;

    info!(url = %target_url, name = %name, "provisioning web crawler knowledge base");

    let role_arn = role_ensurer.ensure(&role_spec).await?;

    let request = ProvisionRequest::new(
        target_url.clone(),
        name,
        role_arn,
        embedding_config(&config.embedding),
        crawler_config(&config.crawler, &target_url),
    );
    let outcome = provisioner.provision(request).await?;

    println!("Knowledge Base ID: {}", outcome.knowledge_base_id);
    println!("Data Source ID: {}", outcome.data_source_id);

    Ok(())
}

fn dated_resource_name(prefix: &str) -> String {
    format!("{}-{}", prefix, Utc::now().format("%Y%m%d"))
}

fn build_role_spec(role: &RoleConfig) -> Result<RoleSpec, ProvisionError> {
    let name = RoleName::new(role.name.as_str())?;
    let trust_policy = PolicyDocument::assume_role_for_service(role.trusted_service.as_str());
    let permission_policy = PolicyDocument::new().with_statement(
        Statement::allow()
            .with_actions(role.allowed_actions.iter().cloned())
            .with_resource(role.resource.as_str()),
    );

    Ok(RoleSpec::new(
        name,
        trust_policy,
        role.policy_name.as_str(),
        permission_policy,
    ))
}

fn embedding_config(settings: &EmbeddingSettings) -> EmbeddingConfig {
    EmbeddingConfig::new(settings.model_arn.as_str(), settings.dimensions)
        .with_data_type(settings.data_type)
}

fn crawler_config(settings: &CrawlerSettings, target_url: &str) -> WebCrawlerConfig {
    let mut config = WebCrawlerConfig::for_site(target_url)
        .with_scope(settings.scope)
        .with_crawl_depth(settings.crawl_depth)
        .with_max_urls_per_minute(settings.max_urls_per_minute)
        .with_max_links_per_page(settings.max_links_per_page)
        .with_max_file_size_bytes(settings.max_file_size_bytes)
        .with_exclusion_patterns(settings.exclusion_patterns.clone())
        .with_respect_robots_txt(settings.respect_robots_txt);

    for pattern in &settings.inclusion_patterns {
        config = config.with_inclusion_pattern(pattern.as_str());
    }

    config
}
