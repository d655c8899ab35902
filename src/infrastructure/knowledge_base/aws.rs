//! Knowledge base control plane over AWS Bedrock Agent

use async_trait::async_trait;
use aws_sdk_bedrockagent::Client as BedrockAgentClient;
use aws_sdk_bedrockagent::types as bedrock;

use crate::domain::error::ProvisionError;
use crate::domain::knowledge_base::{
    CrawlScope, CreateDataSourceRequest, CreateKnowledgeBaseRequest, DataSourceId, EmbeddingConfig,
    EmbeddingDataType, KnowledgeBaseControlPlane, KnowledgeBaseId, WebCrawlerConfig,
};
use crate::infrastructure::aws::classify_sdk_error;

/// Real AWS Bedrock Agent control plane implementation
#[derive(Debug, Clone)]
pub struct AwsKnowledgeBaseControlPlane {
    client: BedrockAgentClient,
}

impl AwsKnowledgeBaseControlPlane {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: BedrockAgentClient::new(config),
        }
    }

    pub fn from_client(client: BedrockAgentClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl KnowledgeBaseControlPlane for AwsKnowledgeBaseControlPlane {
    async fn create_knowledge_base(
        &self,
        request: &CreateKnowledgeBaseRequest,
    ) -> Result<KnowledgeBaseId, ProvisionError> {
        let configuration = build_knowledge_base_configuration(&request.embedding)?;

        let output = self
            .client
            .create_knowledge_base()
            .name(&request.name)
            .description(&request.description)
            .role_arn(request.role_arn.as_str())
            .knowledge_base_configuration(configuration)
            .send()
            .await
            .map_err(|err| classify_sdk_error("create_knowledge_base", err))?;

        let id = output
            .knowledge_base()
            .map(|kb| kb.knowledge_base_id())
            .unwrap_or_default();

        if id.is_empty() {
            return Err(ProvisionError::service(
                "control plane returned no knowledge base identifier",
            ));
        }

        Ok(KnowledgeBaseId::new(id))
    }

    async fn create_data_source(
        &self,
        request: &CreateDataSourceRequest,
    ) -> Result<DataSourceId, ProvisionError> {
        let configuration = build_data_source_configuration(&request.crawler)?;

        let output = self
            .client
            .create_data_source()
            .knowledge_base_id(request.knowledge_base_id.as_str())
            .name(&request.name)
            .description(&request.description)
            .data_source_configuration(configuration)
            .send()
            .await
            .map_err(|err| classify_sdk_error("create_data_source", err))?;

        let id = output
            .data_source()
            .map(|ds| ds.data_source_id())
            .unwrap_or_default();

        if id.is_empty() {
            return Err(ProvisionError::service(
                "control plane returned no data source identifier",
            ));
        }

        Ok(DataSourceId::new(id))
    }
}

fn build_knowledge_base_configuration(
    embedding: &EmbeddingConfig,
) -> Result<bedrock::KnowledgeBaseConfiguration, ProvisionError> {
    let model_configuration = bedrock::EmbeddingModelConfiguration::builder()
        .bedrock_embedding_model_configuration(
            bedrock::BedrockEmbeddingModelConfiguration::builder()
                .dimensions(embedding.dimensions as i32)
                .embedding_data_type(embedding_data_type(embedding.data_type))
                .build(),
        )
        .build();

    let vector_configuration = bedrock::VectorKnowledgeBaseConfiguration::builder()
        .embedding_model_arn(&embedding.model_arn)
        .embedding_model_configuration(model_configuration)
        .build()
        .map_err(|err| ProvisionError::validation(format!("invalid embedding configuration: {err}")))?;

    bedrock::KnowledgeBaseConfiguration::builder()
        .r#type(bedrock::KnowledgeBaseType::Vector)
        .vector_knowledge_base_configuration(vector_configuration)
        .build()
        .map_err(|err| {
            ProvisionError::validation(format!("invalid knowledge base configuration: {err}"))
        })
}

fn embedding_data_type(data_type: EmbeddingDataType) -> bedrock::EmbeddingDataType {
    match data_type {
        EmbeddingDataType::Float32 => bedrock::EmbeddingDataType::Float32,
        EmbeddingDataType::Binary => bedrock::EmbeddingDataType::Binary,
    }
}

fn build_data_source_configuration(
    crawler: &WebCrawlerConfig,
) -> Result<bedrock::DataSourceConfiguration, ProvisionError> {
    let invalid =
        |err: &dyn std::fmt::Display| ProvisionError::validation(format!("invalid crawler configuration: {err}"));

    let mut url_configuration = bedrock::UrlConfiguration::builder();
    for seed in &crawler.seed_urls {
        url_configuration = url_configuration.seed_urls(
            bedrock::SeedUrl::builder()
                .url(&seed.url)
                .build(),
        );
    }

    let source_configuration = bedrock::WebSourceConfiguration::builder()
        .url_configuration(url_configuration.build())
        .build();

    let mut limits = bedrock::WebCrawlerLimits::builder().rate_limit(crawler.max_urls_per_minute as i32);
    // single-page seeds ingest exactly the seed document; depth, link and
    // file-size caps are enforced by the managed crawler itself and are not
    // part of the control-plane request
    if crawler
        .seed_urls
        .iter()
        .all(|seed| seed.scope == CrawlScope::SinglePage)
    {
        limits = limits.max_pages(1);
    }

    let mut crawler_configuration = bedrock::WebCrawlerConfiguration::builder()
        .crawler_limits(limits.build())
        .scope(bedrock::WebScopeType::HostOnly);
    for pattern in &crawler.inclusion_patterns {
        crawler_configuration = crawler_configuration.inclusion_filters(pattern);
    }
    for pattern in &crawler.exclusion_patterns {
        crawler_configuration = crawler_configuration.exclusion_filters(pattern);
    }

    let web_configuration = bedrock::WebDataSourceConfiguration::builder()
        .source_configuration(source_configuration)
        .crawler_configuration(crawler_configuration.build())
        .build();

    bedrock::DataSourceConfiguration::builder()
        .r#type(bedrock::DataSourceType::Web)
        .web_configuration(web_configuration)
        .build()
        .map_err(|err| invalid(&err))
}
