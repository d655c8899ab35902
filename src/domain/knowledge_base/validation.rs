//! Crawler and embedding configuration validation

use std::fmt;

use url::Url;

use super::crawler::WebCrawlerConfig;
use crate::domain::error::ProvisionError;

/// Crawl depth bounds accepted by the control plane
pub const MIN_CRAWL_DEPTH: u32 = 1;
pub const MAX_CRAWL_DEPTH: u32 = 25;

/// Fetch rate bounds, URLs per minute
pub const MIN_URLS_PER_MINUTE: u32 = 1;
pub const MAX_URLS_PER_MINUTE: u32 = 300;

/// Embedding dimensionality bounds
pub const MIN_DIMENSIONS: u32 = 1;
pub const MAX_DIMENSIONS: u32 = 8192;

/// Crawler validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum CrawlerValidationError {
    /// No seed URLs configured
    NoSeedUrls,
    /// Seed URL failed to parse or has a non-http(s) scheme
    InvalidSeedUrl { url: String, reason: String },
    /// Crawl depth out of bounds
    InvalidCrawlDepth { value: u32, min: u32, max: u32 },
    /// Rate limit out of bounds
    InvalidRateLimit { value: u32, min: u32, max: u32 },
    /// A cap that must be positive is zero
    ZeroCap { field: &'static str },
    /// An inclusion or exclusion pattern is empty
    EmptyPattern,
    /// Invalid embedding dimensions
    InvalidDimensions { value: u32, min: u32, max: u32 },
}

impl fmt::Display for CrawlerValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSeedUrls => write!(f, "Crawler configuration has no seed URLs"),
            Self::InvalidSeedUrl { url, reason } => {
                write!(f, "Invalid seed URL '{}': {}", url, reason)
            }
            Self::InvalidCrawlDepth { value, min, max } => {
                write!(
                    f,
                    "Invalid crawl depth {}: must be between {} and {}",
                    value, min, max
                )
            }
            Self::InvalidRateLimit { value, min, max } => {
                write!(
                    f,
                    "Invalid rate limit {} URLs/minute: must be between {} and {}",
                    value, min, max
                )
            }
            Self::ZeroCap { field } => write!(f, "{} must be positive", field),
            Self::EmptyPattern => write!(f, "URL patterns cannot be empty"),
            Self::InvalidDimensions { value, min, max } => {
                write!(
                    f,
                    "Invalid embedding dimensions {}: must be between {} and {}",
                    value, min, max
                )
            }
        }
    }
}

impl std::error::Error for CrawlerValidationError {}

impl From<CrawlerValidationError> for ProvisionError {
    fn from(err: CrawlerValidationError) -> Self {
        ProvisionError::validation(err.to_string())
    }
}

/// Validate a seed URL
pub fn validate_seed_url(url: &str) -> Result<(), CrawlerValidationError> {
    let parsed = Url::parse(url).map_err(|e| CrawlerValidationError::InvalidSeedUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(CrawlerValidationError::InvalidSeedUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{scheme}'"),
        }),
    }
}

/// Validate a crawl depth
pub fn validate_crawl_depth(depth: u32) -> Result<(), CrawlerValidationError> {
    if !(MIN_CRAWL_DEPTH..=MAX_CRAWL_DEPTH).contains(&depth) {
        return Err(CrawlerValidationError::InvalidCrawlDepth {
            value: depth,
            min: MIN_CRAWL_DEPTH,
            max: MAX_CRAWL_DEPTH,
        });
    }

    Ok(())
}

/// Validate embedding dimensions
pub fn validate_dimensions(dims: u32) -> Result<(), CrawlerValidationError> {
    if !(MIN_DIMENSIONS..=MAX_DIMENSIONS).contains(&dims) {
        return Err(CrawlerValidationError::InvalidDimensions {
            value: dims,
            min: MIN_DIMENSIONS,
            max: MAX_DIMENSIONS,
        });
    }

    Ok(())
}

/// Validate a whole crawler configuration
pub fn validate_crawler_config(config: &WebCrawlerConfig) -> Result<(), CrawlerValidationError> {
    if config.seed_urls.is_empty() {
        return Err(CrawlerValidationError::NoSeedUrls);
    }

    for seed in &config.seed_urls {
        validate_seed_url(&seed.url)?;
        validate_crawl_depth(seed.max_depth)?;
    }

    if !(MIN_URLS_PER_MINUTE..=MAX_URLS_PER_MINUTE).contains(&config.max_urls_per_minute) {
        return Err(CrawlerValidationError::InvalidRateLimit {
            value: config.max_urls_per_minute,
            min: MIN_URLS_PER_MINUTE,
            max: MAX_URLS_PER_MINUTE,
        });
    }

    if config.max_links_per_page == 0 {
        return Err(CrawlerValidationError::ZeroCap {
            field: "max_links_per_page",
        });
    }

    if config.max_file_size_bytes == 0 {
        return Err(CrawlerValidationError::ZeroCap {
            field: "max_file_size_bytes",
        });
    }

    if config
        .inclusion_patterns
        .iter()
        .chain(&config.exclusion_patterns)
        .any(|p| p.is_empty())
    {
        return Err(CrawlerValidationError::EmptyPattern);
    }

    Ok(())
}
