//! Web crawler configuration value object

use serde::{Deserialize, Serialize};

/// Default maximum crawl depth from a seed URL
pub const DEFAULT_CRAWL_DEPTH: u32 = 10;

/// Default fetch rate limit, in URLs per minute
pub const DEFAULT_MAX_URLS_PER_MINUTE: u32 = 60;

/// Default cap on followed links per page
pub const DEFAULT_MAX_LINKS_PER_PAGE: u32 = 100;

/// Default maximum ingested file size (10 MiB)
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10_485_760;

/// How far a crawl may range from its seed URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrawlScope {
    /// Traverse the whole site reachable from the seed
    FullSite,
    /// Ingest only the seed page itself
    SinglePage,
}

/// A crawl starting point with its per-URL settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedUrl {
    /// Seed URL, http(s)
    pub url: String,
    /// Crawl mode for this seed
    pub scope: CrawlScope,
    /// Maximum traversal depth from this seed
    pub max_depth: u32,
}

impl SeedUrl {
    /// Create a full-site seed with the default depth
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            scope: CrawlScope::FullSite,
            max_depth: DEFAULT_CRAWL_DEPTH,
        }
    }

    /// Set the crawl scope
    pub fn with_scope(mut self, scope: CrawlScope) -> Self {
        self.scope = scope;
        self
    }

    /// Set the maximum depth
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }
}

/// Crawl configuration attached to a web crawler data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebCrawlerConfig {
    /// Crawl starting points
    pub seed_urls: Vec<SeedUrl>,
    /// Fetch rate limit
    pub max_urls_per_minute: u32,
    /// Followed-links cap per page
    pub max_links_per_page: u32,
    /// Maximum size of a file to ingest
    pub max_file_size_bytes: u64,
    /// Glob patterns a URL must match to be crawled
    pub inclusion_patterns: Vec<String>,
    /// Glob patterns that exclude a URL from the crawl
    pub exclusion_patterns: Vec<String>,
    /// Whether to honor robots-exclusion directives
    pub respect_robots_txt: bool,
}

impl Default for WebCrawlerConfig {
    fn default() -> Self {
        Self {
            seed_urls: Vec::new(),
            max_urls_per_minute: DEFAULT_MAX_URLS_PER_MINUTE,
            max_links_per_page: DEFAULT_MAX_LINKS_PER_PAGE,
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            inclusion_patterns: Vec::new(),
            exclusion_patterns: default_exclusion_patterns(),
            respect_robots_txt: true,
        }
    }
}

fn default_exclusion_patterns() -> Vec<String> {
    ["*/login*", "*/cart*", "*/search*", "*.jpg", "*.png", "*.gif"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl WebCrawlerConfig {
    /// Create an empty configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration seeded from a target site, with the site-scoped
    /// inclusion pattern derived from the URL
    pub fn for_site(url: impl Into<String>) -> Self {
        let url = url.into();
        let pattern = format!("{}/*", url.trim_end_matches('/'));

        let mut config = Self::default();
        config.seed_urls.push(SeedUrl::new(url));
        config.inclusion_patterns.push(pattern);
        config
    }

    /// Add a seed URL
    pub fn with_seed(mut self, seed: SeedUrl) -> Self {
        self.seed_urls.push(seed);
        self
    }

    /// Set the crawl scope on every seed
    pub fn with_scope(mut self, scope: CrawlScope) -> Self {
        for seed in &mut self.seed_urls {
            seed.scope = scope;
        }
        self
    }

    /// Set the maximum depth on every seed
    pub fn with_crawl_depth(mut self, depth: u32) -> Self {
        for seed in &mut self.seed_urls {
            seed.max_depth = depth;
        }
        self
    }

    /// Set the fetch rate limit
    pub fn with_max_urls_per_minute(mut self, limit: u32) -> Self {
        self.max_urls_per_minute = limit;
        self
    }

    /// Set the per-page link cap
    pub fn with_max_links_per_page(mut self, cap: u32) -> Self {
        self.max_links_per_page = cap;
        self
    }

    /// Set the maximum ingested file size
    pub fn with_max_file_size_bytes(mut self, bytes: u64) -> Self {
        self.max_file_size_bytes = bytes;
        self
    }

    /// Add an inclusion pattern
    pub fn with_inclusion_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.inclusion_patterns.push(pattern.into());
        self
    }

    /// Replace the exclusion patterns
    pub fn with_exclusion_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclusion_patterns = patterns;
        self
    }

    /// Set robots-directive compliance
    pub fn with_respect_robots_txt(mut self, respect: bool) -> Self {
        self.respect_robots_txt = respect;
        self
    }
}
