// Re-export modules
pub mod assemble;
pub mod classify;
pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod filter;
pub mod fragment;
pub mod patterns;
pub mod records;

// Re-export commonly used types for convenience
pub use error::ExtractError;
pub use records::ProductRecord;

use assemble::RecordAssembler;
use config::ScrapeConfig;
use fetch::ListingFetcher;

/// Main builder for extracting product records from a listing page URL.
///
/// Drives the render/fetch collaborator, then runs the classification core
/// (candidate filter, field classifier, record assembler) over the
/// materialized fragments.
pub struct Listing {
    url: String,
    config: Option<ScrapeConfig>,
    max_products: Option<usize>,
    webdriver_url: Option<String>,
}

impl Listing {
    /// Create a new Listing builder for the given page URL
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            config: None,
            max_products: None,
            webdriver_url: None,
        }
    }

    /// Set the maximum number of product records to extract
    pub fn with_max_products(mut self, max_products: usize) -> Self {
        self.max_products = Some(max_products);
        self
    }

    /// Set the WebDriver URL to connect to
    pub fn with_webdriver_url(mut self, webdriver_url: &str) -> Self {
        self.webdriver_url = Some(webdriver_url.to_string());
        self
    }

    /// Apply a full configuration; builder overrides still win
    pub fn with_config(mut self, config: ScrapeConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = ScrapeConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Render the page and extract product records.
    ///
    /// Fails with `ExtractError::NoCandidates` when no candidate fragment
    /// survives filtering; per-fragment classification failures are dropped
    /// and never surface here.
    pub async fn extract(self) -> Result<Vec<ProductRecord>, ExtractError> {
        let mut config = self
            .config
            .unwrap_or_else(|| ScrapeConfig::new(&self.url));
        config.start_url = self.url;

        if let Some(max_products) = self.max_products {
            config.max_products = max_products;
        }

        if let Some(webdriver_url) = self.webdriver_url {
            config.webdriver_url = webdriver_url;
        } else if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            // Override the WebDriver URL with an environment variable if provided
            if !webdriver_url.is_empty() {
                config.webdriver_url = webdriver_url;
            }
        }

        let max_products = config.max_products;
        let fetcher = ListingFetcher::new(config);
        let fragments = fetcher.fetch_candidate_fragments().await?;

        RecordAssembler::new().extract(fragments, max_products)
    }
}
