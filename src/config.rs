use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for one listing extraction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Listing page URL to extract products from
    pub start_url: String,

    /// Maximum number of product records to keep
    #[serde(default = "default_max_products")]
    pub max_products: usize,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// User agent presented by the rendered browser session. An explicit
    /// value, not a randomly rotated pool, so runs are reproducible.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// CSS selector for candidate item containers on the listing page
    #[serde(default = "default_container_selector")]
    pub container_selector: String,

    /// Number of scroll-to-bottom passes to trigger lazy-loaded items
    #[serde(default = "default_scroll_passes")]
    pub scroll_passes: usize,

    /// Delay after each scroll pass, in milliseconds
    #[serde(default = "default_scroll_settle_ms")]
    pub scroll_settle_ms: u64,

    /// Delay after initial navigation, in milliseconds
    #[serde(default = "default_page_settle_ms")]
    pub page_settle_ms: u64,
}

impl ScrapeConfig {
    /// Create a new configuration with default values
    pub fn new(start_url: &str) -> Self {
        Self {
            start_url: start_url.to_string(),
            max_products: default_max_products(),
            webdriver_url: default_webdriver_url(),
            user_agent: default_user_agent(),
            container_selector: default_container_selector(),
            scroll_passes: default_scroll_passes(),
            scroll_settle_ms: default_scroll_settle_ms(),
            page_settle_ms: default_page_settle_ms(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

/// Default value for max_products
fn default_max_products() -> usize {
    10
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default user agent
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/91.0.4472.124 Safari/537.36"
        .to_string()
}

/// Default container selector for search-result style listing pages
fn default_container_selector() -> String {
    "div[data-component-type='s-search-result']".to_string()
}

/// Default number of scroll passes
fn default_scroll_passes() -> usize {
    3
}

/// Default post-scroll settle delay
fn default_scroll_settle_ms() -> u64 {
    3000
}

/// Default post-navigation settle delay
fn default_page_settle_ms() -> u64 {
    5000
}
