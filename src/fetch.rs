use crate::config::ScrapeConfig;
use crate::error::{ExtractError, FragmentResult};
use crate::fragment::{Node, PageFragment};
use fantoccini::{Client, ClientBuilder};
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use url::Url;

/// Render/fetch collaborator: drives a WebDriver session to load and render
/// the listing page, then materializes candidate item regions into
/// read-only `PageFragment`s for the classification core.
pub struct ListingFetcher {
    config: ScrapeConfig,
}

impl ListingFetcher {
    /// Create a fetcher for the given configuration. The user agent and all
    /// timing values come from the config; nothing is read from module state.
    pub fn new(config: ScrapeConfig) -> Self {
        Self { config }
    }

    /// Load, render, and materialize the page's candidate fragments.
    ///
    /// WebDriver failures propagate unchanged; per-fragment problems do not
    /// exist at this level because fragments are cut from a single page
    /// source snapshot.
    pub async fn fetch_candidate_fragments(&self) -> Result<Vec<FragmentResult>, ExtractError> {
        let client = self.connect().await?;

        let result = self.render_and_collect(&client).await;

        if let Err(e) = client.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }

        result
    }

    /// Connect to the configured WebDriver URL, falling back to common
    /// alternative ports when it is unreachable
    async fn connect(&self) -> Result<Client, ExtractError> {
        let mut last_err = match self.try_connect(&self.config.webdriver_url).await {
            Ok(client) => return Ok(client),
            Err(e) => {
                ::log::error!(
                    "Failed to connect to WebDriver at {}: {}",
                    self.config.webdriver_url,
                    e
                );
                e
            }
        };

        let fallback_urls = [
            "http://localhost:9515", // ChromeDriver default
            "http://localhost:4723", // Appium default
            "http://127.0.0.1:4444", // Try with IP instead of localhost
        ];

        for url in fallback_urls.iter() {
            if *url == self.config.webdriver_url {
                continue;
            }

            ::log::info!("Trying fallback WebDriver URL: {}", url);
            match self.try_connect(url).await {
                Ok(client) => {
                    ::log::debug!("Connected to fallback WebDriver at {}", url);
                    return Ok(client);
                }
                Err(e) => {
                    // Don't log per-fallback errors to avoid log spam
                    last_err = e;
                }
            }
        }

        ::log::error!("Failed to connect to any WebDriver server");
        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        Err(ExtractError::Session(last_err))
    }

    async fn try_connect(
        &self,
        webdriver_url: &str,
    ) -> Result<Client, fantoccini::error::NewSessionError> {
        let mut caps = serde_json::map::Map::new();
        caps.insert(
            "goog:chromeOptions".to_string(),
            serde_json::json!({
                "args": [
                    "--headless",
                    "--no-sandbox",
                    "--disable-dev-shm-usage",
                    format!("--user-agent={}", self.config.user_agent),
                ]
            }),
        );

        ClientBuilder::native()
            .capabilities(caps)
            .connect(webdriver_url)
            .await
    }

    /// Navigate, scroll to trigger lazy-loaded items, and cut the rendered
    /// page source into candidate fragments
    async fn render_and_collect(&self, client: &Client) -> Result<Vec<FragmentResult>, ExtractError> {
        let target = normalize_target_url(&self.config.start_url);
        ::log::info!("Navigating to listing page: {}", target);

        client.goto(&target).await?;
        tokio::time::sleep(Duration::from_millis(self.config.page_settle_ms)).await;

        for pass in 0..self.config.scroll_passes {
            ::log::debug!("Scroll pass {} of {}", pass + 1, self.config.scroll_passes);
            client
                .execute("window.scrollTo(0, document.body.scrollHeight);", vec![])
                .await?;
            tokio::time::sleep(Duration::from_millis(self.config.scroll_settle_ms)).await;
        }

        let source = client.source().await?;
        let fragments = collect_fragments(&source, &self.config.container_selector);
        ::log::info!("Found {} candidate fragments", fragments.len());

        Ok(fragments)
    }
}

/// Strip the in-page anchor from a listing URL; search pages often carry a
/// `#fragment` that confuses navigation
pub fn normalize_target_url(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) => {
            url.set_fragment(None);
            url.to_string()
        }
        Err(_) => raw.split('#').next().unwrap_or(raw).to_string(),
    }
}

/// Cut a rendered page source into candidate fragments using the container
/// selector. Pure function of the source string, so it is testable without
/// a WebDriver session.
pub fn collect_fragments(source: &str, container_selector: &str) -> Vec<FragmentResult> {
    let selector = match Selector::parse(container_selector) {
        Ok(selector) => selector,
        Err(e) => {
            ::log::warn!("Invalid container selector '{}': {}", container_selector, e);
            return Vec::new();
        }
    };

    let doc = Html::parse_document(source);
    doc.select(&selector)
        .map(|element| Ok(PageFragment::new(element.html(), collect_text_nodes(element))))
        .collect()
}

/// Collect the text-bearing descendant elements of a container, in document
/// order. An element qualifies when it has at least one non-whitespace
/// direct text child; its node text is the whitespace-normalized text of
/// its whole subtree, matching what a rendered browser reports.
fn collect_text_nodes(root: ElementRef) -> Vec<Node> {
    let mut nodes = Vec::new();

    for descendant in root.descendants() {
        let Some(element) = ElementRef::wrap(descendant) else {
            continue;
        };
        if element.id() == root.id() {
            continue;
        }

        let has_direct_text = element.children().any(|child| {
            child
                .value()
                .as_text()
                .map(|text| !text.trim().is_empty())
                .unwrap_or(false)
        });
        if !has_direct_text {
            continue;
        }

        let text = element
            .text()
            .collect::<Vec<_>>()
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        nodes.push(Node::new(
            &text,
            element.value().attr("class").unwrap_or(""),
            element.value().name(),
        ));
    }

    nodes
}
