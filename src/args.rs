use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "yield-product")]
#[command(about = "Extracts structured product records from rendered listing pages")]
#[command(version)]
pub struct Args {
    /// Listing page URL to extract products from
    pub url: String,

    /// Maximum number of product records to extract
    #[arg(short, long, default_value_t = 10)]
    pub max_products: usize,

    /// Output JSON file (defaults to a name derived from the URL)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// WebDriver server URL (overrides the WEBDRIVER_URL environment variable)
    #[arg(long)]
    pub webdriver_url: Option<String>,
}
