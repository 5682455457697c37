use clap::Parser;
use std::path::PathBuf;
use yield_product::{ExtractError, Listing, export};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting product extraction for: {}", args.url);

    println!("Note: extraction requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );

    // Build the extraction from the command-line parameters
    let mut listing = Listing::new(&args.url).with_max_products(args.max_products);
    if let Some(webdriver_url) = &args.webdriver_url {
        listing = listing.with_webdriver_url(webdriver_url);
    }

    let start_time = std::time::Instant::now();

    let records = match listing.extract().await {
        Ok(records) => records,
        Err(ExtractError::NoCandidates) => {
            println!("No products were extracted. Check the URL or page content.");
            return;
        }
        Err(e) => {
            ::log::error!("Extraction failed: {}", e);
            return;
        }
    };

    if records.is_empty() {
        println!("No products were extracted. Check the URL or page content.");
        return;
    }

    println!("\nExtracted products:");
    println!("{}", "-".repeat(50));
    for (i, record) in records.iter().enumerate() {
        println!("Product {}:", i + 1);
        println!("name: {}", record.name);
        println!("Brand: {}", record.brand);
        println!("list_price: {}", record.list_price);
        println!("{}", "-".repeat(50));
    }

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(export::filename_for(&args.url)));
    if let Err(e) = export::save_to_json(&records, &output) {
        ::log::error!("Failed to save records to {}: {}", output.display(), e);
    }

    let duration = start_time.elapsed();
    ::log::info!(
        "Extraction complete - {} records in {:.2} seconds",
        records.len(),
        duration.as_secs_f64()
    );
}
