use crate::records::ProductRecord;
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Write records to a pretty-printed JSON file, preserving the external
/// field casing (`name` / `Brand` / `list_price`)
pub fn save_to_json<P: AsRef<Path>>(records: &[ProductRecord], path: P) -> Result<(), Box<dyn Error>> {
    let file = File::create(&path)?;
    serde_json::to_writer_pretty(file, records)?;

    ::log::info!(
        "Saved {} records to {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Derive a JSON output filename from a listing URL
pub fn filename_for(url: &str) -> String {
    format!("{}.json", sanitize_filename(url))
}

/// Convert a listing URL to a sanitized filename
fn sanitize_filename(url: &str) -> String {
    // Remove protocol and replace invalid filename characters
    let mut name = url.replace("http://", "").replace("https://", "");
    name = name.replace(['/', ':', '?', '&', '=', '#', '%'], "_");

    // Limit filename length; truncate by characters so a multi-byte
    // code point is never split
    if name.len() > 100 {
        name.chars().take(100).collect()
    } else {
        name
    }
}
