//! Basic scan example demonstrating URL and file scanning.
//!
//! This example shows how to:
//! - Build a ScanSession
//! - Scan a URL and a file and handle the verdicts
//! - Read the accumulated scan history
//!
//! Run with: cargo run --example basic_scan

use safescan::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing so audit events are visible
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== Safescan Basic Scan Example ===\n");

    let workdir = tempfile::TempDir::new()?;
    let session = ScanSession::builder()
        .with_history_path(workdir.path().join("report_log.txt"))
        .build();

    // Scan a couple of URLs
    for url in ["http://bit.ly/abc123", "https://example.com/about"] {
        match session.scan_url(url)? {
            UrlVerdict::Suspicious { rule_id } => {
                println!("SUSPICIOUS  {url}  (rule: {rule_id})");
            }
            UrlVerdict::Safe => println!("safe        {url}"),
        }
    }

    // Scan a file with a suspicious extension
    let file_path = workdir.path().join("unknown.exe");
    std::fs::write(&file_path, b"not actually malware")?;

    match session.scan_file(&file_path) {
        Ok(FileVerdict::Malicious { digest }) => {
            println!("MALICIOUS   {} (digest {digest})", file_path.display());
        }
        Ok(FileVerdict::SuspiciousExtension { extension }) => {
            println!("FLAGGED     {} ({extension})", file_path.display());
        }
        Ok(FileVerdict::Safe) => println!("safe        {}", file_path.display()),
        Err(err) => println!("UNREADABLE  {err}"),
    }

    // Read back the history
    println!("\n=== Scan History ===");
    println!("{}", session.history()?);

    Ok(())
}
