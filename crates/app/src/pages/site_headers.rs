//! Header-check page.
//!
//! Validates the URL gate, runs the cached inspection, and prints the
//! response headers plus the favicon outcome. Errors become a single status
//! line rather than a failed process.

use anyhow::Result;

use infotools_client::{
    FaviconService, FetchConfig, HeaderClient, Identification, SiteInspector, validate_url,
};
use infotools_core::{AppConfig, FaviconOutcome, SiteCache, digest};

pub async fn run(config: &AppConfig, raw_url: &str) -> Result<()> {
    let url = match validate_url(raw_url) {
        Ok(url) => url,
        Err(e) => {
            println!("Error: {e}");
            return Ok(());
        }
    };

    let mut favicons = FaviconService::new()?;
    if let Err(e) = favicons.load(&config.favicon_db_path) {
        tracing::debug!("favicon database unavailable: {e}");
    }

    let fetch_config = FetchConfig {
        user_agent: config.user_agent.clone(),
        timeout: config.timeout(),
        ..Default::default()
    };
    let client = HeaderClient::new(fetch_config)?;
    let cache = SiteCache::new(config.cache_ttl());
    let inspector = SiteInspector::new(cache, client, favicons);

    let inspection = match inspector.check(&url).await {
        Ok(inspection) => inspection,
        Err(e) => {
            println!("Error: {e}");
            return Ok(());
        }
    };

    if inspection.from_cache {
        println!("(served from cache: {})", inspection.key);
    }
    println!("Status: {}", inspection.entry.status);
    for (name, values) in &inspection.entry.headers {
        for value in values {
            println!("{name}: {value}");
        }
    }

    match &inspection.entry.favicon {
        FaviconOutcome::Fetched(data) => {
            let digest = digest::md5_hex(data);
            match inspector.favicons().identify(&digest) {
                Identification::Identified(label) => {
                    println!("Favicon: {} bytes, identified as {label}", data.len());
                }
                Identification::Unknown => {
                    println!("Favicon: {} bytes, not identified ({digest})", data.len());
                }
                Identification::NotLoaded => {
                    println!("Favicon: {} bytes ({digest}); database not loaded", data.len());
                }
            }
        }
        FaviconOutcome::Failed(message) => println!("Favicon: {message}"),
    }

    Ok(())
}
