//! Favicon identifier page.
//!
//! Loads the hash database, digests a local icon file, and reports the match.

use std::path::Path;

use anyhow::Result;

use infotools_client::{FaviconService, Identification};
use infotools_core::{AppConfig, digest};

pub fn run(config: &AppConfig, file: &Path) -> Result<()> {
    let mut service = FaviconService::new()?;
    match service.load(&config.favicon_db_path) {
        Ok(count) => println!("Loaded {count} hashes."),
        Err(e) => println!("{e}"),
    }

    if !file.exists() {
        println!("Selected file does not exist.");
        return Ok(());
    }

    let digest = digest::md5_hex_file(file)?;
    match service.identify(&digest) {
        Identification::Identified(label) => println!("Identified: {label}"),
        Identification::NotLoaded => println!("Database not loaded. {digest}"),
        Identification::Unknown => println!("Icon not identified. {digest}"),
    }

    Ok(())
}
