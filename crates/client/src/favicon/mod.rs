//! Favicon identification service.
//!
//! Maintains a digest-to-framework table loaded from a comma-separated
//! database file and answers identification queries. Also downloads
//! `/favicon.ico` for the header-check page.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use infotools_core::{Error, FaviconOutcome};

/// Timeout for favicon downloads.
const FAVICON_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of a favicon lookup.
///
/// `NotLoaded` and `Unknown` are distinct: the first means no successful
/// database load has happened, the second that the table simply lacks the
/// digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identification {
    /// No successful database load has happened.
    NotLoaded,
    /// Database is loaded but the digest is absent.
    Unknown,
    /// Digest matched; carries the framework label.
    Identified(String),
}

/// Favicon analysis: hash database lookups and icon downloads.
pub struct FaviconService {
    table: HashMap<String, String>,
    loaded: bool,
    http: reqwest::Client,
}

impl FaviconService {
    pub fn new() -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(FAVICON_TIMEOUT)
            .use_rustls_tls()
            .build()
            .map_err(|e| Error::Http(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { table: HashMap::new(), loaded: false, http })
    }

    /// Whether a load has completed successfully since construction.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Number of digests currently in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Load the digest table from the database file, replacing any prior
    /// contents.
    ///
    /// The first line is always treated as a header and skipped. Rows with
    /// fewer than two columns are skipped; the digest comes from the second
    /// column and the label from the last, both trimmed and required
    /// non-empty. Later duplicate digests overwrite earlier ones. Returns the
    /// number of rows stored.
    ///
    /// # Errors
    ///
    /// A missing file returns `Error::DatabaseMissing`; read failures return
    /// `Error::Io`. Either way the service stays in the not-loaded state.
    pub fn load(&mut self, path: &Path) -> Result<usize, Error> {
        self.table.clear();
        self.loaded = false;

        if !path.exists() {
            return Err(Error::DatabaseMissing(path.to_path_buf()));
        }

        let raw = fs::read_to_string(path)?;
        let mut count = 0;
        for line in raw.lines().skip(1) {
            let parts: Vec<&str> = line.split(',').collect();
            if parts.len() < 2 {
                continue;
            }
            let digest = parts[1].trim();
            let label = parts[parts.len() - 1].trim();
            if digest.is_empty() || label.is_empty() {
                continue;
            }
            self.table.insert(digest.to_lowercase(), label.to_string());
            count += 1;
        }

        self.loaded = true;
        tracing::debug!("loaded {} favicon hashes from {}", count, path.display());
        Ok(count)
    }

    /// Look up a digest, case-insensitively.
    pub fn identify(&self, digest: &str) -> Identification {
        if !self.loaded {
            return Identification::NotLoaded;
        }
        match self.table.get(&digest.to_lowercase()) {
            Some(label) if !label.is_empty() => Identification::Identified(label.clone()),
            _ => Identification::Unknown,
        }
    }

    /// Download `/favicon.ico` from the origin of `url`.
    ///
    /// Network failures and non-2xx statuses are reported in the outcome's
    /// message, never as an error to the caller.
    pub async fn download_favicon(&self, origin: &url::Url) -> FaviconOutcome {
        let favicon_url = match origin.join("/favicon.ico") {
            Ok(u) => u,
            Err(e) => return FaviconOutcome::Failed(format!("invalid favicon URL: {}", e)),
        };

        match self.http.get(favicon_url.as_str()).send().await {
            Ok(response) if response.status().is_success() => match response.bytes().await {
                Ok(data) => {
                    tracing::debug!("downloaded favicon from {} ({} bytes)", favicon_url, data.len());
                    FaviconOutcome::Fetched(data)
                }
                Err(e) => FaviconOutcome::Failed(format!("error reading favicon: {}", e)),
            },
            Ok(response) => {
                FaviconOutcome::Failed(format!("failed to download favicon: status {}", response.status().as_u16()))
            }
            Err(e) => FaviconOutcome::Failed(format!("error downloading favicon: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_db(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favicons-database.csv");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_identify_before_load_is_not_loaded() {
        let service = FaviconService::new().unwrap();
        assert_eq!(service.identify("d41d8cd98f00b204e9800998ecf8427e"), Identification::NotLoaded);
    }

    #[test]
    fn test_load_skips_header_row() {
        let (_dir, path) = write_db("id,hash,framework\n1,AABB01,WordPress\n");
        let mut service = FaviconService::new().unwrap();
        let count = service.load(&path).unwrap();
        assert_eq!(count, 1);
        // The header row's "hash" column is not a stored digest.
        assert_eq!(service.identify("hash"), Identification::Unknown);
    }

    #[test]
    fn test_identify_is_case_insensitive() {
        let (_dir, path) = write_db("id,hash,framework\n1,AABB01,WordPress\n");
        let mut service = FaviconService::new().unwrap();
        service.load(&path).unwrap();
        assert_eq!(service.identify("aabb01"), Identification::Identified("WordPress".to_string()));
        assert_eq!(service.identify("AABB01"), Identification::Identified("WordPress".to_string()));
    }

    #[test]
    fn test_label_is_last_column() {
        let (_dir, path) = write_db("id,hash,name,framework\n1,abc123,ignored,Drupal\n");
        let mut service = FaviconService::new().unwrap();
        service.load(&path).unwrap();
        assert_eq!(service.identify("abc123"), Identification::Identified("Drupal".to_string()));
    }

    #[test]
    fn test_duplicate_digest_last_write_wins() {
        let (_dir, path) = write_db("id,hash,framework\n1,abc123,First\n2,abc123,Second\n");
        let mut service = FaviconService::new().unwrap();
        let count = service.load(&path).unwrap();
        assert_eq!(count, 2);
        assert_eq!(service.len(), 1);
        assert_eq!(service.identify("abc123"), Identification::Identified("Second".to_string()));
    }

    #[test]
    fn test_short_and_empty_rows_skipped() {
        let (_dir, path) = write_db("id,hash,framework\nonly-one-column\n2,,NoDigest\n3,abc123,\n4,def456,Rails\n");
        let mut service = FaviconService::new().unwrap();
        let count = service.load(&path).unwrap();
        assert_eq!(count, 1);
        assert_eq!(service.identify("def456"), Identification::Identified("Rails".to_string()));
    }

    #[test]
    fn test_missing_file_leaves_service_not_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = FaviconService::new().unwrap();
        let result = service.load(&dir.path().join("absent.csv"));
        assert!(matches!(result, Err(Error::DatabaseMissing(_))));
        assert!(!service.is_loaded());
        assert_eq!(service.identify("abc123"), Identification::NotLoaded);
    }

    #[test]
    fn test_reload_replaces_table() {
        let (_dir, path) = write_db("id,hash,framework\n1,abc123,First\n");
        let mut service = FaviconService::new().unwrap();
        service.load(&path).unwrap();

        let (_dir2, path2) = write_db("id,hash,framework\n1,def456,Second\n");
        service.load(&path2).unwrap();
        assert_eq!(service.identify("abc123"), Identification::Unknown);
        assert_eq!(service.identify("def456"), Identification::Identified("Second".to_string()));
    }

    #[test]
    fn test_failed_reload_clears_loaded_state() {
        let (_dir, path) = write_db("id,hash,framework\n1,abc123,First\n");
        let mut service = FaviconService::new().unwrap();
        service.load(&path).unwrap();
        assert!(service.is_loaded());

        let missing = tempfile::tempdir().unwrap();
        let _ = service.load(&missing.path().join("gone.csv"));
        assert!(!service.is_loaded());
        assert_eq!(service.identify("abc123"), Identification::NotLoaded);
    }

    #[test]
    fn test_loaded_but_empty_is_distinct_from_not_loaded() {
        let (_dir, path) = write_db("id,hash,framework\n");
        let mut service = FaviconService::new().unwrap();
        let count = service.load(&path).unwrap();
        assert_eq!(count, 0);
        assert!(service.is_loaded());
        assert_eq!(service.identify("abc123"), Identification::Unknown);
    }
}
