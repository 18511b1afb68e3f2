//! Core types and shared functionality for InfoTools.
//!
//! This crate provides:
//! - Layered application configuration
//! - The user settings store (flat JSON string map)
//! - The in-memory site header/favicon cache with TTL expiry
//! - MD5 digest helpers for favicon identification
//! - The alert ticker engine (template substitution + scroll state)

pub mod cache;
pub mod config;
pub mod digest;
pub mod error;
pub mod settings;
pub mod ticker;

pub use cache::{CacheEntry, FaviconOutcome, SiteCache};
pub use config::AppConfig;
pub use error::Error;
pub use settings::SettingsStore;
