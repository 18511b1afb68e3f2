//! Network-facing services for InfoTools.
//!
//! This crate provides the HTTP header client, the URL validation gate, the
//! favicon lookup service, and the site inspector shared by the pages.

pub mod favicon;
pub mod fetch;
pub mod inspect;

pub use favicon::{FaviconService, Identification};
pub use fetch::url::{UrlError, validate_url};
pub use fetch::{FetchConfig, HeaderClient, HeaderSnapshot};
pub use inspect::{Inspection, SiteInspector};
