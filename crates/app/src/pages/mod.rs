//! Page implementations.
//!
//! One module per page of the original tool: the ticker home page, the
//! favicon identifier, the header check, and the settings editor.

pub mod favicon_id;
pub mod home;
pub mod settings;
pub mod site_headers;
