// Debug API module.
// Provides the HTTP client and response types for the debug endpoints.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{DEFAULT_BASE_URL, DebugClient, parse_base_url};
pub use types::*;
