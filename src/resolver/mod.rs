//! Player name to UUID resolution over a fallback chain of lookup sources.

mod core;
pub mod fetch_utils;
pub mod http_client;
pub mod sources;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export the resolver and source types
pub use self::core::{Resolver, default_sources};
pub use sources::{ApiScrapeSource, HtmlScrapeSource, JsonApiSource, SourceResult, UuidSource};
