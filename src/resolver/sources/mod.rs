//! Lookup sources that turn a player name into a [`SourceResult`].
//!
//! Each source owns one endpoint template and one literal parsing rule. All
//! faults are converted to a [`SourceResult`] at the source boundary; nothing
//! raw escapes to the resolver.

use async_trait::async_trait;
use reqwest::Client;
use uuid::Uuid;

use super::fetch_utils::fetch_text;
use crate::error::AppError;

pub mod api_scrape;
pub mod html_scrape;
pub mod json_api;

pub use api_scrape::ApiScrapeSource;
pub use html_scrape::HtmlScrapeSource;
pub use json_api::JsonApiSource;

/// Outcome of querying a single lookup source.
#[derive(Debug)]
pub enum SourceResult {
    /// The source returned a parseable UUID for the player.
    Found(Uuid),
    /// The source definitively reports the player does not exist.
    NotFound,
    /// The source was unreachable or answered with something unexpected.
    TransientError(AppError),
}

/// A single remote service able to map a player name to a UUID.
#[async_trait]
pub trait UuidSource: Send + Sync {
    /// Short label used in logs
    fn name(&self) -> &'static str;

    /// Request URL for the given player name
    fn build_url(&self, player_name: &str) -> String;

    /// Applies this source's parsing rule to a fetched body.
    /// `url` is only used for error context.
    fn extract(&self, body: &str, url: &str) -> SourceResult;

    /// Fetches the page for `player_name` and extracts the UUID from it.
    async fn lookup(&self, client: &Client, player_name: &str) -> SourceResult {
        let url = self.build_url(player_name);
        match fetch_text(client, &url).await {
            Ok(body) => self.extract(&body, &url),
            Err(e) => SourceResult::TransientError(e),
        }
    }
}
