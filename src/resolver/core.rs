use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::http_client::create_http_client_with_timeout;
use super::sources::{
    ApiScrapeSource, HtmlScrapeSource, JsonApiSource, SourceResult, UuidSource,
};
use crate::config::Config;
use crate::error::AppError;

/// Resolves player names to UUIDs through an ordered chain of lookup sources.
///
/// Sources are queried one after another, never in parallel. Two ordering
/// rules apply and are kept deliberately:
///
/// * A source that finds the player does not end the chain. Every remaining
///   source is still asked, and the last one to find the player decides the
///   result.
/// * A source that reports the player as unknown ends the chain at once with
///   [`AppError::PlayerNotFound`], even when later sources might know them.
///
/// Transient failures are logged and skipped. When no source found the player
/// the result is also [`AppError::PlayerNotFound`].
///
/// The resolver holds no mutable state and may be shared between tasks.
pub struct Resolver {
    client: Client,
    sources: Vec<Box<dyn UuidSource>>,
}

impl Resolver {
    /// Builds a resolver over an explicit list of sources, queried in order.
    pub fn new(client: Client, sources: Vec<Box<dyn UuidSource>>) -> Self {
        Self { client, sources }
    }

    /// Builds the standard chain: JSON API, then API-style page, then HTML page.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        let resolver = Self::new(client, default_sources(config));
        debug!("Resolver chain: {:?}", resolver.source_names());
        Ok(resolver)
    }

    /// Names of the configured sources in query order
    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Resolves `player_name` to a UUID.
    ///
    /// The name is passed to every source verbatim.
    #[instrument(skip(self))]
    pub async fn resolve(&self, player_name: &str) -> Result<Uuid, AppError> {
        let mut found = None;

        for source in &self.sources {
            let result = source.lookup(&self.client, player_name).await;
            if !self.record(source.name(), player_name, result, &mut found) {
                return Err(AppError::player_not_found(player_name));
            }
        }

        self.finish(player_name, found)
    }

    /// Like [`Resolver::resolve`], but stops waiting on the in-flight source
    /// once `token` is cancelled.
    ///
    /// A cancelled source counts as a transient failure, so a UUID found
    /// before cancellation is still returned.
    #[instrument(skip(self, token))]
    pub async fn resolve_with_cancellation(
        &self,
        player_name: &str,
        token: &CancellationToken,
    ) -> Result<Uuid, AppError> {
        let mut found = None;

        for source in &self.sources {
            let result = tokio::select! {
                biased;
                _ = token.cancelled() => {
                    SourceResult::TransientError(AppError::cancelled(source.name()))
                }
                result = source.lookup(&self.client, player_name) => result,
            };
            if !self.record(source.name(), player_name, result, &mut found) {
                return Err(AppError::player_not_found(player_name));
            }
        }

        self.finish(player_name, found)
    }

    /// Applies one source outcome. Returns `false` when the chain must stop.
    fn record(
        &self,
        source_name: &str,
        player_name: &str,
        result: SourceResult,
        found: &mut Option<Uuid>,
    ) -> bool {
        match result {
            SourceResult::Found(id) => {
                info!("{source_name} resolved {player_name} to {id}");
                if let Some(previous) = found.replace(id)
                    && previous != id
                {
                    warn!(
                        "{source_name} overrides earlier UUID {previous} for {player_name} with {id}"
                    );
                }
                true
            }
            SourceResult::TransientError(e) => {
                debug_assert!(e.is_transient(), "{e:?} reported as a transient failure");
                warn!("{source_name} failed for {player_name}, trying next source: {e}");
                true
            }
            SourceResult::NotFound => {
                info!("{source_name} reports {player_name} does not exist");
                false
            }
        }
    }

    fn finish(&self, player_name: &str, found: Option<Uuid>) -> Result<Uuid, AppError> {
        found.ok_or_else(|| {
            warn!("No source could resolve {player_name}");
            AppError::player_not_found(player_name)
        })
    }
}

/// The three standard sources in priority order, pointed at the configured hosts.
pub fn default_sources(config: &Config) -> Vec<Box<dyn UuidSource>> {
    vec![
        Box::new(JsonApiSource::new(config.json_api_domain.clone())),
        Box::new(ApiScrapeSource::new(config.api_scrape_domain.clone())),
        Box::new(HtmlScrapeSource::new(config.html_scrape_domain.clone())),
    ]
}
