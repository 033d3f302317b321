//! HTML search page source: `GET <domain>/?q=<name>`
//!
//! The result page shows a `Full UUID:` label followed by an input whose
//! `value="..."` attribute holds the hyphenated UUID.

use tracing::debug;

use super::{SourceResult, UuidSource};
use crate::constants::hosts;
use crate::constants::markers::{FULL_UUID_LABEL, VALUE_ATTRIBUTE};
use crate::error::AppError;
use crate::identifier::parse_identifier;
use crate::resolver::urls::build_html_scrape_url;

#[derive(Debug, Clone)]
pub struct HtmlScrapeSource {
    domain: String,
}

impl HtmlScrapeSource {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }
}

impl Default for HtmlScrapeSource {
    fn default() -> Self {
        Self::new(hosts::HTML_SCRAPE)
    }
}

/// Text between the quote that opens the first `value="` after the label and
/// the next quote. `None` when either marker is missing, `Some(Err)` when the
/// attribute is never closed.
fn quoted_value_after_label(body: &str) -> Option<Result<&str, ()>> {
    let labelled = &body[body.find(FULL_UUID_LABEL)?..];
    let attribute = labelled.find(VALUE_ATTRIBUTE)?;
    let value = &labelled[attribute + VALUE_ATTRIBUTE.len()..];

    Some(value.find('"').map(|end| &value[..end]).ok_or(()))
}

#[async_trait::async_trait]
impl UuidSource for HtmlScrapeSource {
    fn name(&self) -> &'static str {
        "html-scrape"
    }

    fn build_url(&self, player_name: &str) -> String {
        build_html_scrape_url(&self.domain, player_name)
    }

    fn extract(&self, body: &str, url: &str) -> SourceResult {
        match quoted_value_after_label(body) {
            None => {
                debug!("No Full UUID field in page from {url}");
                SourceResult::NotFound
            }
            Some(Err(())) => SourceResult::TransientError(AppError::api_unexpected_structure(
                "UUID value attribute is not terminated",
                url,
            )),
            Some(Ok(raw)) => match parse_identifier(raw) {
                Ok(id) => SourceResult::Found(id),
                Err(e) => SourceResult::TransientError(e),
            },
        }
    }
}
