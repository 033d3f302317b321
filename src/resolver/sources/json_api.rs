//! JSON API source: `GET <domain>/json/uuid/<name>`

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::{SourceResult, UuidSource};
use crate::constants::hosts;
use crate::error::AppError;
use crate::identifier::parse_identifier;
use crate::resolver::urls::build_json_api_url;

/// Body of the JSON API answer. Fields the lookup does not need are ignored.
///
/// An absent `success` reads as `false`; an explicit `null` is a type error.
#[derive(Debug, Deserialize)]
struct JsonApiResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    uuid: Option<String>,
}

/// Queries the JSON lookup API, the most authoritative of the three sources.
#[derive(Debug, Clone)]
pub struct JsonApiSource {
    domain: String,
}

impl JsonApiSource {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }
}

impl Default for JsonApiSource {
    fn default() -> Self {
        Self::new(hosts::JSON_API)
    }
}

#[async_trait::async_trait]
impl UuidSource for JsonApiSource {
    fn name(&self) -> &'static str {
        "json-api"
    }

    fn build_url(&self, player_name: &str) -> String {
        build_json_api_url(&self.domain, player_name)
    }

    fn extract(&self, body: &str, url: &str) -> SourceResult {
        let document = match serde_json::from_str::<Value>(body) {
            Ok(document) => document,
            Err(e) => {
                warn!("Unparseable JSON API response from {}: {}", url, e);
                return SourceResult::TransientError(AppError::api_malformed_json(
                    e.to_string(),
                    url,
                ));
            }
        };

        // Structs also deserialize from arrays, so the root shape is checked first
        if !document.is_object() {
            return SourceResult::TransientError(AppError::api_unexpected_structure(
                "response root is not an object",
                url,
            ));
        }

        let response = match serde_json::from_value::<JsonApiResponse>(document) {
            Ok(response) => response,
            Err(e) => {
                warn!("Unexpected JSON API response from {}: {}", url, e);
                return SourceResult::TransientError(AppError::api_unexpected_structure(
                    e.to_string(),
                    url,
                ));
            }
        };

        if !response.success {
            debug!("JSON API reports no player at {url}");
            return SourceResult::NotFound;
        }

        let Some(raw) = response.uuid else {
            return SourceResult::TransientError(AppError::api_unexpected_structure(
                "success is true but uuid is missing",
                url,
            ));
        };

        match parse_identifier(&raw) {
            Ok(id) => SourceResult::Found(id),
            Err(e) => SourceResult::TransientError(e),
        }
    }
}
