//! API-style page source: `GET <domain>/api/<name>`
//!
//! The page embeds `"uuid_formatted":"<uuid>"` somewhere in its body. Only
//! that literal marker is searched for; the rest of the page is ignored.

use tracing::debug;

use super::{SourceResult, UuidSource};
use crate::constants::{HYPHENATED_UUID_LEN, hosts, markers::UUID_FORMATTED};
use crate::identifier::parse_identifier;
use crate::resolver::urls::build_api_scrape_url;

#[derive(Debug, Clone)]
pub struct ApiScrapeSource {
    domain: String,
}

impl ApiScrapeSource {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }
}

impl Default for ApiScrapeSource {
    fn default() -> Self {
        Self::new(hosts::API_SCRAPE)
    }
}

#[async_trait::async_trait]
impl UuidSource for ApiScrapeSource {
    fn name(&self) -> &'static str {
        "api-scrape"
    }

    fn build_url(&self, player_name: &str) -> String {
        build_api_scrape_url(&self.domain, player_name)
    }

    fn extract(&self, body: &str, url: &str) -> SourceResult {
        let Some(index) = body.find(UUID_FORMATTED) else {
            debug!("No uuid_formatted marker in page from {url}");
            return SourceResult::NotFound;
        };

        let candidate: String = body[index + UUID_FORMATTED.len()..]
            .chars()
            .take(HYPHENATED_UUID_LEN)
            .collect();

        // A page cut off before a full UUID counts as no answer for this player
        if candidate.chars().count() < HYPHENATED_UUID_LEN {
            debug!("Page from {url} ends before a full UUID");
            return SourceResult::NotFound;
        }

        match parse_identifier(&candidate) {
            Ok(id) => SourceResult::Found(id),
            Err(e) => SourceResult::TransientError(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::resolver::http_client::create_test_http_client;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    const URL: &str = "http://mcuuid.com/api/Notch";
    const NOTCH: &str = "069a79f4-44e9-4726-a5be-fca90e38aaf5";

    fn extract(body: &str) -> SourceResult {
        ApiScrapeSource::default().extract(body, URL)
    }

    #[test]
    fn test_build_url() {
        assert_eq!(ApiScrapeSource::default().build_url("Notch"), URL);
    }

    #[test]
    fn test_marker_in_surrounding_text_is_found() {
        let body = format!(
            r#"<pre>{{"name":"Notch","uuid":"069a79f444e94726a5befca90e38aaf5","uuid_formatted":"{NOTCH}","history":[]}}</pre>"#
        );
        match extract(&body) {
            SourceResult::Found(id) => assert_eq!(id.to_string(), NOTCH),
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_trailing_text_after_uuid_is_ignored() {
        let body = format!(r#""uuid_formatted":"{NOTCH}garbage that follows"#);
        assert!(matches!(extract(&body), SourceResult::Found(_)));
    }

    #[test]
    fn test_missing_marker_is_not_found() {
        assert!(matches!(
            extract(r#"{"error":"Player not found"}"#),
            SourceResult::NotFound
        ));
        assert!(matches!(extract(""), SourceResult::NotFound));
    }

    #[test]
    fn test_truncated_uuid_is_not_found() {
        assert!(matches!(
            extract(r#""uuid_formatted":"069a79f4-44e9"#),
            SourceResult::NotFound
        ));
    }

    #[test]
    fn test_unparseable_uuid_is_transient() {
        assert!(matches!(
            extract(r#""uuid_formatted":"this is not a uuid but it is long enough"}"#),
            SourceResult::TransientError(AppError::MalformedIdentifier { .. })
        ));
    }

    #[test]
    fn test_unhyphenated_value_is_transient() {
        // 32 hex digits plus four characters of trailing JSON
        assert!(matches!(
            extract(r#""uuid_formatted":"069a79f444e94726a5befca90e38aaf5"}]}"#),
            SourceResult::TransientError(_)
        ));
    }

    #[tokio::test]
    async fn test_lookup_against_mock_server() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/Notch"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(format!(r#"{{"uuid_formatted":"{NOTCH}"}}"#)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let source = ApiScrapeSource::new(mock_server.uri());
        let client = create_test_http_client();

        match source.lookup(&client, "Notch").await {
            SourceResult::Found(id) => assert_eq!(id.to_string(), NOTCH),
            other => panic!("expected Found, got {other:?}"),
        }
    }
}
