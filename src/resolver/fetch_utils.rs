//! Page fetching shared by all lookup sources

use reqwest::Client;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches a page and returns its body as text.
///
/// Issues exactly one GET request. There is no caching and no retry: a failed
/// source is simply skipped by the resolver.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch
///
/// # Returns
/// * `Result<String, AppError>` - Response body, or a transport/status error
#[instrument(skip(client))]
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching page from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(512).collect();
    debug!("Response text (first 512 chars): {preview}");

    Ok(response_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::http_client::create_test_http_client;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    #[tokio::test]
    async fn test_fetch_text_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/Notch"))
            .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/api/Notch", mock_server.uri());
        let body = fetch_text(&client, &url).await.unwrap();

        assert_eq!(body, "hello");
    }

    #[tokio::test]
    async fn test_fetch_text_sends_user_agent() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", crate::constants::USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let result = fetch_text(&client, &mock_server.uri()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_text_maps_status_codes() {
        let cases = [
            (404, "ApiNotFound"),
            (429, "ApiRateLimit"),
            (400, "ApiClientError"),
            (503, "ApiServiceUnavailable"),
            (500, "ApiServerError"),
        ];

        for (status, expected) in cases {
            let mock_server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(status))
                .mount(&mock_server)
                .await;

            let client = create_test_http_client();
            let err = fetch_text(&client, &mock_server.uri()).await.unwrap_err();

            let matched = match expected {
                "ApiNotFound" => matches!(err, AppError::ApiNotFound { .. }),
                "ApiRateLimit" => matches!(err, AppError::ApiRateLimit { .. }),
                "ApiClientError" => matches!(err, AppError::ApiClientError { status: 400, .. }),
                "ApiServiceUnavailable" => {
                    matches!(err, AppError::ApiServiceUnavailable { status: 503, .. })
                }
                _ => matches!(err, AppError::ApiServerError { status: 500, .. }),
            };
            assert!(matched, "status {status} mapped to {err:?}");
            assert!(err.is_transient());
        }
    }

    #[tokio::test]
    async fn test_fetch_text_connection_refused() {
        // Nothing listens on port 1
        let client = create_test_http_client();
        let err = fetch_text(&client, "http://127.0.0.1:1/api/Notch")
            .await
            .unwrap_err();

        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn test_fetch_text_timeout() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;

        let client = crate::resolver::http_client::create_http_client_with_timeout(1).unwrap();
        let err = fetch_text(&client, &mock_server.uri()).await.unwrap_err();

        assert!(matches!(err, AppError::NetworkTimeout { .. }));
    }
}
