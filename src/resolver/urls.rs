//! URL building utilities for the lookup endpoints
//!
//! Player names are substituted verbatim. Escaping is left to `reqwest`'s URL
//! parser; a name that still yields an unusable URL surfaces as a transient
//! fetch error for that source.

/// Builds the JSON API lookup URL.
///
/// # Example
/// ```
/// use custom_whitelist::resolver::build_json_api_url;
///
/// let url = build_json_api_url("https://api.mcuuid.com", "Notch");
/// assert_eq!(url, "https://api.mcuuid.com/json/uuid/Notch");
/// ```
pub fn build_json_api_url(domain: &str, player_name: &str) -> String {
    format!("{domain}/json/uuid/{player_name}")
}

/// Builds the URL of the page carrying a `uuid_formatted` field.
///
/// # Example
/// ```
/// use custom_whitelist::resolver::build_api_scrape_url;
///
/// let url = build_api_scrape_url("http://mcuuid.com", "Notch");
/// assert_eq!(url, "http://mcuuid.com/api/Notch");
/// ```
pub fn build_api_scrape_url(domain: &str, player_name: &str) -> String {
    format!("{domain}/api/{player_name}")
}

/// Builds the HTML search page URL.
///
/// # Example
/// ```
/// use custom_whitelist::resolver::build_html_scrape_url;
///
/// let url = build_html_scrape_url("http://mcuuid.net", "Notch");
/// assert_eq!(url, "http://mcuuid.net/?q=Notch");
/// ```
pub fn build_html_scrape_url(domain: &str, player_name: &str) -> String {
    format!("{domain}/?q={player_name}")
}
