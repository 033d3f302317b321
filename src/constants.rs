//! Application-wide constants and configuration values
//!
//! Default lookup hosts, response markers and HTTP settings live here so the
//! source adapters and the config layer agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections kept per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// User agent sent with every lookup request
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Default hosts for the three lookup sources
pub mod hosts {
    /// JSON API queried first
    pub const JSON_API: &str = "https://api.mcuuid.com";

    /// Site whose `/api/` page embeds a `uuid_formatted` field
    pub const API_SCRAPE: &str = "http://mcuuid.com";

    /// Site whose search page shows the UUID in an input field
    pub const HTML_SCRAPE: &str = "http://mcuuid.net";
}

/// Literal markers searched for in scraped responses
pub mod markers {
    /// Precedes the 36-character hyphenated UUID in the API-style page
    pub const UUID_FORMATTED: &str = "\"uuid_formatted\":\"";

    /// Label preceding the full UUID input on the HTML search page
    pub const FULL_UUID_LABEL: &str = "Full UUID:";

    /// Opening of the input value attribute after the label
    pub const VALUE_ATTRIBUTE: &str = "value=\"";
}

/// Length of a canonical hyphenated UUID string
pub const HYPHENATED_UUID_LEN: usize = 36;

/// Length of an unhyphenated UUID string
pub const SIMPLE_UUID_LEN: usize = 32;

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "custom_whitelist.log";

/// Default whitelist file name inside the config directory
pub const WHITELIST_FILE_NAME: &str = "whitelist.json";

/// Environment variable names that override config file values
pub mod env_vars {
    pub const JSON_API_DOMAIN: &str = "CUSTOM_WHITELIST_JSON_API_DOMAIN";
    pub const API_SCRAPE_DOMAIN: &str = "CUSTOM_WHITELIST_API_SCRAPE_DOMAIN";
    pub const HTML_SCRAPE_DOMAIN: &str = "CUSTOM_WHITELIST_HTML_SCRAPE_DOMAIN";
    pub const WHITELIST_PATH: &str = "CUSTOM_WHITELIST_WHITELIST_PATH";
    pub const LOG_FILE: &str = "CUSTOM_WHITELIST_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "CUSTOM_WHITELIST_HTTP_TIMEOUT";
}
