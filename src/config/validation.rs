use crate::error::AppError;
use std::path::Path;

/// Checks that a lookup source domain is usable as a URL prefix.
///
/// # Validation Rules
/// - Domain cannot be empty
/// - Domain must carry an http:// or https:// scheme
/// - Domain must not end with a slash, since paths are appended directly
fn validate_domain(field: &str, domain: &str) -> Result<(), AppError> {
    if domain.is_empty() {
        return Err(AppError::config_error(format!("{field} cannot be empty")));
    }

    if !domain.starts_with("http://") && !domain.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{field} must start with http:// or https://"
        )));
    }

    if domain.ends_with('/') {
        return Err(AppError::config_error(format!(
            "{field} must not end with '/'"
        )));
    }

    Ok(())
}

/// Validates the configuration settings
///
/// # Returns
/// * `Ok(())` - Configuration is valid
/// * `Err(AppError)` - Configuration validation failed
pub fn validate_config(
    domains: &[(&str, &str)],
    http_timeout_seconds: u64,
    whitelist_path: &Option<String>,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    for (field, domain) in domains {
        validate_domain(field, domain)?;
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if let Some(path) = whitelist_path
        && path.is_empty()
    {
        return Err(AppError::config_error("Whitelist path cannot be empty"));
    }

    // Validate log file path if provided
    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_domains() {
        assert!(validate_domain("d", "https://api.mcuuid.com").is_ok());
        assert!(validate_domain("d", "http://127.0.0.1:8080").is_ok());
    }

    #[test]
    fn test_invalid_domains() {
        assert!(validate_domain("d", "").is_err());
        assert!(validate_domain("d", "mcuuid.net").is_err());
        assert!(validate_domain("d", "http://mcuuid.net/").is_err());
    }

    #[test]
    fn test_error_names_the_field() {
        let err = validate_domain("json_api_domain", "").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: json_api_domain cannot be empty"
        );
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(validate_config(&[], 0, &None, &None).is_err());
        assert!(validate_config(&[], 1, &None, &None).is_ok());
    }

    #[test]
    fn test_empty_paths_rejected() {
        assert!(validate_config(&[], 30, &Some(String::new()), &None).is_err());
        assert!(validate_config(&[], 30, &None, &Some(String::new())).is_err());
    }
}
