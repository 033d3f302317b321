use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use crate::identifier::{parse_identifier, to_canonical};
use crate::resolver::Resolver;
use crate::whitelist::{AddOutcome, Whitelist};
use tracing::{info, warn};

/// Message for a player that is already whitelisted
pub fn already_whitelisted_message(subject: &str) -> String {
    format!("\"{subject}\" is already on the whitelist.")
}

/// Message for a player that was just whitelisted
pub fn added_message(subject: &str) -> String {
    format!("\"{subject}\" was added to the whitelist.")
}

/// Message shown when name resolution fails for any reason
pub fn not_found_message(name: &str) -> String {
    format!("\"{name}\" was not found and could not be added to the whitelist.")
}

/// Message shown when `resolve` finds nothing
pub fn resolve_not_found_message(name: &str) -> String {
    format!("\"{name}\" was not found.")
}

/// Message shown when an add-by-UUID argument is not a UUID
pub fn add_uuid_error_message() -> String {
    "There was an error adding a user by uuid, see the log for details.".to_string()
}

pub fn removed_message(subject: &str) -> String {
    format!("\"{subject}\" was removed from the whitelist.")
}

pub fn not_whitelisted_message(subject: &str) -> String {
    format!("\"{subject}\" is not on the whitelist.")
}

/// Handles `resolve <NAME>`.
///
/// Prints the canonical UUID, or a plain not-found message. Causes of failed
/// sources only go to the log.
pub async fn handle_resolve_command(resolver: &Resolver, name: &str) -> Result<String, AppError> {
    match resolver.resolve(name).await {
        Ok(uuid) => Ok(to_canonical(&uuid)),
        Err(e) if e.is_not_found() => Ok(resolve_not_found_message(name)),
        Err(e) => Err(e),
    }
}

/// Handles `add <NAME>`: resolves the name, then whitelists the UUID.
pub async fn handle_add_command(
    resolver: &Resolver,
    whitelist_path: &str,
    name: &str,
) -> Result<String, AppError> {
    let uuid = match resolver.resolve(name).await {
        Ok(uuid) => uuid,
        Err(e) if e.is_not_found() => return Ok(not_found_message(name)),
        Err(e) => return Err(e),
    };

    let mut whitelist = Whitelist::load(whitelist_path).await?;
    match whitelist.add(uuid, name) {
        AddOutcome::AlreadyPresent => Ok(already_whitelisted_message(name)),
        AddOutcome::Added => {
            whitelist.save(whitelist_path).await?;
            info!("Whitelisted {name} as {uuid}");
            Ok(added_message(name))
        }
    }
}

/// Handles `add-uuid <UUID>`: whitelists a UUID without looking anything up.
pub async fn handle_add_uuid_command(
    whitelist_path: &str,
    raw_uuid: &str,
) -> Result<String, AppError> {
    let uuid = match parse_identifier(raw_uuid) {
        Ok(uuid) => uuid,
        Err(e) => {
            warn!("There was an error adding a user by uuid: {raw_uuid}: {e}");
            return Ok(add_uuid_error_message());
        }
    };

    let mut whitelist = Whitelist::load(whitelist_path).await?;
    // Name is unknown without a lookup; the server fills it in on first join
    match whitelist.add(uuid, String::new()) {
        AddOutcome::AlreadyPresent => Ok(already_whitelisted_message(raw_uuid)),
        AddOutcome::Added => {
            whitelist.save(whitelist_path).await?;
            info!("Whitelisted {uuid} by UUID");
            Ok(added_message(raw_uuid))
        }
    }
}

/// Handles `remove <UUID>`.
pub async fn handle_remove_command(
    whitelist_path: &str,
    raw_uuid: &str,
) -> Result<String, AppError> {
    let uuid = parse_identifier(raw_uuid)?;

    let mut whitelist = Whitelist::load(whitelist_path).await?;
    if whitelist.remove(&uuid) {
        whitelist.save(whitelist_path).await?;
        info!("Removed {uuid} from whitelist");
        Ok(removed_message(raw_uuid))
    } else {
        Ok(not_whitelisted_message(raw_uuid))
    }
}

/// Handles `list`: one `<uuid> <name>` line per entry.
pub async fn handle_list_command(whitelist_path: &str) -> Result<String, AppError> {
    let whitelist = Whitelist::load(whitelist_path).await?;
    if whitelist.entries().is_empty() {
        return Ok("The whitelist is empty.".to_string());
    }

    let lines: Vec<String> = whitelist
        .entries()
        .iter()
        .map(|e| format!("{} {}", to_canonical(&e.uuid), e.name).trim_end().to_string())
        .collect();
    Ok(lines.join("\n"))
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::http_client::create_test_http_client;
    use crate::resolver::{ApiScrapeSource, HtmlScrapeSource, JsonApiSource, UuidSource};
    use tempfile::tempdir;
    use wiremock::{Mock, MockServer, ResponseTemplate, matchers::method};

    const NOTCH: &str = "069a79f4-44e9-4726-a5be-fca90e38aaf5";

    /// Resolver whose three sources all point at the same mock server
    fn resolver_for(server: &MockServer) -> Resolver {
        let sources: Vec<Box<dyn UuidSource>> = vec![
            Box::new(JsonApiSource::new(server.uri())),
            Box::new(ApiScrapeSource::new(server.uri())),
            Box::new(HtmlScrapeSource::new(server.uri())),
        ];
        Resolver::new(create_test_http_client(), sources)
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            not_found_message("Notch"),
            "\"Notch\" was not found and could not be added to the whitelist."
        );
        assert_eq!(added_message("Notch"), "\"Notch\" was added to the whitelist.");
        assert_eq!(
            already_whitelisted_message("Notch"),
            "\"Notch\" is already on the whitelist."
        );
    }

    #[tokio::test]
    async fn test_add_unknown_player_reports_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success":false}"#))
            .expect(1)
            .mount(&server)
            .await;
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("whitelist.json");
        let path_str = path.to_string_lossy();

        let message = handle_add_command(&resolver_for(&server), &path_str, "Nobody")
            .await
            .unwrap();

        assert_eq!(message, not_found_message("Nobody"));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_add_all_sources_down_reports_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(3)
            .mount(&server)
            .await;
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("whitelist.json");

        let message =
            handle_add_command(&resolver_for(&server), &path.to_string_lossy(), "Notch")
                .await
                .unwrap();

        assert_eq!(message, not_found_message("Notch"));
    }

    #[tokio::test]
    async fn test_add_uuid_twice() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("whitelist.json");
        let path_str = path.to_string_lossy();

        let first = handle_add_uuid_command(&path_str, NOTCH).await.unwrap();
        let second = handle_add_uuid_command(&path_str, NOTCH).await.unwrap();

        assert_eq!(first, added_message(NOTCH));
        assert_eq!(second, already_whitelisted_message(NOTCH));
    }

    #[tokio::test]
    async fn test_add_uuid_rejects_garbage() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("whitelist.json");

        let message = handle_add_uuid_command(&path.to_string_lossy(), "Notch")
            .await
            .unwrap();

        assert_eq!(message, add_uuid_error_message());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_remove_and_list() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("whitelist.json");
        let path_str = path.to_string_lossy();

        handle_add_uuid_command(&path_str, NOTCH).await.unwrap();
        assert_eq!(handle_list_command(&path_str).await.unwrap(), NOTCH);

        let removed = handle_remove_command(&path_str, NOTCH).await.unwrap();
        assert_eq!(removed, removed_message(NOTCH));

        let again = handle_remove_command(&path_str, NOTCH).await.unwrap();
        assert_eq!(again, not_whitelisted_message(NOTCH));

        assert_eq!(
            handle_list_command(&path_str).await.unwrap(),
            "The whitelist is empty."
        );
    }

    #[tokio::test]
    async fn test_remove_invalid_uuid_is_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("whitelist.json");

        let result = handle_remove_command(&path.to_string_lossy(), "Notch").await;

        assert!(matches!(result, Err(AppError::MalformedIdentifier { .. })));
    }
}
