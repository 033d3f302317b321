use clap::Parser;
use custom_whitelist::cli::{Args, Command, check_conflicts, is_config_only};
use custom_whitelist::commands::{
    handle_add_command, handle_add_uuid_command, handle_config_update_command,
    handle_list_command, handle_list_config_command, handle_remove_command,
    handle_resolve_command,
};
use custom_whitelist::config::Config;
use custom_whitelist::error::AppError;
use custom_whitelist::logging::setup_logging;
use custom_whitelist::resolver::Resolver;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();
    if let Err(e) = check_conflicts(&args) {
        e.exit();
    }

    // Config operations run before logging so a broken config can still be fixed
    if is_config_only(&args) {
        return if args.list_config {
            handle_list_config_command().await
        } else {
            handle_config_update_command(&args).await
        };
    }

    let config = Config::load().await?;
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let Some(command) = args.command.clone() else {
        println!("No command given. Run with --help for usage.");
        return Ok(());
    };

    let whitelist_path = config.effective_whitelist_path();
    let message = match command {
        Command::Resolve { name } => {
            let resolver = Resolver::from_config(&config)?;
            handle_resolve_command(&resolver, &name).await?
        }
        Command::Add { name } => {
            let resolver = Resolver::from_config(&config)?;
            handle_add_command(&resolver, &whitelist_path, &name).await?
        }
        Command::AddUuid { uuid } => handle_add_uuid_command(&whitelist_path, &uuid).await?,
        Command::Remove { uuid } => handle_remove_command(&whitelist_path, &uuid).await?,
        Command::List => handle_list_command(&whitelist_path).await?,
    };

    println!("{message}");
    Ok(())
}
