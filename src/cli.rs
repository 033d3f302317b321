use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the invocation only touches configuration and needs no lookup
pub fn is_config_only(args: &Args) -> bool {
    args.list_config || args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// Rejects a configuration flag combined with a subcommand; config operations run alone.
pub fn check_conflicts(args: &Args) -> Result<(), clap::Error> {
    if is_config_only(args) && args.command.is_some() {
        return Err(Args::command().error(
            ErrorKind::ArgumentConflict,
            "configuration flags cannot be combined with a subcommand",
        ));
    }
    Ok(())
}

/// Custom Whitelist
///
/// Resolves Minecraft player names to UUIDs and maintains a server whitelist.
///
/// Names are looked up on three services in a fixed order. A service that is
/// down or answers garbage is skipped; a service that says the player does not
/// exist ends the lookup.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// Also print logs to the terminal, including the cause of every skipped source.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the UUID of a player
    Resolve {
        /// Player name, used exactly as given
        name: String,
    },
    /// Look up a player by name and add them to the whitelist
    Add {
        /// Player name, used exactly as given
        name: String,
    },
    /// Add a player to the whitelist by UUID without any lookup
    AddUuid {
        /// UUID in hyphenated or 32-digit form
        uuid: String,
    },
    /// Remove a player from the whitelist by UUID
    Remove {
        /// UUID in hyphenated or 32-digit form
        uuid: String,
    },
    /// List whitelisted players
    List,
}
