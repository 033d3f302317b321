//! Player name to UUID resolution for server whitelists
//!
//! Names are resolved by asking three lookup services in a fixed order and
//! falling back past any service that is down or answers with something
//! unexpected.
//!
//! # Examples
//!
//! ```rust,no_run
//! use custom_whitelist::config::Config;
//! use custom_whitelist::error::AppError;
//! use custom_whitelist::resolver::Resolver;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let resolver = Resolver::from_config(&config)?;
//!
//!     match resolver.resolve("Notch").await {
//!         Ok(uuid) => println!("Notch is {uuid}"),
//!         Err(e) if e.is_not_found() => println!("Notch was not found"),
//!         Err(e) => return Err(e),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod identifier;
pub mod logging;
pub mod resolver;
pub mod whitelist;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use resolver::{Resolver, SourceResult, UuidSource};
pub use whitelist::{AddOutcome, Whitelist};

