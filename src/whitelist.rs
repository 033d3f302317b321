//! Server whitelist file.
//!
//! Stored in the `whitelist.json` layout Minecraft servers read: a JSON array
//! of `{"uuid": "...", "name": "..."}` objects. Entries are keyed by UUID;
//! the name is informational only.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitelistEntry {
    pub uuid: Uuid,
    pub name: String,
}

/// Result of adding a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Whitelist {
    entries: Vec<WhitelistEntry>,
}

impl Whitelist {
    /// Loads the whitelist from `path`. A missing file is an empty whitelist.
    pub async fn load(path: &str) -> Result<Self, AppError> {
        if !Path::new(path).exists() {
            debug!("No whitelist at {path}, starting empty");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).await?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let entries: Vec<WhitelistEntry> = serde_json::from_str(&content)?;
        debug!("Loaded {} whitelist entries from {path}", entries.len());
        Ok(Self { entries })
    }

    /// Writes the whitelist to `path`, creating parent directories as needed.
    pub async fn save(&self, path: &str) -> Result<(), AppError> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        info!("Saved {} whitelist entries to {path}", self.entries.len());
        Ok(())
    }

    pub fn contains(&self, uuid: &Uuid) -> bool {
        self.entries.iter().any(|e| &e.uuid == uuid)
    }

    /// Adds a player unless their UUID is already listed.
    pub fn add(&mut self, uuid: Uuid, name: impl Into<String>) -> AddOutcome {
        if self.contains(&uuid) {
            return AddOutcome::AlreadyPresent;
        }
        self.entries.push(WhitelistEntry {
            uuid,
            name: name.into(),
        });
        AddOutcome::Added
    }

    /// Removes the player with `uuid`. Returns whether an entry was removed.
    pub fn remove(&mut self, uuid: &Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| &e.uuid != uuid);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[WhitelistEntry] {
        &self.entries
    }
}
