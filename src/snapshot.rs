use crate::github::account::Account;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// On-disk copy of the most recently fetched listing page, kept for inspection
#[derive(Debug, Clone)]
pub struct Snapshot {
    path: PathBuf,
}

impl Snapshot {
    pub fn for_account(dir: impl AsRef<Path>, account: &Account) -> Self {
        Snapshot {
            path: dir.as_ref().join(format!("{}.json", account.name())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the file contents with `body`
    pub async fn write(&self, body: &str) -> Result<()> {
        log::debug!("writing snapshot to {}", self.path().display());

        tokio::fs::write(&self.path, body)
            .await
            .with_context(|| format!("Cannot write snapshot {}", self.path.display()))
    }
}
