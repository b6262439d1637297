use crate::{
    github::{
        account::Account, builder::BuilderExecutor, github_client::GithubClient,
        response::RepositoryRecord, MAX_PER_PAGE,
    },
    http::Error,
    snapshot::Snapshot,
};
use anyhow::Result;
use std::path::PathBuf;

/// Fetches one page of an account's repositories, keeping the raw body as a
/// snapshot before it is checked and parsed.
pub struct ListingFetcher {
    client: GithubClient,
    per_page: u32,
    snapshot_dir: PathBuf,
}

impl ListingFetcher {
    pub fn new(client: GithubClient, per_page: u32, snapshot_dir: impl Into<PathBuf>) -> Self {
        ListingFetcher {
            client,
            per_page: per_page.clamp(1, MAX_PER_PAGE),
            snapshot_dir: snapshot_dir.into(),
        }
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub async fn fetch(&self, account: &Account, page: u32) -> Result<Vec<RepositoryRecord>> {
        let response = self
            .client
            .account(account)
            .repos()
            .page(page)
            .per_page(self.per_page)
            .execute()
            .await?;

        Snapshot::for_account(&self.snapshot_dir, account)
            .write(&response.body)
            .await?;

        response.ensure_success()?;

        let records = serde_json::from_str::<Vec<RepositoryRecord>>(&response.body)
            .map_err(|cause| Error::ParseResponseError { cause })?;

        log::debug!("page {} has {} repositories", page, records.len());

        Ok(records)
    }
}
