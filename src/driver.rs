use crate::{
    github::account::Account,
    listing::ListingFetcher,
    scan::{
        invoker::{ScanInvoker, ScanOutcome},
        runner::CommandRunner,
    },
};
use anyhow::{Context, Result};
use tokio_stream::StreamExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    /// Fetch exactly this many pages, stopping early on an empty one
    Fixed(u32),
    /// Fetch pages until one comes back empty
    UntilEmpty,
}

impl Pagination {
    /// Whether the 1-based `page` may be requested
    pub fn allows(&self, page: u32) -> bool {
        match self {
            Pagination::Fixed(pages) => page <= *pages,
            Pagination::UntilEmpty => true,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub pages: u32,
    pub scanned: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: ScanOutcome) {
        self.scanned += 1;
        if !outcome.is_success() {
            self.failed += 1;
        }
    }
}

pub struct Driver<R: CommandRunner> {
    account: Account,
    fetcher: ListingFetcher,
    invoker: ScanInvoker<R>,
    pagination: Pagination,
}

impl<R: CommandRunner> Driver<R> {
    pub fn new(
        account: Account,
        fetcher: ListingFetcher,
        invoker: ScanInvoker<R>,
        pagination: Pagination,
    ) -> Self {
        Driver {
            account,
            fetcher,
            invoker,
            pagination,
        }
    }

    /// Fetches page after page and scans every repository of a page before
    /// requesting the next one. Any fetch failure ends the run.
    pub async fn run(&self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let mut page = 1;

        while self.pagination.allows(page) {
            log::debug!("fetching page {} ({} per page)", page, self.fetcher.per_page());
            let records = self
                .fetcher
                .fetch(&self.account, page)
                .await
                .with_context(|| format!("Cannot fetch page {} of {}", page, self.account))?;
            summary.pages += 1;

            if records.is_empty() {
                log::debug!("page {} is empty, no more repositories", page);
                break;
            }

            let mut stream = tokio_stream::iter(records);
            while let Some(record) = stream.next().await {
                let outcome = self.invoker.scan(&self.account, &record).await;
                summary.record(outcome);
            }

            page += 1;
        }

        Ok(summary)
    }

    #[cfg(test)]
    fn invoker(&self) -> &ScanInvoker<R> {
        &self.invoker
    }
}
