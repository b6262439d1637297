mod config;
mod driver;
mod github;
mod http;
mod listing;
mod logger;
mod scan;
mod snapshot;

use anyhow::{Context, Result};
use config::Config;
use driver::Driver;
use github::github_client::GithubClient;
use listing::ListingFetcher;
use scan::{invoker::ScanInvoker, runner::ProcessRunner};
use std::{env, path::PathBuf};

#[tokio::main]
async fn main() -> Result<()> {
    logger::init()?;

    log::info!("Starting");
    let config_path = env::args().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref())
        .await
        .context("Cannot load config file")?;

    scan::check_scanner(&config.scanner.program)?;

    let account = config.account();
    let fetcher = ListingFetcher::new(
        GithubClient::new(&config.api_url),
        config.per_page,
        &config.snapshot_dir,
    );
    let invoker = ScanInvoker::new(
        ProcessRunner,
        config.scanner.clone(),
        &config.github_url,
        config.throttle(),
    );

    log::info!(
        "Scanning repositories of {}, waiting {:?} between scans",
        account,
        config.throttle().interval()
    );
    let summary = Driver::new(account, fetcher, invoker, config.pagination())
        .run()
        .await
        .context("Cannot scan repositories")?;

    log::info!(
        "Done: {} repositories scanned over {} pages, {} did not finish cleanly",
        summary.scanned,
        summary.pages,
        summary.failed
    );

    Ok(())
}
