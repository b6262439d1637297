use super::{runner::CommandRunner, throttle::Throttle};
use crate::{
    config::ScannerConfig,
    github::{account::Account, response::RepositoryRecord},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    Success,
    /// The scanner ran but did not exit cleanly
    Failed(Option<i32>),
    /// The scanner could not be started
    NotStarted,
}

impl ScanOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ScanOutcome::Success)
    }
}

pub struct ScanInvoker<R: CommandRunner> {
    runner: R,
    scanner: ScannerConfig,
    github_url: String,
    throttle: Throttle,
}

impl<R: CommandRunner> ScanInvoker<R> {
    pub fn new(
        runner: R,
        scanner: ScannerConfig,
        github_url: impl Into<String>,
        throttle: Throttle,
    ) -> Self {
        let github_url: String = github_url.into();

        ScanInvoker {
            runner,
            scanner,
            github_url: github_url.trim_end_matches('/').to_owned(),
            throttle,
        }
    }

    #[cfg(test)]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn repository_url(&self, account: &Account, record: &RepositoryRecord) -> String {
        format!("{}/{}/{}", self.github_url, account.name(), record.name)
    }

    pub fn arguments(&self, repository_url: &str) -> Vec<String> {
        let mut args = vec!["--rules".to_owned(), self.scanner.rules.to_owned()];

        if self.scanner.regex {
            args.push("--regex".to_owned());
        }

        let entropy = if self.scanner.entropy { "TRUE" } else { "FALSE" };
        args.push("--entropy".to_owned());
        args.push(entropy.to_owned());

        args.push(repository_url.to_owned());
        args
    }

    /// Runs the scanner against one repository and then waits on the throttle.
    /// A failing scanner never aborts the run.
    pub async fn scan(&self, account: &Account, record: &RepositoryRecord) -> ScanOutcome {
        let url = self.repository_url(account, record);
        let args = self.arguments(&url);

        log::info!("Checking {}", record.name);
        log::debug!("running {} {}", self.scanner.program, args.join(" "));

        let outcome = match self.runner.run(&self.scanner.program, &args).await {
            Ok(status) if status.success() => ScanOutcome::Success,
            Ok(status) => {
                log::warn!(
                    "{} exited with {} for {}",
                    self.scanner.program,
                    status
                        .code()
                        .map(|code| code.to_string())
                        .unwrap_or_else(|| "a signal".to_owned()),
                    url
                );
                ScanOutcome::Failed(status.code())
            }
            Err(err) => {
                log::error!("Cannot scan {}: {:#}", url, err);
                ScanOutcome::NotStarted
            }
        };

        self.throttle.wait().await;

        outcome
    }
}
