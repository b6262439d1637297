pub mod invoker;
pub mod runner;
pub mod throttle;

use anyhow::{bail, Result};
use std::path::PathBuf;

/// Resolves the scanner program on `PATH`
pub fn check_scanner(program: &str) -> Result<PathBuf> {
    match which::which(program) {
        Ok(path) => {
            log::debug!("using scanner at {}", path.display());
            Ok(path)
        }
        Err(error) => {
            log::error!("Cannot find scanner {}", program);
            bail!(anyhow::anyhow!(
                "Cannot find scanner `{}` on PATH: {}",
                program,
                error
            ));
        }
    }
}

#[cfg(test)]
pub mod fake {
    use super::runner::{CommandRunner, ExitStatus};
    use anyhow::{bail, Result};
    use std::{
        collections::{HashMap, HashSet},
        sync::Mutex,
        time::Instant,
    };

    #[derive(Debug, Clone)]
    pub struct Invocation {
        pub command: String,
        pub args: Vec<String>,
        pub at: Instant,
    }

    impl Invocation {
        /// The repository URL, always the last argument
        pub fn target(&self) -> &str {
            self.args.last().map(String::as_str).unwrap_or_default()
        }
    }

    /// Records every invocation and exits with scripted codes, keyed by the
    /// repository URL the scanner is pointed at.
    #[derive(Default)]
    pub struct FakeRunner {
        invocations: Mutex<Vec<Invocation>>,
        exit_codes: HashMap<String, i32>,
        unavailable: HashSet<String>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            FakeRunner::default()
        }

        pub fn exit_with(mut self, target: impl Into<String>, code: i32) -> Self {
            self.exit_codes.insert(target.into(), code);
            self
        }

        pub fn unavailable_for(mut self, target: impl Into<String>) -> Self {
            self.unavailable.insert(target.into());
            self
        }

        pub fn invocations(&self) -> Vec<Invocation> {
            self.invocations.lock().unwrap().clone()
        }

        pub fn targets(&self) -> Vec<String> {
            self.invocations()
                .iter()
                .map(|invocation| invocation.target().to_owned())
                .collect()
        }
    }

    impl CommandRunner for FakeRunner {
        async fn run(&self, command: &str, args: &[String]) -> Result<ExitStatus> {
            let invocation = Invocation {
                command: command.to_owned(),
                args: args.to_vec(),
                at: Instant::now(),
            };
            let target = invocation.target().to_owned();
            self.invocations.lock().unwrap().push(invocation);

            if self.unavailable.contains(&target) {
                bail!("{} is not available", command);
            }

            Ok(ExitStatus::from_code(
                self.exit_codes.get(&target).copied().unwrap_or(0),
            ))
        }
    }
}
