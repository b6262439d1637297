use anyhow::{Context, Result};
use std::process::Stdio;
use tokio::process::Command;

/// Exit status of a finished command. `code` is `None` when the process was
/// terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus {
    code: Option<i32>,
}

impl ExitStatus {
    pub fn from_code(code: i32) -> Self {
        ExitStatus { code: Some(code) }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        ExitStatus {
            code: status.code(),
        }
    }
}

pub trait CommandRunner {
    async fn run(&self, command: &str, args: &[String]) -> Result<ExitStatus>;
}

/// Runs commands as child processes sharing this process' stdout and stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &str, args: &[String]) -> Result<ExitStatus> {
        let status = Command::new(command)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .with_context(|| format!("Cannot start {}", command))?
            .wait()
            .await?;

        Ok(status.into())
    }
}
