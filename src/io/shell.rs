//! Remote shell execution seam
//!
//! The harness owns the transport to the machine under test (SSH, VM
//! console, container exec). This module defines the seam plus a local
//! implementation the CLI uses when the target is the current machine.
//! Timeout and cancellation policy live in the implementation; callers
//! block until an exit code is observed.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::ops::error::{Error, Result};

/// Per-command execution options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecOpts {
    /// Hand the outcome back verbatim instead of failing on non-zero exit.
    pub accept_all_exit_codes: bool,
}

impl ExecOpts {
    pub fn accept_all() -> Self {
        Self {
            accept_all_exit_codes: true,
        }
    }
}

/// Result of one remote command.
#[derive(Debug, Clone)]
pub struct ExecOutcome {
    pub exit_code: i32,
    pub output: String,
}

impl ExecOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// A shell on the machine under test.
#[async_trait]
pub trait RemoteShell: Send + Sync {
    /// Run `command`, blocking until its exit code is observed.
    ///
    /// A non-zero exit is `Error::CommandFailed` unless
    /// `opts.accept_all_exit_codes` is set.
    async fn execute(&self, command: &str, opts: ExecOpts) -> Result<ExecOutcome>;

    /// Host name for diagnostics.
    fn host(&self) -> &str;
}

/// Runs commands on the local machine through `sh -c`.
pub struct LocalShell {
    host: String,
}

impl LocalShell {
    pub fn new() -> Self {
        Self {
            host: "localhost".to_string(),
        }
    }
}

impl Default for LocalShell {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteShell for LocalShell {
    async fn execute(&self, command: &str, opts: ExecOpts) -> Result<ExecOutcome> {
        debug!("executing on {}: {command}", self.host);
        let out = Command::new("sh").arg("-c").arg(command).output().await?;

        let exit_code = out.status.code().unwrap_or(-1);
        let mut output = String::from_utf8_lossy(&out.stdout).into_owned();
        output.push_str(&String::from_utf8_lossy(&out.stderr));

        if exit_code != 0 && !opts.accept_all_exit_codes {
            return Err(Error::CommandFailed {
                command: command.to_string(),
                exit_code,
                output,
            });
        }
        Ok(ExecOutcome { exit_code, output })
    }

    fn host(&self) -> &str {
        &self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_execute_captures_output() {
        let shell = LocalShell::new();
        let outcome = shell
            .execute("echo provisioned", ExecOpts::default())
            .await
            .unwrap();
        assert!(outcome.success());
        assert_eq!(outcome.output.trim(), "provisioned");
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_an_error_by_default() {
        let shell = LocalShell::new();
        let err = shell.execute("exit 3", ExecOpts::default()).await.unwrap_err();
        match err {
            Error::CommandFailed {
                command, exit_code, ..
            } => {
                assert_eq!(command, "exit 3");
                assert_eq!(exit_code, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_accept_all_exit_codes() {
        let shell = LocalShell::new();
        let outcome = shell
            .execute("exit 3", ExecOpts::accept_all())
            .await
            .unwrap();
        assert_eq!(outcome.exit_code, 3);
        assert!(!outcome.success());
    }
}
