//! Package-manager surface for the macOS platform family
//!
//! macOS hosts get agent builds via disk images; there is no package
//! manager to ask about installed state. Query, uninstall, and upgrade are
//! hard capability gaps and fail up front, before any remote command is
//! issued.

use crate::io::shell::{ExecOpts, RemoteShell};
use crate::ops::error::{Error, Result, UnsupportedOp};

/// Whether the host reports an x86_64 kernel.
///
/// The grep's non-zero exit is the "no" answer, not a failure.
pub async fn is_64_bit_host(shell: &impl RemoteShell) -> Result<bool> {
    let outcome = shell
        .execute("uname -a | grep x86_64", ExecOpts::accept_all())
        .await?;
    Ok(outcome.success())
}

pub fn check_for_package(shell: &impl RemoteShell, name: &str) -> Result<bool> {
    Err(Error::NotSupported {
        op: UnsupportedOp::Query,
        package: name.to_string(),
        host: shell.host().to_string(),
    })
}

pub fn uninstall_package(shell: &impl RemoteShell, name: &str) -> Result<()> {
    Err(Error::NotSupported {
        op: UnsupportedOp::Uninstall,
        package: name.to_string(),
        host: shell.host().to_string(),
    })
}

pub fn upgrade_package(shell: &impl RemoteShell, name: &str) -> Result<()> {
    Err(Error::NotSupported {
        op: UnsupportedOp::Upgrade,
        package: name.to_string(),
        host: shell.host().to_string(),
    })
}
