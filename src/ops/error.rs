//! Domain-specific errors for provisioning operations

use thiserror::Error;

/// Operations the macOS platform family cannot perform.
///
/// Carried in [`Error::NotSupported`] so callers can branch on the gap
/// without matching message strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedOp {
    Query,
    Uninstall,
    Upgrade,
}

impl std::fmt::Display for UnsupportedOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self {
            UnsupportedOp::Query => "queried",
            UnsupportedOp::Uninstall => "uninstalled",
            UnsupportedOp::Upgrade => "upgraded",
        };
        write!(f, "{verb}")
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// A required resolution input was absent. Raised before any remote
    /// interaction, naming the specific missing field.
    #[error("must provide {0} argument to get puppet agent package information")]
    MissingArgument(&'static str),

    #[error("package '{package}' cannot be {op} on '{host}'")]
    NotSupported {
        op: UnsupportedOp,
        package: String,
        host: String,
    },

    #[error("command `{command}` exited {exit_code}: {output}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        output: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
