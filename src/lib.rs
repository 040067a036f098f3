//! macprov - macOS host provisioning
//!
//! Resolves and installs puppet-agent packages on macOS machines under
//! test, for harnesses that provision hosts before a run.
//!
//! # Overview
//!
//! Two independent resolvers feed one installer. The dev-build locator
//! probes the artifact server across three historical naming conventions
//! until one resolves; the promoted-build locator derives the tarball name
//! purely from the agent version. The installer then drives the host
//! through the download/attach/install command sequence.
//!
//! # Architecture
//!
//! - **Trait seams**: the harness supplies the transport. [`RemoteShell`]
//!   runs commands on the target host, [`LinkProber`] answers URL
//!   existence checks. [`LocalShell`] and [`HttpProber`] are the shipped
//!   implementations.
//! - **Typestate pattern**: the install flow uses `DiskImage` →
//!   `FetchedImage` → `MountedImage` to enforce correct ordering at
//!   compile time.
//! - **Stateless resolution**: locators are free functions over an explicit
//!   [`types::Platform`]; nothing is cached between calls.

pub mod core;
pub mod io;
pub mod ops;
pub mod types;

// Re-exports for convenience
pub use crate::core::locate::{
    DevPackage, PromotedPackage, ResolveRequest, dev_package_location, promoted_package_location,
};
pub use crate::io::probe::{HttpProber, LinkProber};
pub use crate::io::shell::{ExecOpts, ExecOutcome, LocalShell, RemoteShell};
pub use crate::ops::error::{Error, Result, UnsupportedOp};
pub use crate::ops::install::{install_from_disk_image, install_package, install_promoted_package};
pub use crate::ops::package::{
    check_for_package, is_64_bit_host, uninstall_package, upgrade_package,
};
