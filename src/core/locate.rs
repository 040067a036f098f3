//! Artifact location resolution
//!
//! Dev builds moved across three directory/naming conventions over the
//! years, so the dev locator probes the artifact server to find which era a
//! build belongs to. Promoted tarballs kept a stable server layout but
//! changed filename shape on specific agent releases, so the promoted
//! locator decides purely from the version number and never touches the
//! network.

use serde::Serialize;
use tracing::debug;

use crate::core::version::numeric_prefix;
use crate::io::probe::LinkProber;
use crate::ops::error::{Error, Result};
use crate::types::Platform;

/// Directory family for macOS builds on the artifact server.
const REPO_FAMILY: &str = "apple";

/// Default package base name for agent builds.
pub const DEFAULT_PACKAGE_BASE: &str = "puppet-agent";

/// Inputs for a dev-build resolution.
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// Package base name, `puppet-agent` unless overridden.
    pub base: String,
    pub collection: String,
    pub agent_version: String,
    /// Base URL of the artifact server.
    pub download_url: String,
    pub platform: Platform,
}

impl ResolveRequest {
    pub fn new(
        collection: &str,
        agent_version: &str,
        download_url: &str,
        platform: Platform,
    ) -> Self {
        Self {
            base: DEFAULT_PACKAGE_BASE.to_string(),
            collection: collection.to_string(),
            agent_version: agent_version.to_string(),
            download_url: download_url.to_string(),
            platform,
        }
    }
}

/// A resolved dev-build artifact: directory suffix on the server plus filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevPackage {
    pub path: String,
    pub file: String,
}

impl DevPackage {
    /// Full download URL for this artifact.
    pub fn url(&self, download_url: &str) -> String {
        format!("{download_url}/{}/{}", self.path, self.file)
    }
}

/// A resolved promoted-build artifact.
///
/// `path` is always empty on this platform family; other families populate
/// it, and callers expect all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromotedPackage {
    pub path: String,
    /// Glob over the release server, expanded by the remote shell.
    pub release_glob: String,
    pub file: String,
}

/// Resolve the server location of a dev-build agent package.
///
/// Tries three naming eras, most recent first, probing the artifact server
/// for each until one resolves:
///
/// 1. versioned path, version-coded filename (`…-1.osx10.15.dmg`)
/// 2. same path, code-name filename (`…-1.catalina.dmg`)
/// 3. flat legacy path, long-form filename (`…-osx-10.15-x86_64.dmg`)
///
/// Tier 3 is a terminal fallback and is returned without a confirming
/// probe, so callers must treat it as best-effort. A probe that fails for a
/// transient reason reads the same as an absent artifact and simply
/// advances to the next tier.
pub async fn dev_package_location(
    req: &ResolveRequest,
    prober: &impl LinkProber,
) -> Result<DevPackage> {
    if req.collection.is_empty() {
        return Err(Error::MissingArgument("collection"));
    }
    if req.agent_version.is_empty() {
        return Err(Error::MissingArgument("agent_version"));
    }
    if req.download_url.is_empty() {
        return Err(Error::MissingArgument("download_url"));
    }

    let version = req.platform.dotted_version();
    let base = format!("{}-{}", req.base, req.agent_version);

    // Current layout: versioned path, version-coded filename.
    let path = format!(
        "{REPO_FAMILY}/{version}/{}/{}",
        req.collection, req.platform.arch
    );
    let file = format!("{base}-1.osx{version}.dmg");
    if probe(prober, &req.download_url, &path, &file).await {
        return Ok(DevPackage { path, file });
    }

    // Interim era: same path, code-name filenames. Dropped once the
    // objection came up that the code name is not a queryable fact.
    let file = format!("{base}-1.{}.dmg", req.platform.codename);
    if probe(prober, &req.download_url, &path, &file).await {
        return Ok(DevPackage { path, file });
    }

    // Oldest layout. Not probed: if the newer tiers are absent this is the
    // only place left, so the answer is best-effort by contract.
    let path = format!("{REPO_FAMILY}/{}", req.collection);
    let file = format!("{base}-{}-{version}-x86_64.dmg", req.platform.variant);
    Ok(DevPackage { path, file })
}

async fn probe(
    prober: &impl LinkProber,
    download_url: &str,
    path: &str,
    file: &str,
) -> bool {
    let url = format!("{download_url}/{path}/{file}");
    let exists = prober.link_exists(&url).await;
    debug!(
        "dev package probe {url}: {}",
        if exists { "present" } else { "absent" }
    );
    exists
}

/// Resolve the server location of a promoted agent package.
///
/// The release glob is layout-stable; only the compressed-artifact filename
/// changed over time. Tarballs carry the architecture from agent 6.28
/// onward, except the 7.0 to 7.18 band which shipped unqualified names
/// again.
///
/// # Example
///
/// ```
/// use macprov::promoted_package_location;
/// use macprov::types::Platform;
///
/// let platform = Platform::new("osx", "10.15", "x86_64", "catalina");
/// let pkg = promoted_package_location("puppet7", Some("7.18.0"), &platform).unwrap();
/// assert_eq!(pkg.file, "puppet-agent-osx-10.15-x86_64.tar.gz");
/// ```
pub fn promoted_package_location(
    collection: &str,
    agent_version: Option<&str>,
    platform: &Platform,
) -> Result<PromotedPackage> {
    if collection.is_empty() {
        return Err(Error::MissingArgument("collection"));
    }

    let Platform {
        variant,
        version,
        arch,
        ..
    } = platform;
    let release_glob =
        format!("/repos/{REPO_FAMILY}/{version}/{collection}/{arch}/puppet-agent-*");

    let unqualified = match agent_version.and_then(numeric_prefix) {
        None => true,
        Some(v) => v < 6.28 || (v >= 7.0 && v < 7.18),
    };
    let file = if unqualified {
        format!("puppet-agent-{variant}-{version}.tar.gz")
    } else {
        format!("puppet-agent-{variant}-{version}-{arch}.tar.gz")
    };

    Ok(PromotedPackage {
        path: String::new(),
        release_glob,
        file,
    })
}
