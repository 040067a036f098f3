//! Resolve commands

use anyhow::{Context, Result};

use macprov::types::Platform;
use macprov::{HttpProber, ResolveRequest, dev_package_location, promoted_package_location};

/// Resolve a dev-build package location by probing the artifact server
pub async fn dev(
    collection: &str,
    agent_version: &str,
    download_url: &str,
    platform: Platform,
    json: bool,
) -> Result<()> {
    let prober = HttpProber::new().context("Failed to build probe client")?;
    let request = ResolveRequest::new(collection, agent_version, download_url, platform);
    let pkg = dev_package_location(&request, &prober).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&pkg)?);
    } else {
        println!("{}", pkg.url(download_url));
    }
    Ok(())
}

/// Resolve a promoted package location from the version alone
pub fn promoted(
    collection: &str,
    agent_version: Option<&str>,
    platform: Platform,
    json: bool,
) -> Result<()> {
    let pkg = promoted_package_location(collection, agent_version, &platform)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&pkg)?);
    } else {
        println!("{}", pkg.release_glob);
        println!("{}", pkg.file);
    }
    Ok(())
}
