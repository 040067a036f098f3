//! Install commands

use anyhow::Result;

use macprov::{LocalShell, install_from_disk_image, install_package, install_promoted_package};

/// Install a package by the default <name>.dmg / <name>.pkg convention
pub async fn dmg(name: &str) -> Result<()> {
    let shell = LocalShell::new();
    install_package(&shell, name).await?;
    println!("Installed {name}");
    Ok(())
}

/// Install from an explicit disk image
pub async fn image(image: &str, volume_base: &str, pkg_file: &str) -> Result<()> {
    let shell = LocalShell::new();
    install_from_disk_image(&shell, image, volume_base, pkg_file).await?;
    println!("Installed {pkg_file} from {image}");
    Ok(())
}

/// Install a promoted package from a tarball already on the host
pub async fn promoted(
    copy_base: &str,
    download: &str,
    extracted: &str,
    file: &str,
) -> Result<()> {
    let shell = LocalShell::new();
    install_promoted_package(&shell, copy_base, download, extracted, file).await?;
    println!("Installed promoted agent package");
    Ok(())
}
