//! Disk-image install orchestration
//!
//! The install flow is a fixed command sequence against the machine under
//! test: fetch the image if it is not already on disk, attach it, run the
//! platform installer from the mounted volume. The typestate chain
//! `DiskImage` → `FetchedImage` → `MountedImage` keeps the steps in order
//! and gives each transition its own failure point.

use tracing::debug;

use crate::io::shell::{ExecOpts, RemoteShell};
use crate::ops::error::Result;

/// Basename of an image reference with a trailing `.dmg` stripped.
/// References may be bare filenames, paths, or URLs.
fn image_basename(image: &str) -> &str {
    let name = image.rsplit('/').next().unwrap_or(image);
    name.strip_suffix(".dmg").unwrap_or(name)
}

/// A disk image that may not be present on the host yet.
#[derive(Debug)]
pub struct DiskImage {
    reference: String,
}

impl DiskImage {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }

    /// Make sure the image exists on the host, downloading it when absent.
    pub async fn ensure_local(self, shell: &impl RemoteShell) -> Result<FetchedImage> {
        let present = shell
            .execute(&format!("test -f {}", self.reference), ExecOpts::accept_all())
            .await?;
        if !present.success() {
            shell
                .execute(&format!("curl -O {}", self.reference), ExecOpts::default())
                .await?;
        }
        Ok(FetchedImage {
            name: image_basename(&self.reference).to_string(),
        })
    }
}

/// An image known to exist in the host's working directory.
#[derive(Debug)]
pub struct FetchedImage {
    name: String,
}

impl FetchedImage {
    pub async fn mount(self, shell: &impl RemoteShell) -> Result<MountedImage> {
        shell
            .execute(&format!("hdiutil attach {}.dmg", self.name), ExecOpts::default())
            .await?;
        Ok(MountedImage {})
    }
}

/// An attached image.
///
/// The volume stays mounted after install; hosts are reprovisioned between
/// runs and the mounted image is left for inspection.
#[derive(Debug)]
pub struct MountedImage {}

impl MountedImage {
    pub async fn run_installer(
        self,
        shell: &impl RemoteShell,
        volume_base: &str,
        pkg_file: &str,
    ) -> Result<()> {
        shell
            .execute(
                &format!("installer -pkg /Volumes/{volume_base}/{pkg_file} -target /"),
                ExecOpts::default(),
            )
            .await?;
        Ok(())
    }
}

/// Install a package from a disk image.
///
/// `image` can be a filename, a path, or a URL; `volume_base` is the
/// directory the image attaches to under `/Volumes`, and `pkg_file` the
/// package file handed to the platform installer.
pub async fn install_from_disk_image(
    shell: &impl RemoteShell,
    image: &str,
    volume_base: &str,
    pkg_file: &str,
) -> Result<()> {
    debug!("installing {pkg_file} from {image} on {}", shell.host());
    DiskImage::new(image)
        .ensure_local(shell)
        .await?
        .mount(shell)
        .await?
        .run_installer(shell, volume_base, pkg_file)
        .await
}

/// Install a package by the default naming convention:
/// `<name>.dmg` attaches under `/Volumes/<name>` and carries `<name>.pkg`.
pub async fn install_package(shell: &impl RemoteShell, name: &str) -> Result<()> {
    install_from_disk_image(shell, &format!("{name}.dmg"), name, &format!("{name}.pkg")).await
}

/// Install a promoted agent package from a tarball already copied to the host.
///
/// Extracts into `copy_base`, moves the unpacked image into the working
/// directory, then runs the standard disk-image install with a wildcard
/// package name. `_download_file` is part of the cross-platform caller
/// contract; this family derives everything from the copied paths.
pub async fn install_promoted_package(
    shell: &impl RemoteShell,
    copy_base: &str,
    copied_download: &str,
    copied_file: &str,
    _download_file: &str,
) -> Result<()> {
    shell
        .execute(
            &format!("tar -zxvf {copied_download} -C {copy_base}"),
            ExecOpts::default(),
        )
        .await?;
    shell
        .execute(&format!("mv {copied_file}.dmg ."), ExecOpts::default())
        .await?;
    install_package(shell, "puppet-agent-*").await
}
