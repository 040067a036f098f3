//! Target platform descriptor

use serde::{Deserialize, Serialize};

/// The OS of a machine under test.
///
/// Mirrors the harness's `variant-version-arch` platform strings, with the
/// marketing code name carried separately because it cannot be derived from
/// the numeric version (`osx-1015-x86_64` plus `catalina`).
///
/// # Example
///
/// ```
/// use macprov::types::Platform;
///
/// let platform = Platform::from_triple("osx-1015-x86_64", "catalina").unwrap();
/// assert_eq!(platform.dotted_version(), "10.15");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub variant: String,
    pub version: String,
    pub arch: String,
    pub codename: String,
}

impl Platform {
    pub fn new(variant: &str, version: &str, arch: &str, codename: &str) -> Self {
        Self {
            variant: variant.to_string(),
            version: version.to_string(),
            arch: arch.to_string(),
            codename: codename.to_string(),
        }
    }

    /// Parse a harness platform triple like `osx-1015-x86_64`.
    ///
    /// The code name is supplied separately since the triple does not carry it.
    pub fn from_triple(triple: &str, codename: &str) -> Result<Self, String> {
        let mut parts = triple.splitn(3, '-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(variant), Some(version), Some(arch))
                if !variant.is_empty() && !version.is_empty() && !arch.is_empty() =>
            {
                Ok(Self::new(variant, version, arch, codename))
            }
            _ => Err(format!(
                "Invalid platform triple '{triple}': expected variant-version-arch"
            )),
        }
    }

    /// OS version in `major.minor` form.
    ///
    /// Harness platform strings carry bare digit runs (`"1015"`); artifact
    /// paths want the dotted form (`"10.15"`), split as the first two and
    /// next two digits. Versions that already contain a separator pass
    /// through unchanged.
    pub fn dotted_version(&self) -> String {
        if self.version.contains('.') {
            return self.version.clone();
        }
        let split = self.version.len().min(2);
        let (major, rest) = self.version.split_at(split);
        let minor = &rest[..rest.len().min(2)];
        format!("{major}.{minor}")
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.variant, self.version, self.arch)
    }
}
