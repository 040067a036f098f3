//! Arch command

use anyhow::Result;

use macprov::{LocalShell, is_64_bit_host};

/// Report whether the local host reports an x86_64 kernel
pub async fn arch() -> Result<()> {
    let shell = LocalShell::new();
    if is_64_bit_host(&shell).await? {
        println!("x86_64");
    } else {
        println!("not x86_64");
    }
    Ok(())
}
