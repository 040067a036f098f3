//! macprov CLI

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use macprov::types::Platform;

mod cmd;

#[derive(Parser)]
#[command(name = "macprov")]
#[command(author, version = env!("MACPROV_VERSION"))]
#[command(about = "Resolve and install puppet-agent packages on macOS hosts under test")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Target platform of the host being provisioned.
#[derive(Args)]
pub struct PlatformArgs {
    /// Platform triple, e.g. osx-1015-x86_64 (version may be bare or dotted)
    #[arg(long)]
    platform: String,

    /// OS code name, e.g. catalina (not derivable from the triple)
    #[arg(long, default_value = "")]
    codename: String,
}

impl PlatformArgs {
    fn parse(&self) -> Result<Platform> {
        Platform::from_triple(&self.platform, &self.codename).map_err(anyhow::Error::msg)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve package locations on the artifact server
    Resolve {
        #[command(subcommand)]
        command: ResolveCommands,
    },
    /// Install packages on the local host
    Install {
        #[command(subcommand)]
        command: InstallCommands,
    },
    /// Report whether the local host is a 64-bit machine
    Arch,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ResolveCommands {
    /// Locate a dev-build package, probing historical naming conventions
    Dev {
        /// Collection the build belongs to, e.g. puppet7
        #[arg(long)]
        collection: String,
        /// Agent version to locate
        #[arg(long)]
        agent_version: String,
        /// Base URL of the artifact server
        #[arg(long)]
        download_url: String,
        #[command(flatten)]
        platform: PlatformArgs,
        /// Emit the resolved location as JSON
        #[arg(long)]
        json: bool,
    },
    /// Locate a promoted package (no network access needed)
    Promoted {
        /// Collection the release belongs to, e.g. puppet7
        #[arg(long)]
        collection: String,
        /// Agent version; omitted means the oldest naming shape
        #[arg(long)]
        agent_version: Option<String>,
        #[command(flatten)]
        platform: PlatformArgs,
        /// Emit the resolved location as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum InstallCommands {
    /// Install <name>.dmg / <name>.pkg by the default naming convention
    Dmg {
        /// Package name
        name: String,
    },
    /// Install from an explicit disk image
    Image {
        /// Disk image: filename, path, or URL
        image: String,
        /// Directory the image attaches to under /Volumes
        volume_base: String,
        /// Package file handed to the installer
        pkg_file: String,
    },
    /// Install a promoted package from a tarball already on the host
    Promoted {
        /// Directory to extract into
        #[arg(long)]
        copy_base: String,
        /// Path of the copied tarball
        #[arg(long)]
        download: String,
        /// Path of the extracted item, without its .dmg extension
        #[arg(long)]
        extracted: String,
        /// Downloaded file name (cross-platform contract, unused here)
        #[arg(long, default_value = "")]
        file: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { command } => match command {
            ResolveCommands::Dev {
                collection,
                agent_version,
                download_url,
                platform,
                json,
            } => {
                cmd::resolve::dev(&collection, &agent_version, &download_url, platform.parse()?, json)
                    .await
            }
            ResolveCommands::Promoted {
                collection,
                agent_version,
                platform,
                json,
            } => cmd::resolve::promoted(&collection, agent_version.as_deref(), platform.parse()?, json),
        },
        Commands::Install { command } => match command {
            InstallCommands::Dmg { name } => cmd::install::dmg(&name).await,
            InstallCommands::Image {
                image,
                volume_base,
                pkg_file,
            } => cmd::install::image(&image, &volume_base, &pkg_file).await,
            InstallCommands::Promoted {
                copy_base,
                download,
                extracted,
                file,
            } => cmd::install::promoted(&copy_base, &download, &extracted, &file).await,
        },
        Commands::Arch => cmd::arch::arch().await,
        Commands::Completions { shell } => {
            cmd::completions::completions(shell);
            Ok(())
        }
    }
}
