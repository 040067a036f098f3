//! Artifact-server link probing

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Link checks are HEAD-only; anything slower than this reads as absent.
const PROBE_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

const USER_AGENT_STRING: &str = concat!("macprov/", env!("CARGO_PKG_VERSION"));

/// Existence check for a URL on the artifact server. No content is fetched.
#[async_trait]
pub trait LinkProber: Send + Sync {
    /// Whether `url` resolves.
    ///
    /// Transport failures read as `false`: the caller cannot distinguish a
    /// missing artifact from a flaky probe, and resolution simply advances
    /// to the next naming tier.
    async fn link_exists(&self, url: &str) -> bool;
}

/// HEAD-request prober against the real artifact server.
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new() -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(USER_AGENT_STRING)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl LinkProber for HttpProber {
    async fn link_exists(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                debug!("link probe for {url} failed: {err}");
                false
            }
        }
    }
}
