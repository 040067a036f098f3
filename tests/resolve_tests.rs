//! Resolution flows through the public API

use std::sync::Mutex;

use async_trait::async_trait;

use macprov::types::Platform;
use macprov::{
    Error, HttpProber, LinkProber, ResolveRequest, dev_package_location,
    promoted_package_location,
};

/// Prober with a fixed set of existing URLs, recording every probe.
struct StubProber {
    existing: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl StubProber {
    fn new(existing: &[&str]) -> Self {
        Self {
            existing: existing.iter().map(|s| s.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LinkProber for StubProber {
    async fn link_exists(&self, url: &str) -> bool {
        self.calls.lock().unwrap().push(url.to_string());
        self.existing.iter().any(|u| u == url)
    }
}

#[tokio::test]
async fn test_catalina_dev_build_resolves_to_codename_file() {
    // Tier 1 absent, tier 2 present
    let prober = StubProber::new(&[
        "https://x/apple/10.15/puppet6/x86_64/puppet-agent-6.24.0-1.catalina.dmg",
    ]);
    let request = ResolveRequest::new(
        "puppet6",
        "6.24.0",
        "https://x",
        Platform::new("osx", "1015", "x86_64", "catalina"),
    );

    let pkg = dev_package_location(&request, &prober).await.unwrap();
    assert_eq!(pkg.path, "apple/10.15/puppet6/x86_64");
    assert_eq!(pkg.file, "puppet-agent-6.24.0-1.catalina.dmg");
    assert_eq!(
        pkg.url("https://x"),
        "https://x/apple/10.15/puppet6/x86_64/puppet-agent-6.24.0-1.catalina.dmg"
    );
}

#[tokio::test]
async fn test_dev_build_terminal_fallback_probes_twice() {
    let prober = StubProber::new(&[]);
    let request = ResolveRequest::new(
        "PC1",
        "1.2.5",
        "https://builds.example.com",
        Platform::new("osx", "10.9", "x86_64", "mavericks"),
    );

    let pkg = dev_package_location(&request, &prober).await.unwrap();
    assert_eq!(pkg.path, "apple/PC1");
    assert_eq!(pkg.file, "puppet-agent-1.2.5-osx-10.9-x86_64.dmg");
    assert_eq!(prober.call_count(), 2);
}

#[tokio::test]
async fn test_dev_build_missing_collection_before_any_probe() {
    let prober = StubProber::new(&[]);
    let request = ResolveRequest::new(
        "",
        "6.24.0",
        "https://x",
        Platform::new("osx", "1015", "x86_64", "catalina"),
    );

    let err = dev_package_location(&request, &prober).await.unwrap_err();
    assert!(matches!(err, Error::MissingArgument("collection")));
    assert_eq!(prober.call_count(), 0);
}

#[tokio::test]
async fn test_dev_build_against_http_prober() {
    let mut server = mockito::Server::new_async().await;
    let _tier1 = server
        .mock(
            "HEAD",
            "/apple/10.15/puppet6/x86_64/puppet-agent-6.24.0-1.osx10.15.dmg",
        )
        .with_status(404)
        .create_async()
        .await;
    let _tier2 = server
        .mock(
            "HEAD",
            "/apple/10.15/puppet6/x86_64/puppet-agent-6.24.0-1.catalina.dmg",
        )
        .with_status(200)
        .create_async()
        .await;

    let prober = HttpProber::new().unwrap();
    let request = ResolveRequest::new(
        "puppet6",
        "6.24.0",
        &server.url(),
        Platform::new("osx", "1015", "x86_64", "catalina"),
    );

    let pkg = dev_package_location(&request, &prober).await.unwrap();
    assert_eq!(pkg.file, "puppet-agent-6.24.0-1.catalina.dmg");
}

#[test]
fn test_promoted_resolution_is_offline() {
    let platform = Platform::new("osx", "11", "arm64", "big_sur");
    let pkg = promoted_package_location("puppet7", Some("7.20.0"), &platform).unwrap();
    assert_eq!(pkg.path, "");
    assert_eq!(pkg.release_glob, "/repos/apple/11/puppet7/arm64/puppet-agent-*");
    assert_eq!(pkg.file, "puppet-agent-osx-11-arm64.tar.gz");
}
