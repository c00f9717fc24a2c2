use crate::error::Result;
use crate::registry::{RegistryEndpoints, build_client, get_json};
use crate::repository::SdkReleaseSource;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::fmt;
use tracing::debug;

/// Release track used to pick the "current" SDK release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    #[default]
    Stable,
    Beta,
}

impl Channel {
    pub fn from_beta_flag(beta: bool) -> Self {
        if beta { Channel::Beta } else { Channel::Stable }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Stable => "stable",
            Channel::Beta => "beta",
        })
    }
}

/// Flutter release feed: current release hash per channel plus every release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SdkReleaseSnapshot {
    pub current_release: CurrentRelease,
    #[serde(default)]
    pub releases: Vec<SdkRelease>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CurrentRelease {
    #[serde(default)]
    pub beta: String,
    #[serde(default)]
    pub stable: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SdkRelease {
    pub hash: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub channel: String,
    /// Flutter SDK version; the feed calls it plain `version`.
    #[serde(rename = "version", default)]
    pub flutter_sdk_version: String,
    #[serde(default)]
    pub dart_sdk_version: String,
}

impl SdkRelease {
    /// Installable Dart version. Beta releases read `3.4.0 (build 3.4.0-282.1.beta)`;
    /// the build string is what the SDK actually reports.
    pub fn dart_version(&self) -> &str {
        let raw = self.dart_sdk_version.trim();
        match raw.split_once("(build ") {
            Some((version, build)) => {
                let build = build.trim_end_matches(')').trim();
                if build.is_empty() { version.trim() } else { build }
            }
            None => raw,
        }
    }

    pub fn flutter_version(&self) -> &str {
        self.flutter_sdk_version.trim()
    }
}

impl SdkReleaseSnapshot {
    pub fn current_hash(&self, channel: Channel) -> &str {
        match channel {
            Channel::Stable => &self.current_release.stable,
            Channel::Beta => &self.current_release.beta,
        }
    }

    /// The release whose hash is the channel's current hash, if listed.
    pub fn current(&self, channel: Channel) -> Option<&SdkRelease> {
        let hash = self.current_hash(channel);
        self.releases.iter().find(|release| release.hash == hash)
    }
}

/// Client for the Flutter SDK release feed.
pub struct SdkReleaseClient {
    client: Client,
    url: String,
}

impl SdkReleaseClient {
    pub fn new(endpoints: &RegistryEndpoints) -> Result<Self> {
        endpoints.validate()?;
        Ok(Self {
            client: build_client(endpoints.timeout)?,
            url: endpoints.sdk_release_url.clone(),
        })
    }

    pub fn fetch_snapshot(&self) -> Result<SdkReleaseSnapshot> {
        let snapshot: SdkReleaseSnapshot = get_json(&self.client, &self.url)?;
        debug!(
            releases = snapshot.releases.len(),
            stable = %snapshot.current_release.stable,
            beta = %snapshot.current_release.beta,
            "fetched SDK release feed"
        );
        Ok(snapshot)
    }
}

impl SdkReleaseSource for SdkReleaseClient {
    fn fetch_sdk_releases(&self) -> Result<SdkReleaseSnapshot> {
        self.fetch_snapshot()
    }
}
