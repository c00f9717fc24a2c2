pub mod pub_dev;
pub mod sdk_release;

pub use pub_dev::{PackageInfo, PubDevClient};
pub use sdk_release::{Channel, SdkRelease, SdkReleaseClient, SdkReleaseSnapshot};

use crate::error::{PubyError, Result};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const DEFAULT_SDK_RELEASE_URL: &str =
    "https://storage.googleapis.com/flutter_infra_release/releases/releases_macos.json";
pub const DEFAULT_PACKAGE_URL: &str = "https://pub.dev/api/packages/{name}";
pub const PACKAGE_NAME_PLACEHOLDER: &str = "{name}";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_RESPONSE_BYTES: usize = 20 * 1024 * 1024;

/// Where the two registries live and how long a single request may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEndpoints {
    pub sdk_release_url: String,
    /// Package endpoint with a `{name}` placeholder for the package name.
    pub package_url_template: String,
    pub timeout: Duration,
}

impl Default for RegistryEndpoints {
    fn default() -> Self {
        Self {
            sdk_release_url: DEFAULT_SDK_RELEASE_URL.to_string(),
            package_url_template: DEFAULT_PACKAGE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl RegistryEndpoints {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_url(&self.sdk_release_url)?;

        if !self.package_url_template.contains(PACKAGE_NAME_PLACEHOLDER) {
            return Err(PubyError::InvalidConfig(format!(
                "Package URL '{}' has no {} placeholder",
                self.package_url_template, PACKAGE_NAME_PLACEHOLDER
            )));
        }
        validate_url(&self.package_url(""))?;

        if self.timeout.is_zero() {
            return Err(PubyError::InvalidConfig(
                "Request timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn package_url(&self, package_name: &str) -> String {
        self.package_url_template
            .replace(PACKAGE_NAME_PLACEHOLDER, package_name)
    }
}

fn validate_url(url: &str) -> Result<()> {
    let parsed = Url::parse(url)
        .map_err(|_| PubyError::InvalidConfig(format!("Invalid registry URL: {url}")))?;

    match parsed.scheme() {
        "https" | "http" => Ok(()),
        scheme => Err(PubyError::InvalidConfig(format!(
            "Unsupported registry scheme: {scheme}"
        ))),
    }
}

pub(crate) fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("puby/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| PubyError::Network(format!("Failed to build HTTP client: {e}")))
}

/// Issues a GET and decodes the JSON body. Any non-2xx status is an error.
pub(crate) fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    debug!(url, "GET");

    let response = client
        .get(url)
        .send()
        .map_err(|e| PubyError::Network(format!("GET {url} failed: {e}")))?;

    let status = response.status();
    debug!(url, %status, "response");
    if !status.is_success() {
        return Err(PubyError::Network(format!(
            "GET {url} returned status {status}"
        )));
    }

    let body = response
        .text()
        .map_err(|e| PubyError::Network(format!("Failed to read body of {url}: {e}")))?;

    if body.len() > MAX_RESPONSE_BYTES {
        return Err(PubyError::Network(format!(
            "Response from {url} exceeded 20MB limit"
        )));
    }

    Ok(serde_json::from_str(&body)?)
}
