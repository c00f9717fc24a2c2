use crate::error::{PubyError, Result};
use crate::registry::{RegistryEndpoints, build_client, get_json};
use crate::repository::PackageSource;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Package document returned by `GET /api/packages/<name>`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    pub latest: LatestVersion,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LatestVersion {
    pub version: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub dependencies: Option<BTreeMap<String, Value>>,
    #[serde(default)]
    #[allow(dead_code)]
    pub dev_dependencies: Option<BTreeMap<String, Value>>,
}

impl PackageInfo {
    pub fn latest_version(&self) -> &str {
        &self.latest.version
    }
}

/// pub.dev package API client.
pub struct PubDevClient {
    client: Client,
    endpoints: RegistryEndpoints,
}

impl PubDevClient {
    pub fn new(endpoints: &RegistryEndpoints) -> Result<Self> {
        endpoints.validate()?;
        Ok(Self {
            client: build_client(endpoints.timeout)?,
            endpoints: endpoints.clone(),
        })
    }

    pub fn fetch_package_info(&self, package_name: &str) -> Result<PackageInfo> {
        if package_name.trim().is_empty() {
            return Err(PubyError::InvalidConfig(
                "Package name cannot be empty".to_string(),
            ));
        }

        get_json(&self.client, &self.endpoints.package_url(package_name))
    }
}

impl PackageSource for PubDevClient {
    fn fetch_package(&self, package_name: &str) -> Result<PackageInfo> {
        self.fetch_package_info(package_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_package_document() {
        let body = r#"{
            "name": "http",
            "latest": {
                "version": "0.13.5",
                "dependencies": {"async": "^2.5.0", "meta": "^1.3.0"},
                "dev_dependencies": null,
                "archive_url": "https://pub.dev/packages/http/versions/0.13.5.tar.gz"
            },
            "versions": []
        }"#;

        let info: PackageInfo = serde_json::from_str(body).unwrap();
        assert_eq!(info.name, "http");
        assert_eq!(info.latest_version(), "0.13.5");
        assert_eq!(info.latest.dependencies.as_ref().map(|d| d.len()), Some(2));
        assert!(info.latest.dev_dependencies.is_none());
    }

    #[test]
    fn error_body_is_not_a_package() {
        let result: std::result::Result<PackageInfo, _> =
            serde_json::from_str(r#"{"error": {"code": "NotFound"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_name_fails_before_any_request() {
        let client = PubDevClient::new(&RegistryEndpoints::default()).unwrap();
        let err = client.fetch_package_info("  ").unwrap_err();
        assert!(matches!(err, PubyError::InvalidConfig(_)));
    }

    #[test]
    #[ignore] // Requires network access
    fn fetch_live_package() {
        let client = PubDevClient::new(&RegistryEndpoints::default()).unwrap();
        let info = client.fetch_package_info("http").unwrap();
        assert_eq!(info.name, "http");
        assert!(!info.latest_version().is_empty());
    }
}
