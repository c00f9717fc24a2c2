use crate::error::Result;
use crate::registry::{PackageInfo, SdkReleaseSnapshot};

pub mod factory;
pub use factory::RepositoryFactory;

/// Source of the Flutter/Dart SDK release feed.
pub trait SdkReleaseSource: Send + Sync {
    fn fetch_sdk_releases(&self) -> Result<SdkReleaseSnapshot>;
}

/// Source of per-package registry documents.
pub trait PackageSource: Send + Sync {
    fn fetch_package(&self, package_name: &str) -> Result<PackageInfo>;
}
