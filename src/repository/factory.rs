use crate::error::Result;
use crate::registry::{PubDevClient, RegistryEndpoints, SdkReleaseClient};
use crate::repository::{PackageSource, SdkReleaseSource};
use std::sync::Arc;

pub struct RepositoryFactory;

impl RepositoryFactory {
    pub fn create_sdk_releases(endpoints: &RegistryEndpoints) -> Result<Arc<dyn SdkReleaseSource>> {
        let client = SdkReleaseClient::new(endpoints)?;
        Ok(Arc::new(client))
    }

    pub fn create_pub_dev(endpoints: &RegistryEndpoints) -> Result<Arc<dyn PackageSource>> {
        let client = PubDevClient::new(endpoints)?;
        Ok(Arc::new(client))
    }
}
