use crate::agents::update::context::DependencyUpdate;
use crate::pubspec::Manifest;
use crate::registry::PackageInfo;
use crate::utils::version;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Builds per-package update records from registry responses.
pub struct DependencyHandler;

impl DependencyHandler {
    /// One record per candidate whose normalized constraint differs from the
    /// registry's latest version, in candidate order.
    pub fn resolve(
        manifest: &Manifest,
        candidates: &[String],
        packages: &[PackageInfo],
    ) -> Vec<DependencyUpdate> {
        let latest_by_name: HashMap<&str, &str> = packages
            .iter()
            .map(|info| (info.name.as_str(), info.latest_version()))
            .collect();

        let mut updates = Vec::new();

        for name in candidates {
            let Some(declared) = manifest
                .dependency(name)
                .and_then(|dep| dep.constraint.as_version())
            else {
                debug!(dependency = %name, "skipping dependency without a version constraint");
                continue;
            };

            let Some(latest) = latest_by_name.get(name.as_str()).copied() else {
                warn!(dependency = %name, "no registry data for dependency");
                continue;
            };

            if latest.is_empty() {
                warn!(dependency = %name, "registry reported no latest version");
                continue;
            }

            let current = version::normalize(declared);
            if current != latest {
                updates.push(DependencyUpdate {
                    name: name.clone(),
                    current_version: current,
                    latest_version: latest.to_string(),
                });
            }
        }

        updates
    }
}
