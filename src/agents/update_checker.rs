use crate::agents::update::handlers::{DependencyHandler, SdkHandler};
use crate::agents::update::{FilterEvaluator, ResolutionConfig, UpdateResult};
use crate::error::{PubyError, Result};
use crate::pubspec::Manifest;
use crate::registry::{PackageInfo, RegistryEndpoints};
use crate::repository::{PackageSource, RepositoryFactory, SdkReleaseSource};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Arc;
use tracing::{debug, info};

/// UpdateChecker runs the resolution pipeline against the two registries.
pub struct UpdateChecker {
    sdk_source: Arc<dyn SdkReleaseSource>,
    package_source: Arc<dyn PackageSource>,
    config: ResolutionConfig,
    show_progress: bool,
}

impl UpdateChecker {
    pub fn new(endpoints: &RegistryEndpoints, config: ResolutionConfig) -> Result<Self> {
        Ok(Self::with_sources(
            RepositoryFactory::create_sdk_releases(endpoints)?,
            RepositoryFactory::create_pub_dev(endpoints)?,
            config,
        ))
    }

    pub fn with_sources(
        sdk_source: Arc<dyn SdkReleaseSource>,
        package_source: Arc<dyn PackageSource>,
        config: ResolutionConfig,
    ) -> Self {
        Self {
            sdk_source,
            package_source,
            config,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Resolve SDK and dependency updates for `manifest`.
    ///
    /// An include/exclude conflict fails before any registry request.
    /// Any registry failure aborts the whole check.
    pub fn check(&self, manifest: &Manifest) -> Result<UpdateResult> {
        let include = self.config.include_list();
        let exclude = self.config.exclude_list();

        if FilterEvaluator::conflict(include, exclude) {
            return Err(PubyError::ConfigConflict(
                FilterEvaluator::conflicting_entries(include, exclude),
            ));
        }

        let snapshot = self.sdk_source.fetch_sdk_releases()?;
        let environment = SdkHandler::from_config(&self.config).resolve(manifest, &snapshot);
        debug!(?environment, channel = %self.config.channel(), "resolved SDK updates");

        let candidates = FilterEvaluator::select_candidates(manifest, include, exclude);
        info!(count = candidates.len(), "checking dependencies");

        let packages = self.fetch_packages(&candidates)?;
        let dependencies = DependencyHandler::resolve(manifest, &candidates, &packages);

        Ok(UpdateResult {
            environment,
            dependencies,
        })
    }

    fn fetch_packages(&self, candidates: &[String]) -> Result<Vec<PackageInfo>> {
        let pb = ProgressBar::new(candidates.len() as u64);
        if !self.show_progress {
            pb.set_draw_target(ProgressDrawTarget::hidden());
        }
        if let Ok(style) =
            ProgressStyle::default_bar().template("  [{bar:40}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("=>-"));
        }

        let mut packages = Vec::with_capacity(candidates.len());
        for name in candidates {
            pb.set_message(format!("Checking {}", name));
            let info = match self.package_source.fetch_package(name) {
                Ok(info) => info,
                Err(e) => {
                    pb.abandon();
                    return Err(e);
                }
            };
            packages.push(info);
            pb.inc(1);
        }
        pb.finish_and_clear();

        Ok(packages)
    }
}
