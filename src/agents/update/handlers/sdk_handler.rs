use crate::agents::update::context::{EnvironmentUpdate, ResolutionConfig};
use crate::pubspec::Manifest;
use crate::registry::{Channel, SdkRelease, SdkReleaseSnapshot};
use crate::utils::version;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sdk {
    Dart,
    Flutter,
}

impl Sdk {
    fn declared(self, manifest: &Manifest) -> Option<&str> {
        match self {
            Sdk::Dart => manifest.dart_sdk(),
            Sdk::Flutter => manifest.flutter_sdk(),
        }
    }

    fn released(self, release: &SdkRelease) -> &str {
        match self {
            Sdk::Dart => release.dart_version(),
            Sdk::Flutter => release.flutter_version(),
        }
    }
}

/// Compares the manifest's SDK constraints with the channel's current release.
pub struct SdkHandler {
    channel: Channel,
    check_flutter: bool,
}

impl SdkHandler {
    pub fn new(channel: Channel, check_flutter: bool) -> Self {
        Self {
            channel,
            check_flutter,
        }
    }

    pub fn from_config(config: &ResolutionConfig) -> Self {
        Self::new(config.channel(), config.check_flutter)
    }

    /// Latest version of `sdk` on the configured channel; empty when the
    /// channel's hash is not in the release list.
    pub fn latest_version<'s>(&self, snapshot: &'s SdkReleaseSnapshot, sdk: Sdk) -> &'s str {
        snapshot
            .current(self.channel)
            .map(|release| sdk.released(release))
            .unwrap_or_default()
    }

    /// Whether the declared constraint differs from the latest release.
    ///
    /// The Flutter SDK is only considered when flutter checks are enabled,
    /// and an SDK the manifest does not declare never needs an update.
    pub fn needs_update(
        &self,
        manifest: &Manifest,
        snapshot: &SdkReleaseSnapshot,
        sdk: Sdk,
    ) -> bool {
        if sdk == Sdk::Flutter && !self.check_flutter {
            return false;
        }

        let Some(declared) = sdk.declared(manifest) else {
            return false;
        };

        version::differs(declared, self.latest_version(snapshot, sdk))
    }

    fn target_version(
        &self,
        manifest: &Manifest,
        snapshot: &SdkReleaseSnapshot,
        sdk: Sdk,
    ) -> Option<String> {
        if !self.needs_update(manifest, snapshot, sdk) {
            return None;
        }

        let latest = self.latest_version(snapshot, sdk);
        if latest.is_empty() {
            debug!(?sdk, channel = %self.channel, "no release matches the channel hash");
            return None;
        }

        Some(latest.to_string())
    }

    /// Environment record for the SDKs that need updating, or `None` when
    /// neither does.
    pub fn resolve(
        &self,
        manifest: &Manifest,
        snapshot: &SdkReleaseSnapshot,
    ) -> Option<EnvironmentUpdate> {
        let update = EnvironmentUpdate {
            dart_sdk: self.target_version(manifest, snapshot, Sdk::Dart),
            flutter_sdk: self.target_version(manifest, snapshot, Sdk::Flutter),
        };

        (!update.is_empty()).then_some(update)
    }
}
