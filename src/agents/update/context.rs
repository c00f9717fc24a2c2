use crate::registry::Channel;

/// Caller-supplied policy for one update check.
///
/// Defaults: stable channel, Dart SDK only, every dependency, dry run.
/// An empty include or exclude list behaves exactly like an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionConfig {
    /// Compare SDK constraints against the current beta release instead of stable
    pub use_beta: bool,
    /// Also check the Flutter SDK constraint (the Dart SDK is always checked)
    pub check_flutter: bool,
    /// Only check dependencies whose name contains one of these entries
    pub include: Option<Vec<String>>,
    /// Skip dependencies whose name contains one of these entries
    pub exclude: Option<Vec<String>>,
    /// Persist the result to the manifest instead of a dry run
    pub write_changes: bool,
}

impl ResolutionConfig {
    pub fn channel(&self) -> Channel {
        Channel::from_beta_flag(self.use_beta)
    }

    pub fn include_list(&self) -> &[String] {
        self.include.as_deref().unwrap_or_default()
    }

    pub fn exclude_list(&self) -> &[String] {
        self.exclude.as_deref().unwrap_or_default()
    }
}

/// SDK constraints that need rewriting. At least one field is set whenever
/// the record exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentUpdate {
    pub dart_sdk: Option<String>,
    pub flutter_sdk: Option<String>,
}

impl EnvironmentUpdate {
    pub fn is_empty(&self) -> bool {
        self.dart_sdk.is_none() && self.flutter_sdk.is_none()
    }

    fn len(&self) -> usize {
        usize::from(self.dart_sdk.is_some()) + usize::from(self.flutter_sdk.is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyUpdate {
    pub name: String,
    /// Declared constraint with operators stripped
    pub current_version: String,
    pub latest_version: String,
}

/// Outcome of an update check: what the display layer renders and what the
/// manifest writer applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateResult {
    pub environment: Option<EnvironmentUpdate>,
    pub dependencies: Vec<DependencyUpdate>,
}

impl UpdateResult {
    pub fn has_updates(&self) -> bool {
        self.environment.as_ref().is_some_and(|env| !env.is_empty())
            || !self.dependencies.is_empty()
    }

    pub fn total_updates(&self) -> usize {
        self.environment.as_ref().map_or(0, EnvironmentUpdate::len) + self.dependencies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_has_no_updates() {
        let result = UpdateResult::default();
        assert!(!result.has_updates());
        assert_eq!(result.total_updates(), 0);
    }

    #[test]
    fn present_but_empty_environment_is_not_an_update() {
        let result = UpdateResult {
            environment: Some(EnvironmentUpdate::default()),
            dependencies: Vec::new(),
        };
        assert!(!result.has_updates());
    }

    #[test]
    fn counts_sdk_and_dependency_updates() {
        let result = UpdateResult {
            environment: Some(EnvironmentUpdate {
                dart_sdk: Some("3.0.0".into()),
                flutter_sdk: Some("3.19.0".into()),
            }),
            dependencies: vec![DependencyUpdate {
                name: "http".into(),
                current_version: "0.13.3".into(),
                latest_version: "0.13.5".into(),
            }],
        };
        assert!(result.has_updates());
        assert_eq!(result.total_updates(), 3);
    }

    #[test]
    fn config_defaults() {
        let config = ResolutionConfig::default();
        assert_eq!(config.channel(), Channel::Stable);
        assert!(config.include_list().is_empty());
        assert!(config.exclude_list().is_empty());
        assert!(!config.check_flutter);
        assert!(!config.write_changes);

        let beta = ResolutionConfig {
            use_beta: true,
            ..Default::default()
        };
        assert_eq!(beta.channel(), Channel::Beta);
    }
}
