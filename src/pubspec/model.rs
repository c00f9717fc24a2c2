/// Declared constraint of a single dependency.
///
/// Only `Version` entries take part in update resolution; path, git, sdk and
/// other structured sources are kept as `Opaque`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    Version(String),
    Opaque,
}

impl Constraint {
    pub fn as_version(&self) -> Option<&str> {
        match self {
            Constraint::Version(version) => Some(version),
            Constraint::Opaque => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencySection {
    Dependencies,
    DevDependencies,
}

impl DependencySection {
    pub fn key(self) -> &'static str {
        match self {
            DependencySection::Dependencies => "dependencies",
            DependencySection::DevDependencies => "dev_dependencies",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    pub constraint: Constraint,
    pub section: DependencySection,
}

/// The `environment:` block. Either key may be missing or non-string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub dart_sdk: Option<String>,
    pub flutter_sdk: Option<String>,
}

/// Structural view of `pubspec.yaml` used for update decisions.
///
/// Dependencies keep their declaration order, `dependencies` before
/// `dev_dependencies`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub name: Option<String>,
    pub environment: Option<Environment>,
    pub dependencies: Vec<Dependency>,
}

impl Manifest {
    pub fn dart_sdk(&self) -> Option<&str> {
        self.environment.as_ref()?.dart_sdk.as_deref()
    }

    pub fn flutter_sdk(&self) -> Option<&str> {
        self.environment.as_ref()?.flutter_sdk.as_deref()
    }

    /// Looks up a dependency by exact name; `dependencies` wins over `dev_dependencies`.
    pub fn dependency(&self, name: &str) -> Option<&Dependency> {
        self.dependencies.iter().find(|dep| dep.name == name)
    }

    pub fn section(&self, section: DependencySection) -> impl Iterator<Item = &Dependency> {
        self.dependencies
            .iter()
            .filter(move |dep| dep.section == section)
    }

    /// Names whose effective entry (the one [`Manifest::dependency`] returns)
    /// has a plain version constraint, in declaration order.
    pub fn versioned_dependency_names(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        let mut names: Vec<&str> = Vec::new();
        for dep in &self.dependencies {
            if seen.contains(&dep.name.as_str()) {
                continue;
            }
            seen.push(&dep.name);
            if dep.constraint.as_version().is_some() {
                names.push(&dep.name);
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(name: &str, constraint: Constraint, section: DependencySection) -> Dependency {
        Dependency {
            name: name.to_string(),
            constraint,
            section,
        }
    }

    #[test]
    fn regular_dependency_shadows_dev_dependency() {
        let manifest = Manifest {
            dependencies: vec![
                dep(
                    "http",
                    Constraint::Version("^0.13.3".into()),
                    DependencySection::Dependencies,
                ),
                dep(
                    "http",
                    Constraint::Version("^0.12.0".into()),
                    DependencySection::DevDependencies,
                ),
            ],
            ..Default::default()
        };

        let found = manifest.dependency("http").unwrap();
        assert_eq!(found.section, DependencySection::Dependencies);
        assert_eq!(manifest.versioned_dependency_names(), vec!["http"]);
    }

    #[test]
    fn opaque_dependencies_are_not_versioned() {
        let manifest = Manifest {
            dependencies: vec![
                dep("flutter", Constraint::Opaque, DependencySection::Dependencies),
                dep(
                    "path",
                    Constraint::Version("^1.8.0".into()),
                    DependencySection::Dependencies,
                ),
            ],
            ..Default::default()
        };

        assert_eq!(manifest.versioned_dependency_names(), vec!["path"]);
    }

    #[test]
    fn opaque_regular_entry_hides_versioned_dev_entry() {
        let manifest = Manifest {
            dependencies: vec![
                dep("foo", Constraint::Opaque, DependencySection::Dependencies),
                dep(
                    "foo",
                    Constraint::Version("^1.0.0".into()),
                    DependencySection::DevDependencies,
                ),
                dep(
                    "bar",
                    Constraint::Version("^2.0.0".into()),
                    DependencySection::DevDependencies,
                ),
            ],
            ..Default::default()
        };

        assert_eq!(manifest.dependency("foo").unwrap().constraint, Constraint::Opaque);
        assert_eq!(manifest.versioned_dependency_names(), vec!["bar"]);
    }

    #[test]
    fn missing_environment_yields_no_sdk_constraints() {
        let manifest = Manifest::default();
        assert!(manifest.dart_sdk().is_none());
        assert!(manifest.flutter_sdk().is_none());
    }
}
