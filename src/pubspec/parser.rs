use crate::error::{PubyError, Result};
use crate::pubspec::model::{Constraint, Dependency, DependencySection, Environment, Manifest};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use yaml_rust2::{Yaml, YamlLoader};

/// Reads `pubspec.yaml` into a [`Manifest`].
pub struct PubspecParser {
    manifest_path: PathBuf,
}

impl PubspecParser {
    pub fn new<P: AsRef<Path>>(manifest_path: P) -> Self {
        Self {
            manifest_path: manifest_path.as_ref().to_path_buf(),
        }
    }

    pub fn parse(&self) -> Result<Manifest> {
        let content = fs::read_to_string(&self.manifest_path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                PubyError::ManifestNotFound(self.manifest_path.clone())
            } else {
                PubyError::Read {
                    path: self.manifest_path.clone(),
                    source,
                }
            }
        })?;

        Self::parse_str(&content)
    }

    pub fn parse_str(content: &str) -> Result<Manifest> {
        let docs = YamlLoader::load_from_str(content)
            .map_err(|e| PubyError::ManifestParsing(e.to_string()))?;

        let root = match docs.first() {
            None | Some(Yaml::Null) => return Ok(Manifest::default()),
            Some(root @ Yaml::Hash(_)) => root,
            Some(other) => {
                return Err(PubyError::ManifestParsing(format!(
                    "expected a mapping at the document root, found {}",
                    yaml_kind(other)
                )));
            }
        };

        let environment = match &root["environment"] {
            Yaml::Hash(_) => Some(Environment {
                dart_sdk: root["environment"]["sdk"].as_str().map(str::to_string),
                flutter_sdk: root["environment"]["flutter"]
                    .as_str()
                    .map(str::to_string),
            }),
            _ => None,
        };

        let mut dependencies = Vec::new();
        for section in [
            DependencySection::Dependencies,
            DependencySection::DevDependencies,
        ] {
            if let Yaml::Hash(map) = &root[section.key()] {
                for (name, value) in map {
                    let Some(name) = name.as_str() else {
                        continue;
                    };
                    let constraint = constraint_from_yaml(value);
                    if constraint == Constraint::Opaque {
                        debug!(
                            dependency = name,
                            section = section.key(),
                            "non-version constraint"
                        );
                    }
                    dependencies.push(Dependency {
                        name: name.to_string(),
                        constraint,
                        section,
                    });
                }
            }
        }

        Ok(Manifest {
            name: root["name"].as_str().map(str::to_string),
            environment,
            dependencies,
        })
    }
}

fn constraint_from_yaml(value: &Yaml) -> Constraint {
    match value {
        Yaml::String(version) => Constraint::Version(version.clone()),
        Yaml::Real(version) => Constraint::Version(version.clone()),
        Yaml::Integer(version) => Constraint::Version(version.to_string()),
        _ => Constraint::Opaque,
    }
}

fn yaml_kind(value: &Yaml) -> &'static str {
    match value {
        Yaml::Real(_) | Yaml::Integer(_) => "a number",
        Yaml::String(_) => "a string",
        Yaml::Boolean(_) => "a boolean",
        Yaml::Array(_) => "a sequence",
        Yaml::Hash(_) => "a mapping",
        Yaml::Null => "null",
        _ => "an unsupported value",
    }
}
