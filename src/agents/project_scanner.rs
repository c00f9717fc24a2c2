use crate::error::Result;
use crate::utils::path_validator::PathValidator;
use std::path::{Path, PathBuf};

/// ProjectScannerAgent locates the manifest of a Dart/Flutter project
pub struct ProjectScannerAgent {
    path: PathBuf,
}

impl ProjectScannerAgent {
    /// `path` is the manifest file or its project directory, relative paths
    /// being taken from the current directory.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn validate(&self) -> Result<ProjectInfo> {
        let cwd = std::env::current_dir()?;
        self.validate_from(cwd)
    }

    pub fn validate_from<P: AsRef<Path>>(&self, base: P) -> Result<ProjectInfo> {
        let absolute = PathValidator::absolutize(&self.path, base);
        let manifest_path = PathValidator::validate_manifest_path(&absolute)?;
        let project_path = manifest_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| manifest_path.clone());

        Ok(ProjectInfo {
            project_path,
            manifest_path,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ProjectInfo {
    #[allow(dead_code)]
    pub project_path: PathBuf,
    pub manifest_path: PathBuf,
}
