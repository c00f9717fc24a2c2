use crate::error::{PubyError, Result};
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE_NAME: &str = "pubspec.yaml";

/// Path helpers for locating the manifest without wandering into system directories.
pub struct PathValidator;

impl PathValidator {
    /// Joins a relative path onto `base`; absolute paths are returned unchanged.
    pub fn absolutize(path: impl AsRef<Path>, base: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.as_ref().join(path)
        }
    }

    /// Validates and canonicalises a manifest path.
    ///
    /// A directory is taken to mean `<dir>/pubspec.yaml`.
    pub fn validate_manifest_path(path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let candidate = if path.is_dir() {
            path.join(MANIFEST_FILE_NAME)
        } else {
            path.to_path_buf()
        };

        if !candidate.is_file() {
            return Err(PubyError::ManifestNotFound(candidate));
        }

        let canonical = candidate
            .canonicalize()
            .map_err(|_| PubyError::ManifestNotFound(candidate.clone()))?;

        const FORBIDDEN: &[&str] = &["/etc", "/sys", "/proc", "/dev", "/boot"];

        for forbidden in FORBIDDEN {
            let forbidden_path = Path::new(forbidden);

            if canonical.starts_with(forbidden_path) {
                return Err(PubyError::InvalidConfig(format!(
                    "Access to system directory '{}' is not allowed",
                    forbidden
                )));
            }

            if let Ok(canonical_forbidden) = forbidden_path.canonicalize() {
                if canonical.starts_with(&canonical_forbidden) {
                    return Err(PubyError::InvalidConfig(format!(
                        "Access to system directory '{}' is not allowed",
                        forbidden
                    )));
                }
            }
        }

        Ok(canonical)
    }
}
