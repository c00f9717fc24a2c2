use crate::agents::update::UpdateResult;
use crate::error::{PubyError, Result};
use regex::{Captures, Regex};
use std::cmp::Reverse;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Rewrites version tokens in the raw text of `pubspec.yaml`.
///
/// Only the targeted values change; comments, spacing, key order and quoting
/// elsewhere stay byte-identical.
pub struct ManifestWriter {
    manifest_path: PathBuf,
}

impl ManifestWriter {
    pub fn new<P: AsRef<Path>>(manifest_path: P) -> Self {
        Self {
            manifest_path: manifest_path.as_ref().to_path_buf(),
        }
    }

    /// Read, patch and write back the manifest. Returns false when the text
    /// did not change, in which case the file is not rewritten.
    pub fn write_updates(&self, update: &UpdateResult) -> Result<bool> {
        let content = fs::read_to_string(&self.manifest_path).map_err(|source| PubyError::Read {
            path: self.manifest_path.clone(),
            source,
        })?;

        let patched = Self::apply(&content, update)?;
        if patched == content {
            debug!(path = %self.manifest_path.display(), "manifest unchanged");
            return Ok(false);
        }

        fs::write(&self.manifest_path, patched).map_err(|source| PubyError::Write {
            path: self.manifest_path.clone(),
            source,
        })?;

        Ok(true)
    }

    /// Apply every update in `update` to `content`.
    pub fn apply(content: &str, update: &UpdateResult) -> Result<String> {
        let mut content = content.to_string();

        if let Some(environment) = &update.environment {
            if let Some(version) = &environment.dart_sdk {
                content = Self::update_environment_key(&content, "sdk", version)?;
            }
            if let Some(version) = &environment.flutter_sdk {
                content = Self::update_environment_key(&content, "flutter", version)?;
            }
        }

        for dependency in &update.dependencies {
            content = Self::update_dependency_version(
                &content,
                &dependency.name,
                &dependency.latest_version,
            )?;
        }

        Ok(content)
    }

    /// Replace the quoted value of the first `key` inside the `environment:` block.
    pub fn update_environment_key(content: &str, key: &str, new_version: &str) -> Result<String> {
        let pattern = format!(
            r#"(?m)^([ \t]+{}:[ \t]*['"])([^'"\n]*)(['"])"#,
            regex::escape(key)
        );
        let re = Self::compile(&pattern)?;

        let Some(range) = block_ranges(content, "environment")
            .into_iter()
            .find(|range| re.is_match(&content[range.clone()]))
        else {
            warn!(key, "no quoted environment constraint found");
            return Ok(content.to_string());
        };

        let block = &content[range.clone()];
        let replaced = re.replacen(block, 1, |caps: &Captures| {
            format!("{}{}{}", &caps[1], new_version, &caps[3])
        });

        let mut patched = content.to_string();
        patched.replace_range(range, &replaced);
        Ok(patched)
    }

    /// Replace the version of `name` wherever it is a direct child of
    /// `dependencies:` or `dev_dependencies:`, keeping any `^`/`~` prefix and
    /// quotes.
    ///
    /// Keys elsewhere in the file (the project's own `version:`, nested
    /// `version:` under a hosted dependency) are never touched.
    pub fn update_dependency_version(
        content: &str,
        name: &str,
        new_version: &str,
    ) -> Result<String> {
        let mut ranges: Vec<Range<usize>> = DEPENDENCY_SECTIONS
            .iter()
            .flat_map(|header| block_ranges(content, header))
            .collect();
        // Patch back to front so earlier offsets stay valid.
        ranges.sort_by_key(|range| Reverse(range.start));

        let mut patched = content.to_string();
        let mut found = false;

        for range in ranges {
            let block = &content[range.clone()];
            let Some(indent) = child_indent(block) else {
                continue;
            };

            let pattern = format!(
                r#"(?m)^({}{}:[ \t]*['"]?[\^~]?)(\d[0-9A-Za-z.+\-]*)"#,
                regex::escape(indent),
                regex::escape(name)
            );
            let re = Self::compile(&pattern)?;
            if !re.is_match(block) {
                continue;
            }

            found = true;
            let replaced =
                re.replace_all(block, |caps: &Captures| format!("{}{}", &caps[1], new_version));
            patched.replace_range(range, &replaced);
        }

        if !found {
            warn!(dependency = name, "no version line found");
        }

        Ok(patched)
    }

    fn compile(pattern: &str) -> Result<Regex> {
        Regex::new(pattern)
            .map_err(|e| PubyError::InvalidConfig(format!("Invalid patch pattern: {}", e)))
    }
}

const DEPENDENCY_SECTIONS: [&str; 2] = ["dependencies", "dev_dependencies"];

/// Byte ranges of the bodies of every top-level `header:` block.
///
/// A body runs from the line after the header to the next column-0 key.
/// Blank lines and comments, indented or not, stay inside the block.
fn block_ranges(content: &str, header: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = None;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        if is_top_level_key(line) {
            if let Some(begin) = start.take() {
                ranges.push(begin..offset);
            }
            if is_header(line, header) {
                start = Some(offset + line.len());
            }
        }
        offset += line.len();
    }

    if let Some(begin) = start {
        ranges.push(begin..content.len());
    }

    ranges
}

fn is_top_level_key(line: &str) -> bool {
    line.chars()
        .next()
        .is_some_and(|c| !c.is_whitespace() && c != '#')
}

fn is_header(line: &str, header: &str) -> bool {
    line.strip_prefix(header)
        .and_then(|rest| rest.strip_prefix(':'))
        .is_some_and(|rest| {
            let rest = rest.trim();
            rest.is_empty() || rest.starts_with('#')
        })
}

/// Indentation of the block's first entry.
fn child_indent(block: &str) -> Option<&str> {
    block.lines().find_map(|line| {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        Some(&line[..line.len() - trimmed.len()])
    })
}
