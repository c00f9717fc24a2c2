use crate::pubspec::Manifest;

/// Include/exclude evaluation over dependency names.
///
/// Matching is by substring: an entry selects every dependency whose name
/// contains it.
pub struct FilterEvaluator;

impl FilterEvaluator {
    /// True when any include entry and exclude entry contain one another.
    pub fn conflict(include: &[String], exclude: &[String]) -> bool {
        !Self::conflicting_entries(include, exclude).is_empty()
    }

    /// Include entries that collide with some exclude entry.
    pub fn conflicting_entries(include: &[String], exclude: &[String]) -> Vec<String> {
        include
            .iter()
            .filter(|included| {
                exclude.iter().any(|excluded| {
                    included.contains(excluded.as_str()) || excluded.contains(included.as_str())
                })
            })
            .cloned()
            .collect()
    }

    /// Dependency names to check, in manifest order.
    ///
    /// Only plain version constraints are candidates. A non-empty include
    /// list wins over the exclude list.
    pub fn select_candidates(
        manifest: &Manifest,
        include: &[String],
        exclude: &[String],
    ) -> Vec<String> {
        manifest
            .versioned_dependency_names()
            .into_iter()
            .filter(|name| {
                if !include.is_empty() {
                    Self::matches_any(name, include)
                } else {
                    !Self::matches_any(name, exclude)
                }
            })
            .map(str::to_string)
            .collect()
    }

    fn matches_any(name: &str, entries: &[String]) -> bool {
        entries.iter().any(|entry| name.contains(entry.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pubspec::PubspecParser;

    fn list(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    fn manifest() -> Manifest {
        PubspecParser::parse_str(
            "dependencies:\n  http: \"^0.13.3\"\n  path: \"^1.8.0\"\n  flutter_svg: \"^1.0.0\"\n  flutter:\n    sdk: flutter\n",
        )
        .unwrap()
    }

    #[test]
    fn identical_entries_conflict() {
        assert!(FilterEvaluator::conflict(&list(&["http"]), &list(&["http"])));
    }

    #[test]
    fn unrelated_entries_do_not_conflict() {
        assert!(!FilterEvaluator::conflict(&list(&["http"]), &list(&["flutter_svg"])));
        assert!(!FilterEvaluator::conflict(&[], &[]));
        assert!(!FilterEvaluator::conflict(&list(&["http"]), &[]));
    }

    #[test]
    fn containment_conflicts_in_both_directions() {
        assert!(FilterEvaluator::conflict(&list(&["http_parser"]), &list(&["http"])));
        assert!(FilterEvaluator::conflict(&list(&["http"]), &list(&["http_parser"])));
        assert_eq!(
            FilterEvaluator::conflicting_entries(&list(&["path", "http"]), &list(&["http"])),
            list(&["http"])
        );
    }

    #[test]
    fn include_selects_only_matching_names() {
        let selected =
            FilterEvaluator::select_candidates(&manifest(), &list(&["http", "path"]), &[]);
        assert_eq!(selected, list(&["http", "path"]));
    }

    #[test]
    fn exclude_removes_matching_names() {
        let selected =
            FilterEvaluator::select_candidates(&manifest(), &[], &list(&["flutter_svg"]));
        assert_eq!(selected, list(&["http", "path"]));
    }

    #[test]
    fn no_filters_select_every_versioned_dependency() {
        let selected = FilterEvaluator::select_candidates(&manifest(), &[], &[]);
        assert_eq!(selected, list(&["http", "path", "flutter_svg"]));
    }

    #[test]
    fn include_takes_precedence_over_exclude() {
        let selected =
            FilterEvaluator::select_candidates(&manifest(), &list(&["flutter"]), &list(&["path"]));
        assert_eq!(selected, list(&["flutter_svg"]));
    }

    #[test]
    fn include_matches_by_substring() {
        let selected = FilterEvaluator::select_candidates(&manifest(), &list(&["svg"]), &[]);
        assert_eq!(selected, list(&["flutter_svg"]));
    }

    #[test]
    fn path_dependency_is_not_a_candidate_through_dev_section() {
        let manifest = PubspecParser::parse_str(
            "dependencies:\n  foo:\n    path: ../foo\ndev_dependencies:\n  foo: ^1.0.0\n  lints: ^2.0.0\n",
        )
        .unwrap();
        let selected = FilterEvaluator::select_candidates(&manifest, &[], &[]);
        assert_eq!(selected, list(&["lints"]));
    }
}
