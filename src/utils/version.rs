/// Characters that make up pub constraint operators (`^`, `~`, `>=`, `<`, ...).
const CONSTRAINT_CHARS: [char; 5] = ['>', '<', '=', '^', '~'];

/// Strips every constraint operator character from a version string.
///
/// Removal is global rather than prefix-only, so a range such as
/// `>=1.2.3 <2.0.0` becomes `1.2.3 2.0.0`. The result is meant for equality
/// checks and display, not for range evaluation.
pub fn normalize(version: &str) -> String {
    version.replace(CONSTRAINT_CHARS, "")
}

/// Returns true when the normalized forms of both versions differ.
pub fn differs(current: &str, latest: &str) -> bool {
    normalize(current) != normalize(latest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_caret_and_tilde() {
        assert_eq!(normalize("^1.2.3"), "1.2.3");
        assert_eq!(normalize("~1.2.3"), "1.2.3");
    }

    #[test]
    fn range_constraint_keeps_both_bounds() {
        assert_eq!(normalize(">=1.2.3 <2.0.0"), "1.2.3 2.0.0");
        assert_eq!(normalize(">=2.12.0 <3.0.0"), "2.12.0 3.0.0");
    }

    #[test]
    fn empty_and_plain_inputs_pass_through() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("1.0.0+1"), "1.0.0+1");
        assert_eq!(normalize("any"), "any");
    }

    #[test]
    fn output_never_contains_operator_characters() {
        for input in ["<<==>>^^~~", "=1", "^~>=<0.1.0-dev.1", "a>b<c=d^e~f"] {
            let normalized = normalize(input);
            assert!(
                !normalized.contains(CONSTRAINT_CHARS),
                "{input:?} -> {normalized:?}"
            );
        }
    }

    #[test]
    fn differs_compares_normalized_forms() {
        assert!(!differs("^0.13.3", "0.13.3"));
        assert!(differs("^0.13.3", "0.13.5"));
        assert!(differs("2.12.0", ""));
    }
}
