//! Specifier resolution against the registration table.
//!
//! The table is the namespace the resolver delegates to: a specifier is
//! normalized into a candidate identifier, then matched against registered
//! units, trying the exact identifier first and `<identifier>/index` second
//! (the table analog of extension inference and directory index fallback).

use super::{ModuleError, ModuleId, ModuleSet};

/// Resolves `specifier` to a registered identifier.
///
/// `origin` is the identifier of the requiring unit; it anchors relative
/// specifiers (`./x`, `../x`). Bare specifiers resolve from the table root.
pub(super) fn resolve_specifier(
    set: &ModuleSet,
    specifier: &str,
    origin: Option<&str>,
    index_fallback: bool,
) -> Result<ModuleId, ModuleError> {
    let normalized = normalize(specifier, origin).ok_or_else(|| unresolved(specifier))?;
    if normalized.is_empty() {
        return Err(unresolved(specifier));
    }

    if set.contains(&normalized) {
        return Ok(normalized);
    }
    if index_fallback {
        let with_index = format!("{normalized}/index");
        if set.contains(&with_index) {
            return Ok(with_index);
        }
    }
    Err(unresolved(specifier))
}

fn unresolved(specifier: &str) -> ModuleError {
    ModuleError::Resolution {
        specifier: specifier.to_string(),
    }
}

/// Joins `specifier` onto the directory of `origin` (for relative forms) and
/// collapses `.`, `..`, and empty segments. Returns `None` when `..` escapes
/// the table root.
fn normalize(specifier: &str, origin: Option<&str>) -> Option<String> {
    let relative = specifier.starts_with("./")
        || specifier.starts_with("../")
        || specifier == "."
        || specifier == "..";

    let mut segments: Vec<&str> = Vec::new();
    if relative {
        if let Some(origin) = origin {
            // Base is the origin's directory: everything up to its last segment.
            segments.extend(origin.split('/').filter(|s| !s.is_empty()));
            segments.pop();
        }
    }

    for part in specifier.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            seg => segments.push(seg),
        }
    }

    Some(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(ids: &[&str]) -> ModuleSet {
        let mut set = ModuleSet::new();
        for id in ids {
            set.register(*id, |_ctx| Ok(()));
        }
        set
    }

    #[test]
    fn bare_specifier_resolves_registered_unit() {
        let set = table(&["main"]);
        assert_eq!(resolve_specifier(&set, "main", None, true).unwrap(), "main");
    }

    #[test]
    fn index_fallback_applies_when_exact_is_missing() {
        let set = table(&["greeting/index"]);
        assert_eq!(
            resolve_specifier(&set, "greeting", None, true).unwrap(),
            "greeting/index"
        );
    }

    #[test]
    fn exact_identifier_wins_over_index() {
        let set = table(&["greeting", "greeting/index"]);
        assert_eq!(
            resolve_specifier(&set, "greeting", None, true).unwrap(),
            "greeting"
        );
    }

    #[test]
    fn index_fallback_can_be_disabled() {
        let set = table(&["greeting/index"]);
        assert!(matches!(
            resolve_specifier(&set, "greeting", None, false),
            Err(ModuleError::Resolution { .. })
        ));
    }

    #[test]
    fn relative_specifier_resolves_against_origin_directory() {
        let set = table(&["cycle/a", "cycle/b"]);
        assert_eq!(
            resolve_specifier(&set, "./b", Some("cycle/a"), true).unwrap(),
            "cycle/b"
        );
    }

    #[test]
    fn parent_specifier_pops_one_level() {
        let set = table(&["util", "app/main"]);
        assert_eq!(
            resolve_specifier(&set, "../util", Some("app/main"), true).unwrap(),
            "util"
        );
    }

    #[test]
    fn escaping_the_table_root_is_an_error() {
        let set = table(&["top"]);
        assert!(matches!(
            resolve_specifier(&set, "../anything", Some("top"), true),
            Err(ModuleError::Resolution { .. })
        ));
    }

    #[test]
    fn empty_specifier_is_an_error() {
        let set = table(&["main"]);
        assert!(resolve_specifier(&set, "", None, true).is_err());
        assert!(resolve_specifier(&set, ".", None, true).is_err());
    }

    #[test]
    fn unregistered_specifier_is_an_error() {
        let set = table(&["main"]);
        let err = resolve_specifier(&set, "missing", None, true).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn redundant_segments_collapse() {
        let set = table(&["a/b"]);
        assert_eq!(
            resolve_specifier(&set, "a//b", None, true).unwrap(),
            "a/b"
        );
        assert_eq!(
            resolve_specifier(&set, "a/./c/../b", None, true).unwrap(),
            "a/b"
        );
    }
}
