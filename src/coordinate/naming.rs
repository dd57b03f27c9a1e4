//! Canonical module naming policy.
//!
//! Derives a module name from a group and artifact identifier. The artifact
//! identifier is appended to the group with a single `.` unless the group
//! already equals it or ends with it, in which case the group is used as-is.

use super::error::Result;
use super::part::{CoordinatePart, PartKind};
use std::fmt;

/// Separator placed between group and artifact when both are kept.
const SEPARATOR: char = '.';

/// A canonical module name derived from a coordinate.
///
/// Names are computed on demand and carry no identity beyond their text.
///
/// # Examples
///
/// ```
/// use module_index::coordinate::naming::create_name;
///
/// let name = create_name("de.smartics.test", "commons-test").unwrap();
/// assert_eq!(name.as_str(), "de.smartics.test.commons-test");
///
/// let name = create_name("de.smartics.test.commons-test", "commons-test").unwrap();
/// assert_eq!(name.as_str(), "de.smartics.test.commons-test");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleName(String);

impl ModuleName {
    /// Derive the name from two validated coordinate halves.
    #[must_use]
    pub fn derive(group_id: &CoordinatePart, artifact_id: &CoordinatePart) -> Self {
        let group = group_id.as_str();
        let artifact = artifact_id.as_str();

        if group == artifact || group.ends_with(artifact) {
            return Self(group.to_owned());
        }

        let mut name = String::with_capacity(group.len() + 1 + artifact.len());
        name.push_str(group);
        name.push(SEPARATOR);
        name.push_str(artifact);
        Self(name)
    }

    /// Return the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the canonical module name for `group_id` and `artifact_id`.
///
/// # Errors
///
/// Returns [`super::CoordinateError::BlankPart`] when either identifier is
/// empty or all whitespace. The group identifier is checked first.
pub fn create_name(group_id: &str, artifact_id: &str) -> Result<ModuleName> {
    create_name_from_parts(Some(group_id), Some(artifact_id))
}

/// Derive the canonical module name from identifiers that may be unset.
///
/// # Errors
///
/// Returns [`super::CoordinateError::MissingPart`] when either identifier is
/// `None`, or [`super::CoordinateError::BlankPart`] when one is blank.
pub fn create_name_from_parts(
    group_id: Option<&str>,
    artifact_id: Option<&str>,
) -> Result<ModuleName> {
    let group = CoordinatePart::from_optional(PartKind::GroupId, group_id)?;
    let artifact = CoordinatePart::from_optional(PartKind::ArtifactId, artifact_id)?;
    Ok(ModuleName::derive(&group, &artifact))
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests fail fast with a descriptive message"
)]
mod tests {
    use super::*;
    use crate::coordinate::error::CoordinateError;
    use rstest::rstest;

    #[rstest]
    #[case::identical("commons-test", "commons-test", "commons-test")]
    #[case::identical_dotted("de.smartics", "de.smartics", "de.smartics")]
    #[case::suffix(
        "de.smartics.test.commons-test",
        "commons-test",
        "de.smartics.test.commons-test"
    )]
    #[case::suffix_without_segment_boundary("org.foo.barutils", "utils", "org.foo.barutils")]
    #[case::appended("de.smartics.test", "commons-test", "de.smartics.test.commons-test")]
    #[case::prefix_is_not_suffix("commons", "commons-test", "commons.commons-test")]
    #[case::case_sensitive("org.foo.Bar", "bar", "org.foo.Bar.bar")]
    fn derives_expected_name(#[case] group: &str, #[case] artifact: &str, #[case] expected: &str) {
        let name = create_name(group, artifact).expect("valid coordinate");
        assert_eq!(name.as_str(), expected);
    }

    #[rstest]
    #[case::group_missing(None, Some("x"), PartKind::GroupId)]
    #[case::artifact_missing(Some("x"), None, PartKind::ArtifactId)]
    #[case::both_missing_reports_group(None, None, PartKind::GroupId)]
    fn unset_parts_are_missing(
        #[case] group: Option<&str>,
        #[case] artifact: Option<&str>,
        #[case] expected: PartKind,
    ) {
        let err = create_name_from_parts(group, artifact).expect_err("unset part");
        assert_eq!(err, CoordinateError::MissingPart { part: expected });
    }

    #[rstest]
    #[case::group_empty("", "x", PartKind::GroupId)]
    #[case::artifact_empty("x", "", PartKind::ArtifactId)]
    #[case::group_whitespace(" \t", "x", PartKind::GroupId)]
    #[case::artifact_whitespace("x", "  ", PartKind::ArtifactId)]
    fn blank_parts_are_rejected(
        #[case] group: &str,
        #[case] artifact: &str,
        #[case] expected: PartKind,
    ) {
        let err = create_name(group, artifact).expect_err("blank part");
        assert!(
            matches!(err, CoordinateError::BlankPart { part, .. } if part == expected),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let first = create_name("org.example", "core").expect("valid");
        let second = create_name("org.example", "core").expect("valid");
        assert_eq!(first, second);
        assert_eq!(first.to_string(), "org.example.core");
    }
}
