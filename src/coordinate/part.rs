//! Validated coordinate halves.
//!
//! A [`CoordinatePart`] is a group or artifact identifier that is known to be
//! non-blank. The value is kept verbatim; no trimming or case folding is
//! applied.

use super::error::{CoordinateError, Result};
use std::fmt;

/// Names which half of a coordinate a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    /// The group identifier, for example `de.smartics.test`.
    GroupId,
    /// The artifact identifier, for example `commons-test`.
    ArtifactId,
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GroupId => f.write_str("groupId"),
            Self::ArtifactId => f.write_str("artifactId"),
        }
    }
}

/// A non-blank group or artifact identifier.
///
/// # Examples
///
/// ```
/// use module_index::coordinate::part::{CoordinatePart, PartKind};
///
/// let group = CoordinatePart::new(PartKind::GroupId, "de.smartics.test").unwrap();
/// assert_eq!(group.as_str(), "de.smartics.test");
/// assert!(CoordinatePart::new(PartKind::ArtifactId, "  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoordinatePart(String);

impl CoordinatePart {
    /// Validate `value` as the given coordinate half.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::BlankPart`] when `value` is empty or all
    /// whitespace.
    pub fn new(kind: PartKind, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(CoordinateError::BlankPart { part: kind, value });
        }
        Ok(Self(value))
    }

    /// Validate an optional value, treating `None` as an unset half.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::MissingPart`] for `None`, otherwise the
    /// same errors as [`Self::new`].
    pub fn from_optional(kind: PartKind, value: Option<&str>) -> Result<Self> {
        let present = value.ok_or(CoordinateError::MissingPart { part: kind })?;
        Self::new(kind, present)
    }

    /// Return the identifier as a string slice.
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

impl AsRef<str> for CoordinatePart {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CoordinatePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests fail fast with a descriptive message"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::dotted_group(PartKind::GroupId, "de.smartics.test")]
    #[case::hyphenated_artifact(PartKind::ArtifactId, "commons-test")]
    #[case::surrounding_space_kept(PartKind::ArtifactId, " padded ")]
    fn accepts_non_blank_values(#[case] kind: PartKind, #[case] value: &str) {
        let part = CoordinatePart::new(kind, value).expect("non-blank value");
        assert_eq!(part.as_str(), value);
    }

    #[rstest]
    #[case::empty("")]
    #[case::spaces("   ")]
    #[case::tabs_and_newlines("\t\n")]
    fn rejects_blank_values(#[case] value: &str) {
        let err = CoordinatePart::new(PartKind::GroupId, value).expect_err("blank value");
        assert_eq!(
            err,
            CoordinateError::BlankPart {
                part: PartKind::GroupId,
                value: value.to_owned(),
            }
        );
    }

    #[test]
    fn none_is_reported_as_missing() {
        let err = CoordinatePart::from_optional(PartKind::ArtifactId, None)
            .expect_err("missing value");
        assert_eq!(
            err,
            CoordinateError::MissingPart {
                part: PartKind::ArtifactId
            }
        );
    }

    #[test]
    fn missing_and_blank_messages_differ() {
        let missing = CoordinatePart::from_optional(PartKind::GroupId, None)
            .expect_err("missing value")
            .to_string();
        let blank = CoordinatePart::from_optional(PartKind::GroupId, Some(""))
            .expect_err("blank value")
            .to_string();
        assert!(missing.starts_with("missing required coordinate part"));
        assert!(blank.starts_with("coordinate part must not be blank"));
    }

    #[test]
    fn kind_display_uses_maven_field_names() {
        assert_eq!(PartKind::GroupId.to_string(), "groupId");
        assert_eq!(PartKind::ArtifactId.to_string(), "artifactId");
    }
}
