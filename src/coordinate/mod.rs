//! Artifact coordinates and canonical module naming.
//!
//! # Sub-modules
//!
//! - [`error`] — Validation errors (`CoordinateError`).
//! - [`naming`] — Module naming policy (`ModuleName`, `create_name`).
//! - [`part`] — Non-blank identifier newtype (`CoordinatePart`).

pub mod error;
pub mod naming;
pub mod part;

pub use error::CoordinateError;
pub use naming::{ModuleName, create_name, create_name_from_parts};
pub use part::{CoordinatePart, PartKind};

use error::Result;
use std::fmt;
use std::str::FromStr;

/// Separator used by the short `group:artifact` notation.
const NOTATION_SEPARATOR: char = ':';

/// A validated (group, artifact) coordinate pair.
///
/// # Examples
///
/// ```
/// use module_index::coordinate::Coordinate;
///
/// let coordinate: Coordinate = "org.foo.bar-utils:bar-utils".parse().unwrap();
/// assert_eq!(coordinate.module_name().as_str(), "org.foo.bar-utils");
/// assert_eq!(coordinate.to_string(), "org.foo.bar-utils:bar-utils");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    group_id: CoordinatePart,
    artifact_id: CoordinatePart,
}

impl Coordinate {
    /// Build a coordinate from two identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::BlankPart`] when either half is blank.
    pub fn new(group_id: &str, artifact_id: &str) -> Result<Self> {
        Self::from_parts(Some(group_id), Some(artifact_id))
    }

    /// Build a coordinate from identifiers that may be unset.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::MissingPart`] for an unset half and
    /// [`CoordinateError::BlankPart`] for a blank one. The group is checked
    /// before the artifact.
    pub fn from_parts(group_id: Option<&str>, artifact_id: Option<&str>) -> Result<Self> {
        Ok(Self {
            group_id: CoordinatePart::from_optional(PartKind::GroupId, group_id)?,
            artifact_id: CoordinatePart::from_optional(PartKind::ArtifactId, artifact_id)?,
        })
    }

    /// Return the group identifier.
    #[must_use]
    pub fn group_id(&self) -> &CoordinatePart {
        &self.group_id
    }

    /// Return the artifact identifier.
    #[must_use]
    pub fn artifact_id(&self) -> &CoordinatePart {
        &self.artifact_id
    }

    /// Derive the canonical module name for this coordinate.
    #[must_use]
    pub fn module_name(&self) -> ModuleName {
        ModuleName::derive(&self.group_id, &self.artifact_id)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(value: &str) -> Result<Self> {
        let mut halves = value.split(NOTATION_SEPARATOR);
        match (halves.next(), halves.next(), halves.next()) {
            (Some(group), Some(artifact), None) => Self::new(group, artifact),
            _ => Err(CoordinateError::Malformed {
                value: value.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{NOTATION_SEPARATOR}{}",
            self.group_id, self.artifact_id
        )
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

    #[test]
    fn parses_short_notation() {
        let coordinate: Coordinate = "de.smartics.test:commons-test".parse().expect("valid");
        assert_eq!(coordinate.group_id().as_str(), "de.smartics.test");
        assert_eq!(coordinate.artifact_id().as_str(), "commons-test");
        assert_eq!(
            coordinate.module_name().as_str(),
            "de.smartics.test.commons-test"
        );
    }

    #[rstest]
    #[case::no_separator("de.smartics.test")]
    #[case::too_many_separators("de.smartics:commons:1.0")]
    fn rejects_malformed_notation(#[case] value: &str) {
        let err = value.parse::<Coordinate>().expect_err("malformed");
        assert_eq!(
            err,
            CoordinateError::Malformed {
                value: value.to_owned()
            }
        );
    }

    #[rstest]
    #[case::empty_group(":commons-test", PartKind::GroupId)]
    #[case::empty_artifact("de.smartics:", PartKind::ArtifactId)]
    fn parsed_halves_are_validated(#[case] value: &str, #[case] expected: PartKind) {
        let err = value.parse::<Coordinate>().expect_err("blank half");
        assert!(matches!(err, CoordinateError::BlankPart { part, .. } if part == expected));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let coordinate = Coordinate::new("org.example", "core").expect("valid");
        let reparsed: Coordinate = coordinate.to_string().parse().expect("valid");
        assert_eq!(coordinate, reparsed);
    }

    #[test]
    fn module_name_matches_free_function() {
        let coordinate = Coordinate::new("org.foo.bar-utils", "bar-utils").expect("valid");
        let direct = create_name("org.foo.bar-utils", "bar-utils").expect("valid");
        assert_eq!(coordinate.module_name(), direct);
    }
}
