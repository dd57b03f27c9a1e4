//! Error types for coordinate validation.
//!
//! Every variant is a caller contract violation: the message names the
//! coordinate half at fault and the rule it broke.

use super::part::PartKind;
use thiserror::Error;

/// Errors arising from invalid artifact coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    /// A coordinate half was not supplied at all.
    #[error("missing required coordinate part: {part}")]
    MissingPart {
        /// Which half of the coordinate is missing.
        part: PartKind,
    },

    /// A coordinate half was empty or consisted only of whitespace.
    #[error("coordinate part must not be blank: {part} = \"{value}\"")]
    BlankPart {
        /// Which half of the coordinate is blank.
        part: PartKind,
        /// The rejected value, verbatim.
        value: String,
    },

    /// A `group:artifact` string did not split into exactly two halves.
    #[error("malformed coordinate \"{value}\": expected <groupId>:<artifactId>")]
    Malformed {
        /// The rejected coordinate string.
        value: String,
    },
}

/// Result type alias using [`CoordinateError`].
pub type Result<T> = std::result::Result<T, CoordinateError>;
