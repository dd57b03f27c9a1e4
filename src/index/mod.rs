//! Sorted, de-duplicated `META-INF/INDEX.LIST` manifests.
//!
//! # Sub-modules
//!
//! - [`accumulator`] — Entry collection and file emission (`IndexAccumulator`).
//! - [`error`] — Argument and I/O failures (`IndexError`).
//! - [`policy`] — Blank-candidate and close-time leniency rules.

pub mod accumulator;
pub mod error;
pub mod policy;

pub use accumulator::{INDEX_DIRECTORY, INDEX_FILE_NAME, IndexAccumulator};
pub use error::IndexError;
