//! Named leniency policies for index accumulation.
//!
//! Two failures are tolerated:
//!
//! - blank candidate names are dropped without error;
//! - failures while finalising an already-written index file are logged and
//!   never replace the outcome of the write itself.

use camino::Utf8Path;
use log::warn;
use std::fs::File;

/// Return `true` when a candidate file name carries no content.
///
/// Empty and whitespace-only names are skipped so callers can stream raw
/// directory listings into the accumulator without pre-filtering.
#[must_use]
pub fn is_skippable_candidate(candidate: &str) -> bool {
    candidate.trim().is_empty()
}

/// Finalise and release a written index file, swallowing any failure.
///
/// The data has already been flushed by the time this runs. Syncing is the
/// last point at which the platform can report a deferred error; such an
/// error is logged at `warn` and discarded before the handle is dropped.
pub fn release_quietly(file: File, path: &Utf8Path) {
    if let Err(error) = file.sync_all() {
        warn!("ignoring error while closing index file {path}: {error}");
    }
    drop(file);
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests fail fast with a descriptive message"
)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    #[rstest]
    #[case::empty("")]
    #[case::space(" ")]
    #[case::mixed_whitespace(" \t\r\n")]
    fn blank_candidates_are_skippable(#[case] candidate: &str) {
        assert!(is_skippable_candidate(candidate));
    }

    #[rstest]
    #[case::jar("a.jar")]
    #[case::padded(" a.jar ")]
    #[case::nested("lib/b.jar")]
    fn named_candidates_are_kept(#[case] candidate: &str) {
        assert!(!is_skippable_candidate(candidate));
    }

    #[test]
    fn released_file_keeps_flushed_content_across_rewrites() {
        let temp = TempDir::new().expect("temp dir");
        let path = Utf8PathBuf::try_from(temp.path().join("INDEX.LIST")).expect("UTF-8 path");

        for content in ["a.jar\n", "a.jar\nb.jar\n"] {
            let mut file = File::create(&path).expect("create file");
            file.write_all(content.as_bytes()).expect("write content");
            release_quietly(file, &path);
            assert_eq!(fs::read_to_string(&path).expect("read back"), content);
        }
    }
}
