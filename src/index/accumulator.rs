//! Accumulation and emission of `META-INF/INDEX.LIST`.
//!
//! An [`IndexAccumulator`] collects candidate file names into a set keyed by
//! their exact text and writes them, sorted and one per line, beneath a fixed
//! output directory.

use super::error::{IndexError, Result};
use super::policy::{is_skippable_candidate, release_quietly};
use crate::config::BundleConfig;
use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, trace};
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};

/// Directory, relative to the output directory, that holds the index.
pub const INDEX_DIRECTORY: &str = "META-INF";

/// File name of the index inside [`INDEX_DIRECTORY`].
pub const INDEX_FILE_NAME: &str = "INDEX.LIST";

/// Collects file names and writes them as a sorted, de-duplicated index.
///
/// The accumulator is not synchronised; share it across threads only behind
/// a lock.
///
/// # Examples
///
/// ```no_run
/// use module_index::index::IndexAccumulator;
///
/// let mut index = IndexAccumulator::new("target/classes").unwrap();
/// index.add("b.jar");
/// index.add("a.jar");
/// index.add("a.jar");
/// assert_eq!(index.render(), "a.jar\nb.jar\n");
/// index.write_index().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexAccumulator {
    output_dir: Utf8PathBuf,
    entries: BTreeSet<String>,
}

impl IndexAccumulator {
    /// Create an empty accumulator writing beneath `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::MissingOutputDirectory`] when `output_dir` is
    /// empty or all whitespace.
    pub fn new(output_dir: impl Into<Utf8PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        if output_dir.as_str().trim().is_empty() {
            return Err(IndexError::MissingOutputDirectory);
        }
        Ok(Self {
            output_dir,
            entries: BTreeSet::new(),
        })
    }

    /// Create an accumulator from the `[index]` table of a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::MissingOutputDirectory`] when the configuration
    /// does not name an output directory.
    pub fn from_config(config: &BundleConfig) -> Result<Self> {
        let output_dir = config
            .index
            .output_directory
            .clone()
            .ok_or(IndexError::MissingOutputDirectory)?;
        Self::new(output_dir)
    }

    /// Offer a candidate file name.
    ///
    /// Blank candidates are skipped. Returns `true` only when the name was
    /// not already present.
    pub fn add(&mut self, file_name: &str) -> bool {
        if is_skippable_candidate(file_name) {
            trace!("skipping blank index candidate {file_name:?}");
            return false;
        }
        if !self.entries.insert(file_name.to_owned()) {
            trace!("index already lists {file_name}");
            return false;
        }
        true
    }

    /// Offer a candidate that may be unset; `None` is skipped like a blank.
    pub fn add_candidate(&mut self, file_name: Option<&str>) -> bool {
        file_name.is_some_and(|name| self.add(name))
    }

    /// Iterate entries in ascending byte order.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of distinct entries collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when nothing has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The directory the index is written beneath.
    #[must_use]
    pub fn output_directory(&self) -> &Utf8Path {
        &self.output_dir
    }

    /// Full path of the index file, `<output>/META-INF/INDEX.LIST`.
    #[must_use]
    pub fn index_path(&self) -> Utf8PathBuf {
        self.output_dir.join(INDEX_DIRECTORY).join(INDEX_FILE_NAME)
    }

    /// Render the index text exactly as [`Self::write_index`] writes it.
    #[must_use]
    pub fn render(&self) -> String {
        let capacity = self.entries.iter().map(|entry| entry.len() + 1).sum();
        let mut text = String::with_capacity(capacity);
        for entry in &self.entries {
            text.push_str(entry);
            text.push('\n');
        }
        text
    }

    /// Write the current entries to the index file, replacing any previous
    /// content, and return its absolute path.
    ///
    /// Missing parent directories are created. A failed write may leave a
    /// truncated file behind.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Write`] with the absolute index path when the
    /// directory cannot be created or the file cannot be opened or written.
    pub fn write_index(&self) -> Result<Utf8PathBuf> {
        let path = self.index_path();
        let directory = self.output_dir.join(INDEX_DIRECTORY);

        fs::create_dir_all(&directory).map_err(|source| write_failure(&path, source))?;
        let file = File::create(&path).map_err(|source| write_failure(&path, source))?;
        let file = self
            .write_entries(file)
            .map_err(|source| write_failure(&path, source))?;
        release_quietly(file, &path);

        let written = absolute_path(&path);
        debug!("wrote {} entries to {written}", self.entries.len());
        Ok(written)
    }

    /// Stream every entry through a buffer and hand the flushed file back.
    ///
    /// On error the buffer and file are dropped here, which closes the handle.
    fn write_entries(&self, file: File) -> io::Result<File> {
        let mut writer = BufWriter::new(file);
        for entry in &self.entries {
            writer.write_all(entry.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.into_inner().map_err(io::IntoInnerError::into_error)
    }
}

impl<S: AsRef<str>> Extend<S> for IndexAccumulator {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for candidate in iter {
            self.add(candidate.as_ref());
        }
    }
}

fn write_failure(path: &Utf8Path, source: io::Error) -> IndexError {
    IndexError::Write {
        path: absolute_path(path),
        source,
    }
}

/// Resolve `path` against the working directory without touching the disk.
fn absolute_path(path: &Utf8Path) -> Utf8PathBuf {
    std::path::absolute(path)
        .ok()
        .and_then(|resolved| Utf8PathBuf::try_from(resolved).ok())
        .unwrap_or_else(|| path.to_owned())
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests fail fast with a descriptive message"
)]
#[path = "accumulator_tests.rs"]
mod tests;
