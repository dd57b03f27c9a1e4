//! TOML configuration for coordinate naming and index emission.
//!
//! Build tooling typically knows the artifact coordinate and the packaging
//! output directory up front. `BundleConfig` captures both so callers can
//! keep them in one file:
//!
//! ```toml
//! [coordinate]
//! group_id = "de.smartics.test"
//! artifact_id = "commons-test"
//!
//! [index]
//! output_directory = "target/classes"
//! ```
//!
//! Every table and key is optional; unknown keys are rejected.

use crate::coordinate::{Coordinate, CoordinateError};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::fs;
use thiserror::Error;

/// Errors arising while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read configuration {path}: {source}")]
    Read {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match the schema.
    #[error("invalid configuration{}: {source}", path_suffix(.path.as_deref()))]
    Parse {
        /// Path of the configuration file, when loaded from disk.
        path: Option<Utf8PathBuf>,
        /// The TOML deserialisation failure.
        #[source]
        source: Box<toml::de::Error>,
    },
}

fn path_suffix(path: Option<&Utf8Path>) -> String {
    path.map(|p| format!(" {p}")).unwrap_or_default()
}

/// Combined configuration for naming and index emission.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BundleConfig {
    /// The artifact coordinate used to derive the module name.
    pub coordinate: CoordinateConfig,
    /// Settings for `META-INF/INDEX.LIST` emission.
    pub index: IndexConfig,
}

/// The `[coordinate]` table.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CoordinateConfig {
    /// Maven-style group identifier.
    pub group_id: Option<String>,
    /// Maven-style artifact identifier.
    pub artifact_id: Option<String>,
}

/// The `[index]` table.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Directory beneath which `META-INF/INDEX.LIST` is written.
    pub output_directory: Option<Utf8PathBuf>,
}

impl BundleConfig {
    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is malformed or contains
    /// unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: None,
            source: Box::new(source),
        })
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its content is invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: Some(path.to_owned()),
            source: Box::new(source),
        })
    }

    /// Build the configured coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::MissingPart`] when a key is absent and
    /// [`CoordinateError::BlankPart`] when one is blank.
    pub fn coordinate(&self) -> Result<Coordinate, CoordinateError> {
        Coordinate::from_parts(
            self.coordinate.group_id.as_deref(),
            self.coordinate.artifact_id.as_deref(),
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
    use crate::coordinate::PartKind;
    use rstest::rstest;
    use tempfile::TempDir;

    const FULL: &str = r#"
[coordinate]
group_id = "de.smartics.test"
artifact_id = "commons-test"

[index]
output_directory = "target/classes"
"#;

    #[test]
    fn empty_text_yields_defaults() {
        let config = BundleConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, BundleConfig::default());
    }

    #[test]
    fn parses_both_tables() {
        let config = BundleConfig::from_toml_str(FULL).expect("valid config");
        assert_eq!(
            config.index.output_directory.as_deref().map(Utf8Path::as_str),
            Some("target/classes")
        );
        let coordinate = config.coordinate().expect("complete coordinate");
        assert_eq!(
            coordinate.module_name().as_str(),
            "de.smartics.test.commons-test"
        );
    }

    #[rstest]
    #[case::unknown_table("[packaging]\nformat = \"jar\"\n")]
    #[case::unknown_key("[index]\npath = \"out\"\n")]
    #[case::wrong_type("[index]\noutput_directory = 3\n")]
    fn rejects_invalid_documents(#[case] text: &str) {
        let err = BundleConfig::from_toml_str(text).expect_err("invalid config");
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
    }

    #[test]
    fn missing_artifact_is_reported() {
        let config = BundleConfig::from_toml_str("[coordinate]\ngroup_id = \"org.example\"\n")
            .expect("valid config");
        let err = config.coordinate().expect_err("artifact missing");
        assert_eq!(
            err,
            CoordinateError::MissingPart {
                part: PartKind::ArtifactId
            }
        );
    }

    #[test]
    fn load_reads_from_disk() {
        let temp = TempDir::new().expect("temp dir");
        let path = Utf8PathBuf::try_from(temp.path().join("bundle.toml")).expect("UTF-8 path");
        fs::write(&path, FULL).expect("write config");

        let config = BundleConfig::load(&path).expect("load succeeds");
        assert_eq!(config, BundleConfig::from_toml_str(FULL).expect("valid"));
    }

    #[test]
    fn load_reports_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = Utf8PathBuf::try_from(temp.path().join("absent.toml")).expect("UTF-8 path");
        let err = BundleConfig::load(&path).expect_err("file missing");
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }
}
