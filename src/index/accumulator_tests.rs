//! Unit tests for the index accumulator.

use super::*;
use rstest::{fixture, rstest};
use tempfile::TempDir;

#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().expect("temp dir creation succeeds")
}

fn utf8_dir(temp_dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::try_from(temp_dir.path().to_owned()).expect("non-UTF8 temp path")
}

fn read_index(path: &Utf8Path) -> String {
    fs::read_to_string(path).expect("index file readable")
}

#[rstest]
#[case::empty("")]
#[case::whitespace("  \t")]
fn blank_output_directory_is_rejected(#[case] dir: &str) {
    let err = IndexAccumulator::new(dir).expect_err("blank directory");
    assert!(matches!(err, IndexError::MissingOutputDirectory));
    assert!(err.is_invalid_argument());
}

#[rstest]
fn index_path_is_fixed_beneath_output(temp_dir: TempDir) {
    let dir = utf8_dir(&temp_dir);
    let index = IndexAccumulator::new(dir.clone()).expect("valid directory");
    assert_eq!(index.output_directory(), dir.as_path());
    assert_eq!(index.index_path(), dir.join("META-INF").join("INDEX.LIST"));
}

#[test]
fn duplicates_collapse_to_one_entry() {
    let mut index = IndexAccumulator::new("out").expect("valid directory");
    assert!(index.add("a.jar"));
    assert!(!index.add("a.jar"));
    assert!(!index.add("a.jar"));
    assert_eq!(index.len(), 1);
}

#[rstest]
#[case::empty(Some(""))]
#[case::whitespace(Some(" \n"))]
#[case::unset(None)]
fn blank_candidates_leave_index_unchanged(#[case] candidate: Option<&str>) {
    let mut index = IndexAccumulator::new("out").expect("valid directory");
    index.add("a.jar");
    let before = index.render();

    assert!(!index.add_candidate(candidate));

    assert_eq!(index.render(), before);
    assert_eq!(index.len(), 1);
}

#[test]
fn entries_are_kept_verbatim() {
    let mut index = IndexAccumulator::new("out").expect("valid directory");
    index.extend(["lib\\a.jar", "lib/a.jar", "A.jar", "a.jar", " a.jar"]);
    let entries: Vec<&str> = index.entries().collect();
    assert_eq!(entries, [" a.jar", "A.jar", "a.jar", "lib/a.jar", "lib\\a.jar"]);
}

#[test]
fn render_sorts_and_terminates_every_line() {
    let mut index = IndexAccumulator::new("out").expect("valid directory");
    index.extend(["b.jar", "a.jar", "a.jar", "c.jar"]);
    assert_eq!(index.render(), "a.jar\nb.jar\nc.jar\n");
}

#[test]
fn empty_index_renders_empty_text() {
    let index = IndexAccumulator::new("out").expect("valid directory");
    assert!(index.is_empty());
    assert_eq!(index.render(), "");
}

#[rstest]
fn write_index_creates_meta_inf(temp_dir: TempDir) {
    let dir = utf8_dir(&temp_dir).join("nested").join("classes");
    let mut index = IndexAccumulator::new(dir.clone()).expect("valid directory");
    index.extend(["b.jar", "a.jar", "a.jar", "c.jar"]);

    let path = index.write_index().expect("write succeeds");

    assert_eq!(path, dir.join("META-INF/INDEX.LIST"));
    assert_eq!(read_index(&path), "a.jar\nb.jar\nc.jar\n");
}

#[rstest]
fn write_index_overwrites_previous_file(temp_dir: TempDir) {
    let mut index = IndexAccumulator::new(utf8_dir(&temp_dir)).expect("valid directory");
    index.add("b.jar");
    let path = index.write_index().expect("first write");
    assert_eq!(read_index(&path), "b.jar\n");

    index.add("a.jar");
    index.write_index().expect("second write");
    assert_eq!(read_index(&path), "a.jar\nb.jar\n");
}

#[rstest]
fn write_index_encodes_utf8(temp_dir: TempDir) {
    let mut index = IndexAccumulator::new(utf8_dir(&temp_dir)).expect("valid directory");
    index.extend(["zeta.jar", "\u{e4}pfel.jar"]);
    let path = index.write_index().expect("write succeeds");
    let bytes = fs::read(&path).expect("index readable");
    assert_eq!(bytes, "zeta.jar\n\u{e4}pfel.jar\n".as_bytes());
}

#[rstest]
fn directory_failure_reports_absolute_index_path(temp_dir: TempDir) {
    let blocker = utf8_dir(&temp_dir).join("not-a-directory");
    fs::write(&blocker, b"file").expect("write blocker");
    let mut index = IndexAccumulator::new(blocker.clone()).expect("valid directory");
    index.add("a.jar");

    let err = index.write_index().expect_err("META-INF cannot be created");

    let IndexError::Write { path, .. } = &err else {
        panic!("expected write failure, got {err:?}");
    };
    assert!(path.is_absolute());
    assert!(path.ends_with("not-a-directory/META-INF/INDEX.LIST"));
    assert!(!err.is_invalid_argument());
}

#[rstest]
fn open_failure_carries_io_source(temp_dir: TempDir) {
    let dir = utf8_dir(&temp_dir);
    fs::create_dir_all(dir.join("META-INF/INDEX.LIST")).expect("occupy index path");
    let index = IndexAccumulator::new(dir).expect("valid directory");

    let err = index.write_index().expect_err("index path is a directory");

    assert!(std::error::Error::source(&err).is_some());
    assert!(err.to_string().contains("INDEX.LIST"));
}

#[test]
fn from_config_requires_output_directory() {
    let config = BundleConfig::default();
    let err = IndexAccumulator::from_config(&config).expect_err("no directory configured");
    assert!(matches!(err, IndexError::MissingOutputDirectory));
}

#[test]
fn from_config_uses_configured_directory() {
    let config = BundleConfig::from_toml_str("[index]\noutput_directory = \"target/classes\"\n")
        .expect("valid config");
    let index = IndexAccumulator::from_config(&config).expect("directory configured");
    assert_eq!(index.output_directory().as_str(), "target/classes");
}

#[test]
fn relative_index_paths_are_resolved_to_absolute() {
    let relative = Utf8Path::new("out").join(INDEX_DIRECTORY).join(INDEX_FILE_NAME);
    let resolved = absolute_path(&relative);
    assert!(resolved.is_absolute(), "not absolute: {resolved}");
    assert!(resolved.ends_with(&relative));
}

#[rstest]
fn write_index_returns_the_same_path_an_error_would_carry(temp_dir: TempDir) {
    let mut index = IndexAccumulator::new(utf8_dir(&temp_dir)).expect("valid directory");
    index.add("a.jar");
    let path = index.write_index().expect("write succeeds");
    assert!(path.is_absolute());
    assert_eq!(path, absolute_path(&index.index_path()));
}

#[cfg(target_os = "linux")]
#[rstest]
fn failure_while_streaming_entries_is_a_write_error(temp_dir: TempDir) {
    let dir = utf8_dir(&temp_dir);
    fs::create_dir_all(dir.join(INDEX_DIRECTORY)).expect("create META-INF");
    std::os::unix::fs::symlink("/dev/full", dir.join("META-INF/INDEX.LIST"))
        .expect("link index path to /dev/full");
    let mut index = IndexAccumulator::new(dir).expect("valid directory");
    // Enough text to overflow the write buffer before the final flush.
    index.extend((0..2_000).map(|n| format!("lib/entry-{n:05}.jar")));

    let err = index.write_index().expect_err("device is full");

    let IndexError::Write { path, source } = &err else {
        panic!("expected write failure, got {err:?}");
    };
    assert!(path.is_absolute());
    assert!(path.ends_with("META-INF/INDEX.LIST"));
    assert_eq!(source.kind(), io::ErrorKind::StorageFull);
}
