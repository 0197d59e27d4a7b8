use std::fs;

use arbor_fs::{OsReader, PathNormalizer};
use tempfile::TempDir;

use super::*;

fn fixture() -> (TempDir, Finder<OsReader>) {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("src")).unwrap();
    fs::write(tmp.path().join("src/lib.rs"), "").unwrap();

    let root = tmp.path().to_str().unwrap().to_owned();
    let finder = Finder::with_reader(OsReader, PathNormalizer::new("", '/', root));
    (tmp, finder)
}

fn paths(records: &[FileRecord]) -> Vec<&str> {
    records.iter().map(FileRecord::full_path).collect()
}

#[cfg(unix)]
#[test]
fn no_paths_searches_the_working_directory() {
    let (tmp, finder) = fixture();
    let root = tmp.path().to_str().unwrap();

    let records = collect(&finder, &[], None).unwrap();
    assert_eq!(
        paths(&records),
        vec![
            root.to_owned(),
            format!("{root}/src"),
            format!("{root}/src/lib.rs"),
        ]
    );
}

#[cfg(unix)]
#[test]
fn overlapping_roots_report_each_entry_once() {
    let (_tmp, finder) = fixture();

    let records = collect(&finder, &[".".to_owned(), "src".to_owned()], None).unwrap();
    assert_eq!(records.len(), 3);
}

#[cfg(unix)]
#[test]
fn depth_applies_per_root() {
    let (_tmp, finder) = fixture();

    let records = collect(&finder, &["src".to_owned()], Some(0)).unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].is_dir());
}

#[cfg(unix)]
#[test]
fn missing_root_is_an_error() {
    let (_tmp, finder) = fixture();

    let err = collect(&finder, &["absent".to_owned()], None).unwrap_err();
    assert!(err.to_string().contains("absent"), "{err}");
}
