#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::ffi::OsStr;
use std::fs::{self, File};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use tempfile::tempdir;

use super::*;
use crate::fs::FileType;

fn sorted_names(dir_path: &Path) -> Vec<String> {
    let mut names: Vec<String> = list_dir(dir_path)
        .unwrap()
        .into_iter()
        .map(|name| name.to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn test_lists_entries_excluding_dot_entries() {
    let root = tempdir().unwrap();
    for name in ["a", "b", "c", ".hidden"] {
        File::create(root.path().join(name)).unwrap();
    }

    assert_eq!(
        sorted_names(root.path()),
        [".hidden", "a", "b", "c"],
        "Every entry except `.` and `..` should be listed, dotfiles included."
    );
}

#[test]
fn test_empty_directory_lists_no_entries() {
    let root = tempdir().unwrap();

    assert!(
        list_dir(root.path()).unwrap().is_empty(),
        "An empty directory should produce an empty listing, not an error."
    );
}

#[test]
fn test_missing_directory_fails_with_path() {
    let root = tempdir().unwrap();
    let missing = root.path().join("missing");

    let error = list_dir(&missing).unwrap_err();
    assert_eq!(
        error.errno,
        libc::ENOENT,
        "Listing a nonexistent path should surface the OS's ENOENT."
    );
    assert_eq!(
        error.path, missing,
        "The error should carry the path that failed to open."
    );
    assert!(
        error.to_string().contains("missing"),
        "The rendered error should name the offending path."
    );
}

#[test]
fn test_non_directory_fails_to_open() {
    let root = tempdir().unwrap();
    let file_path = root.path().join("plain");
    File::create(&file_path).unwrap();

    assert_eq!(
        list_dir(&file_path).unwrap_err().errno,
        libc::ENOTDIR,
        "Listing a non-directory should surface the OS's ENOTDIR."
    );
}

#[test]
fn test_decoded_name_is_text() {
    let root = tempdir().unwrap();
    File::create(root.path().join("café")).unwrap();

    let names = list_dir(root.path()).unwrap();
    assert_eq!(names.len(), 1);
    assert!(
        names[0].is_unicode(),
        "A name that decodes as UTF-8 should come back as text."
    );
    assert_eq!(names[0].as_str(), Some("café"));
}

#[test]
fn test_undecodable_name_retains_raw_bytes() {
    let root = tempdir().unwrap();
    // Latin-1 "café", which is not valid UTF-8.
    let raw = b"caf\xe9";
    File::create(root.path().join(OsStr::from_bytes(raw))).unwrap();

    let names = list_dir(root.path()).unwrap();
    assert_eq!(names.len(), 1);
    assert_eq!(
        names[0],
        EntryName::from(raw.to_vec()),
        "A name that doesn't decode should fall back to its exact raw bytes."
    );
    assert_eq!(
        names[0].as_str(),
        None,
        "An undecodable name has no text form."
    );
    assert_eq!(
        names[0].to_string(),
        "caf\u{fffd}",
        "Displaying an undecodable name should substitute the replacement character."
    );
}

#[test]
fn test_repeated_listings_match() {
    let root = tempdir().unwrap();
    for name in ["one", "two", "three"] {
        File::create(root.path().join(name)).unwrap();
    }

    assert_eq!(
        sorted_names(root.path()),
        sorted_names(root.path()),
        "Listing an unchanged directory twice should return equivalent sets."
    );
}

#[test]
fn test_entries_classify_file_types() {
    let root = tempdir().unwrap();
    File::create(root.path().join("plain")).unwrap();
    fs::create_dir(root.path().join("nested")).unwrap();

    let mut dir = Directory::open(root.path()).unwrap();
    for entry in dir.entries() {
        let entry = entry.unwrap();
        let expected = match entry.name.as_str() {
            Some("plain") => FileType::Regular,
            Some("nested") => FileType::Directory,
            other => panic!("unexpected entry: {other:?}"),
        };
        assert_eq!(
            entry.file_type,
            Some(expected),
            "d_type should classify regular files and directories."
        );
        assert_ne!(entry.ino, 0, "Every entry should carry its inode number.");
    }
    dir.close().unwrap();
}

#[test]
fn test_interior_nul_path_is_rejected() {
    let error = Directory::open(OsStr::from_bytes(b"with\0nul")).unwrap_err();
    assert_eq!(
        error.errno,
        libc::EINVAL,
        "A path with an interior NUL byte can't reach the OS and should fail up front."
    );
}
