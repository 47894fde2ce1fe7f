//! Test utilities for building fixture archives.
//!
//! Reusable helpers for creating zip fixtures, reducing duplication
//! across scanner and rewrite tests.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::fs::File;
use std::io::Cursor;
use std::io::Seek;
use std::io::Write;
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::write::ZipWriter;

/// Creates an in-memory zip archive from a list of entries.
///
/// Each entry is a tuple of (path, content). Paths ending with `/` are
/// written as directory records and their content is ignored; files are
/// stored with mode 0o644.
///
/// # Examples
///
/// ```
/// use zipvet_core::test_utils::create_test_zip;
///
/// let entries: &[(&str, &[u8])] = &[("sub/", b""), ("sub/app.js", b"x")];
/// let data = create_test_zip(entries);
/// ```
#[must_use]
pub fn create_test_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    append_entries(&mut buffer, entries);
    buffer.into_inner()
}

/// Writes a fixture zip archive to `path`.
pub fn write_test_zip(path: &Path, entries: &[(&str, &[u8])]) {
    let mut file = File::create(path).unwrap();
    append_entries(&mut file, entries);
}

fn append_entries<W: Write + Seek>(writer: &mut W, entries: &[(&str, &[u8])]) {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored)
        .unix_permissions(0o644);

    for (path, data) in entries {
        if path.ends_with('/') {
            zip.add_directory(path.trim_end_matches('/'), options).unwrap();
        } else {
            zip.start_file(*path, options).unwrap();
            zip.write_all(data).unwrap();
        }
    }

    zip.finish().unwrap();
}
