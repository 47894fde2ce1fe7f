//! Archive container access behind a minimal capability surface.
//!
//! The classification core needs exactly three things from a container
//! format: enumerate entries, read one entry's bytes, and write a
//! complete new archive from a given entry set. Anything satisfying
//! [`ArchiveContainer`] plus [`write_zip`] plugs in; the shipped
//! implementation is backed by the `zip` crate.

use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;

use zip::CompressionMethod;
use zip::ZipArchive;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::Result;
use crate::VetError;

/// One entry record as enumerated from a container, in native order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    /// Archive-relative path, `/`-separated; directories end with `/`.
    pub path: String,
    /// Whether the entry is a directory record.
    pub is_dir: bool,
    /// Unix permission bits when the container carries them.
    pub unix_mode: Option<u32>,
}

/// A fully-read entry staged for recompression.
#[derive(Debug, Clone)]
pub struct StagedEntry {
    /// Archive-relative path.
    pub path: String,
    /// Whether the entry is a directory record.
    pub is_dir: bool,
    /// Unix permission bits to carry over.
    pub unix_mode: Option<u32>,
    /// Raw entry bytes; empty for directories.
    pub data: Vec<u8>,
}

/// Read access to an opened archive container.
pub trait ArchiveContainer {
    /// Enumerates every entry in the container's native iteration order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArchive` if an entry record cannot be read.
    fn entries(&mut self) -> Result<Vec<EntryRecord>>;

    /// Reads the raw bytes of the file entry at `path`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArchive` if the entry is missing or unreadable.
    fn read_entry(&mut self, path: &str) -> Result<Vec<u8>>;
}

/// Zip-backed container.
pub struct ZipContainer {
    archive: ZipArchive<File>,
}

impl ZipContainer {
    /// Opens a zip file for reading.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArchive` if the file is not a parseable zip
    /// container.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let archive = ZipArchive::new(file).map_err(|e| {
            VetError::InvalidArchive(format!("failed to open zip archive: {e}"))
        })?;
        Ok(Self { archive })
    }
}

impl ArchiveContainer for ZipContainer {
    fn entries(&mut self) -> Result<Vec<EntryRecord>> {
        let mut records = Vec::with_capacity(self.archive.len());
        for i in 0..self.archive.len() {
            let entry = self.archive.by_index(i).map_err(|e| {
                VetError::InvalidArchive(format!("failed to read zip entry: {e}"))
            })?;
            records.push(EntryRecord {
                path: entry.name().to_string(),
                is_dir: entry.is_dir(),
                unix_mode: entry.unix_mode(),
            });
        }
        Ok(records)
    }

    fn read_entry(&mut self, path: &str) -> Result<Vec<u8>> {
        let mut entry = self.archive.by_name(path).map_err(|e| {
            VetError::InvalidArchive(format!("failed to read zip entry {path}: {e}"))
        })?;
        let mut data = Vec::with_capacity(usize::try_from(entry.size()).unwrap_or(0));
        entry.read_to_end(&mut data)?;
        Ok(data)
    }
}

/// Writes a complete zip archive from the staged entry set.
///
/// # Errors
///
/// Returns `RewriteFailed` if any entry cannot be written; the writer's
/// contents are unspecified in that case and must be discarded.
pub fn write_zip<W: Write + Seek>(writer: W, entries: &[StagedEntry]) -> Result<()> {
    let mut zip = ZipWriter::new(writer);

    for entry in entries {
        let mut options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        if let Some(mode) = entry.unix_mode {
            options = options.unix_permissions(mode);
        }

        if entry.is_dir {
            zip.add_directory(entry.path.trim_end_matches('/'), options)
                .map_err(|e| VetError::RewriteFailed {
                    reason: format!("failed to add directory {}: {e}", entry.path),
                })?;
        } else {
            zip.start_file(entry.path.as_str(), options)
                .map_err(|e| VetError::RewriteFailed {
                    reason: format!("failed to add file {}: {e}", entry.path),
                })?;
            zip.write_all(&entry.data)
                .map_err(|e| VetError::RewriteFailed {
                    reason: format!("failed to write {}: {e}", entry.path),
                })?;
        }
    }

    zip.finish().map_err(|e| VetError::RewriteFailed {
        reason: format!("failed to finish archive: {e}"),
    })?;
    Ok(())
}
