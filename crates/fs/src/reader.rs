use std::fs::{self, FileType, read_dir};
use std::io;
use std::path::Path;

use bitflags::bitflags;

use crate::error::{FsError, Result};

bitflags! {
    /// Classification reported by [`DirectoryReader::stat_no_follow`].
    /// A well-behaved reader sets exactly one flag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StatFlags: u8 {
        const FILE = 0b0000_0001;
        const DIR = 0b0000_0010;
        const SYMLINK = 0b0000_0100;
    }
}

impl StatFlags {
    /// Special files (fifo, socket, device) map to no flag at all.
    pub fn from_file_type(file_type: FileType) -> Self {
        let mut flags = StatFlags::empty();
        flags.set(StatFlags::FILE, file_type.is_file());
        flags.set(StatFlags::DIR, file_type.is_dir());
        flags.set(StatFlags::SYMLINK, file_type.is_symlink());
        flags
    }
}

/// The two filesystem queries tree expansion needs.
pub trait DirectoryReader {
    /// Names directly inside `dir`, in the order the source reports them.
    /// A name that cannot be represented fails the whole listing.
    fn list_entries(&self, dir: &str) -> Result<Vec<String>>;

    /// Classify `path` without following a final symbolic link.
    fn stat_no_follow(&self, path: &str) -> Result<StatFlags>;
}

impl<R: DirectoryReader + ?Sized> DirectoryReader for &R {
    #[inline]
    fn list_entries(&self, dir: &str) -> Result<Vec<String>> {
        (**self).list_entries(dir)
    }

    #[inline]
    fn stat_no_follow(&self, path: &str) -> Result<StatFlags> {
        (**self).stat_no_follow(path)
    }
}

/// [`DirectoryReader`] backed by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsReader;

impl DirectoryReader for OsReader {
    fn list_entries(&self, dir: &str) -> Result<Vec<String>> {
        let rd = read_dir(dir).map_err(|e| FsError::from_io(dir, e))?;

        let mut names = Vec::new();
        for entry_res in rd {
            let entry = entry_res.map_err(|e| FsError::from_io(dir, e))?;
            let name = entry.file_name().into_string().map_err(|raw| FsError::Io {
                path: Path::new(dir).join(raw).to_string_lossy().into_owned(),
                source: io::Error::new(
                    io::ErrorKind::InvalidData,
                    "entry name is not valid UTF-8",
                ),
            })?;
            names.push(name);
        }

        Ok(names)
    }

    fn stat_no_follow(&self, path: &str) -> Result<StatFlags> {
        let metadata = fs::symlink_metadata(path).map_err(|e| FsError::from_io(path, e))?;
        Ok(StatFlags::from_file_type(metadata.file_type()))
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
