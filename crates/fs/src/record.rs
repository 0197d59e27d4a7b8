use std::hash::{Hash, Hasher};

use arbor_tree::{Children, FlattenOptions, Nested, flatten_one};
use serde::Serialize;

use crate::error::{FsError, Result};
use crate::path::PathNormalizer;
use crate::reader::{DirectoryReader, StatFlags};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntryKind {
    #[serde(rename = "file")]
    RegularFile,
    #[serde(rename = "dir")]
    Directory,
    #[serde(rename = "link")]
    SymbolicLink,
}

impl EntryKind {
    /// Exactly one flag must be set; anything else is a reader contract violation.
    pub fn from_stat(path: &str, flags: StatFlags) -> Result<Self> {
        if flags == StatFlags::FILE {
            Ok(EntryKind::RegularFile)
        } else if flags == StatFlags::DIR {
            Ok(EntryKind::Directory)
        } else if flags == StatFlags::SYMLINK {
            Ok(EntryKind::SymbolicLink)
        } else {
            Err(FsError::UnknownEntryKind {
                path: path.to_owned(),
            })
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::RegularFile => "file",
            EntryKind::Directory => "dir",
            EntryKind::SymbolicLink => "link",
        }
    }
}

/// One filesystem entry, plus its children when it is an expanded directory.
///
/// `children` is `None` for files and links, and for directories that have
/// not been expanded. Equality does not distinguish an unexpanded directory
/// from an expanded empty one; use [`FileRecord::is_expanded`] for that.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    /// Containing directory, always separator-terminated.
    directory: String,
    name: String,
    full_path: String,
    kind: EntryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Vec<FileRecord>>,
}

impl FileRecord {
    /// Normalize `path` and classify it with one stat.
    pub fn open<R>(path: &str, normalizer: &PathNormalizer, reader: &R) -> Result<Self>
    where
        R: DirectoryReader + ?Sized,
    {
        let full_path = normalizer.normalize(path);
        let flags = reader.stat_no_follow(&full_path)?;
        let kind = EntryKind::from_stat(&full_path, flags)?;
        Self::with_kind(&full_path, kind, normalizer)
    }

    /// Build a record for an already classified path. The path is split
    /// lexically and is not normalized.
    pub fn with_kind(full_path: &str, kind: EntryKind, normalizer: &PathNormalizer) -> Result<Self> {
        let directory = normalizer.directory_of(full_path)?;
        let name = normalizer.base_name(full_path).to_owned();
        Ok(Self::from_parts(directory, name, kind))
    }

    /// `directory` must already end with the separator.
    pub(crate) fn from_parts(directory: String, name: String, kind: EntryKind) -> Self {
        let full_path = format!("{directory}{name}");
        Self {
            directory,
            name,
            full_path,
            kind,
            children: None,
        }
    }

    /// Attach children. Non-directories silently drop them.
    #[must_use]
    pub fn with_children(mut self, children: Vec<FileRecord>) -> Self {
        if self.is_dir() {
            self.children = Some(children);
        }
        self
    }

    /// Fill in the children of a directory whose expansion was deferred.
    pub fn set_children(&mut self, children: Vec<FileRecord>) -> Result<()> {
        if !self.is_dir() {
            return Err(FsError::NotADirectory {
                path: self.full_path.clone(),
            });
        }
        self.children = Some(children);
        Ok(())
    }

    #[inline]
    pub fn directory(&self) -> &str {
        &self.directory
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    #[inline]
    pub fn into_full_path(self) -> String {
        self.full_path
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[inline]
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::RegularFile
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::SymbolicLink
    }

    #[inline]
    pub fn children(&self) -> Option<&[FileRecord]> {
        self.children.as_deref()
    }

    /// Whether a directory's children have been populated.
    #[inline]
    pub fn is_expanded(&self) -> bool {
        self.children.is_some()
    }

    /// This record followed by its descendants in pre-order, children stripped.
    pub fn flatten(&self) -> Vec<FileRecord> {
        flatten_one(self, &Children, &FlattenOptions::deep())
    }

    fn children_or_empty(&self) -> &[FileRecord] {
        self.children.as_deref().unwrap_or(&[])
    }
}

impl PartialEq for FileRecord {
    fn eq(&self, other: &Self) -> bool {
        self.full_path == other.full_path
            && self.directory == other.directory
            && self.name == other.name
            && self.kind == other.kind
            && self.children_or_empty() == other.children_or_empty()
    }
}

impl Eq for FileRecord {}

// Children are left out so that records equal under `eq` hash alike.
impl Hash for FileRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.full_path.hash(state);
        self.directory.hash(state);
        self.name.hash(state);
        self.kind.hash(state);
    }
}

impl Nested for FileRecord {
    fn children(&self) -> Option<&[Self]> {
        self.children.as_deref()
    }

    fn take_children(&mut self) -> Option<Vec<Self>> {
        self.children.take()
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
