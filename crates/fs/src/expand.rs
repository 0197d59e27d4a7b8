use log::{debug, trace};

use crate::error::{FsError, Result};
use crate::path::PathNormalizer;
use crate::reader::{DirectoryReader, OsReader};
use crate::record::{EntryKind, FileRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Expand every child directory before attaching it to its parent.
    pub recurse: bool,
    /// Return the root itself as the single top-level record instead of
    /// its immediate entries.
    pub keep_root: bool,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            recurse: true,
            keep_root: false,
        }
    }
}

/// Builds [`FileRecord`] trees from a root path.
///
/// Holds no state beyond its reader and normalizer, so independent
/// expanders may run on different threads.
pub struct TreeExpander<R> {
    reader: R,
    normalizer: PathNormalizer,
}

impl TreeExpander<OsReader> {
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(OsReader, PathNormalizer::from_env()?))
    }
}

impl<R: DirectoryReader> TreeExpander<R> {
    pub fn new(reader: R, normalizer: PathNormalizer) -> Self {
        Self { reader, normalizer }
    }

    #[inline]
    pub fn normalizer(&self) -> &PathNormalizer {
        &self.normalizer
    }

    #[inline]
    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Expand `root` into a tree of records.
    ///
    /// Entries keep the order the reader lists them in. Any failure,
    /// including an entry vanishing between listing and stat, aborts the
    /// whole expansion.
    pub fn expand(&self, root: &str, options: &ExpandOptions) -> Result<Vec<FileRecord>> {
        let root = self.normalizer.normalize(root);
        debug!(
            "[expand] root={root} recurse={} keep_root={}",
            options.recurse, options.keep_root
        );

        if options.keep_root {
            let record = FileRecord::open(&root, &self.normalizer, &self.reader)?;
            if !record.is_dir() {
                return Ok(vec![record]);
            }

            let children = self.expand_dir(&root, options.recurse)?;
            return Ok(vec![record.with_children(children)]);
        }

        let flags = self.reader.stat_no_follow(&root)?;
        if EntryKind::from_stat(&root, flags)? != EntryKind::Directory {
            return Err(FsError::NotADirectory { path: root });
        }

        self.expand_dir(&root, options.recurse)
    }

    fn expand_dir(&self, dir: &str, recurse: bool) -> Result<Vec<FileRecord>> {
        let names = self.reader.list_entries(dir)?;
        let prefix = self.normalizer.ensure_trailing_separator(dir)?;
        trace!("[expand] {dir}: {} entries", names.len());

        names
            .into_iter()
            .map(|name| self.expand_entry(&prefix, name, recurse))
            .collect()
    }

    fn expand_entry(&self, prefix: &str, name: String, recurse: bool) -> Result<FileRecord> {
        let full_path = format!("{prefix}{name}");
        let flags = self.reader.stat_no_follow(&full_path)?;
        let kind = EntryKind::from_stat(&full_path, flags)?;
        let record = FileRecord::from_parts(prefix.to_owned(), name, kind);

        if recurse && record.is_dir() {
            let children = self.expand_dir(record.full_path(), true)?;
            return Ok(record.with_children(children));
        }

        Ok(record)
    }
}

#[cfg(test)]
#[path = "expand_tests.rs"]
mod tests;
