use arbor_tree::{Children, FlattenOptions, Order, flatten};
use log::debug;

use crate::error::Result;
use crate::expand::{ExpandOptions, TreeExpander};
use crate::path::PathNormalizer;
use crate::reader::{DirectoryReader, OsReader};
use crate::record::FileRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindOptions {
    /// Report plain paths instead of records.
    pub filenames: bool,
    /// Generations below the root to report; `None` reports everything.
    pub depth: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Records(Vec<FileRecord>),
    Filenames(Vec<String>),
}

impl Found {
    pub fn len(&self) -> usize {
        match self {
            Found::Records(r) => r.len(),
            Found::Filenames(f) => f.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_filenames(self) -> Vec<String> {
        match self {
            Found::Records(r) => r.into_iter().map(FileRecord::into_full_path).collect(),
            Found::Filenames(f) => f,
        }
    }
}

/// Every path under a root, root first, in pre-order.
pub struct Finder<R> {
    expander: TreeExpander<R>,
}

impl Finder<OsReader> {
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(TreeExpander::from_env()?))
    }
}

impl<R: DirectoryReader> Finder<R> {
    pub fn new(expander: TreeExpander<R>) -> Self {
        Self { expander }
    }

    pub fn with_reader(reader: R, normalizer: PathNormalizer) -> Self {
        Self::new(TreeExpander::new(reader, normalizer))
    }

    #[inline]
    pub fn expander(&self) -> &TreeExpander<R> {
        &self.expander
    }

    /// Find everything under `path`, or under the working directory when
    /// `path` is `None`.
    pub fn find(&self, path: Option<&str>, options: &FindOptions) -> Result<Found> {
        let flat = self.find_records(path, options.depth)?;

        if options.filenames {
            Ok(Found::Filenames(
                flat.into_iter().map(FileRecord::into_full_path).collect(),
            ))
        } else {
            Ok(Found::Records(flat))
        }
    }

    /// [`Finder::find`] without the filename projection.
    pub fn find_records(&self, path: Option<&str>, depth: Option<usize>) -> Result<Vec<FileRecord>> {
        let normalizer = self.expander.normalizer();
        let root = normalizer.normalize(path.unwrap_or(normalizer.cwd()));
        let root = normalizer.trim_trailing_separator(&root);
        debug!("[find] root={root} depth={depth:?}");

        let tree = self.expander.expand(
            root,
            &ExpandOptions {
                recurse: true,
                keep_root: true,
            },
        )?;

        Ok(flatten(
            &tree,
            &Children,
            &FlattenOptions {
                order: Order::Deep,
                depth,
                strip: true,
            },
        ))
    }
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
