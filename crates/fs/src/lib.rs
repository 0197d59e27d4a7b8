mod error;
mod expand;
mod find;
mod path;
mod reader;
mod record;

#[cfg(test)]
mod testing;

pub use error::{FsError, Result};
pub use expand::{ExpandOptions, TreeExpander};
pub use find::{FindOptions, Found, Finder};
pub use path::PathNormalizer;
pub use reader::{DirectoryReader, OsReader, StatFlags};
pub use record::{EntryKind, FileRecord};
