//! In-memory [`DirectoryReader`] for unit tests.

use crate::error::{FsError, Result};
use crate::reader::{DirectoryReader, StatFlags};

/// Tree described by `"<path> <kind>"` lines, `/`-separated.
///
/// Kinds are `file`, `dir`, `link`, `unknown` (stat succeeds with no flag)
/// and `phantom` (listed by its parent, but stat fails with `NotFound`).
/// Directories list their children in declaration order.
pub(crate) struct MemoryReader {
    entries: Vec<(String, Option<StatFlags>)>,
}

impl MemoryReader {
    pub(crate) fn from_lines(lines: &[&str]) -> Self {
        let entries = lines
            .iter()
            .map(|line| {
                let (path, kind) = line.rsplit_once(' ').expect("line is '<path> <kind>'");
                let flags = match kind {
                    "file" => Some(StatFlags::FILE),
                    "dir" => Some(StatFlags::DIR),
                    "link" => Some(StatFlags::SYMLINK),
                    "unknown" => Some(StatFlags::empty()),
                    "phantom" => None,
                    other => panic!("unknown kind in fixture: {other}"),
                };
                (path.to_owned(), flags)
            })
            .collect();

        Self { entries }
    }

    fn lookup(&self, path: &str) -> Option<&Option<StatFlags>> {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, flags)| flags)
    }
}

impl DirectoryReader for MemoryReader {
    fn list_entries(&self, dir: &str) -> Result<Vec<String>> {
        let flags = self.stat_no_follow(dir)?;
        if !flags.contains(StatFlags::DIR) {
            return Err(FsError::NotADirectory {
                path: dir.to_owned(),
            });
        }

        let prefix = if dir.ends_with('/') {
            dir.to_owned()
        } else {
            format!("{dir}/")
        };

        Ok(self
            .entries
            .iter()
            .filter_map(|(p, _)| p.strip_prefix(prefix.as_str()))
            .filter(|rest| !rest.is_empty() && !rest.contains('/'))
            .map(str::to_owned)
            .collect())
    }

    fn stat_no_follow(&self, path: &str) -> Result<StatFlags> {
        match self.lookup(path) {
            Some(Some(flags)) => Ok(*flags),
            _ => Err(FsError::NotFound {
                path: path.to_owned(),
            }),
        }
    }
}
