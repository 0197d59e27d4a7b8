use std::borrow::Cow;
use std::path::MAIN_SEPARATOR;

use arbor_runtime::home_dir;

use crate::error::{FsError, Result};

/// Lexical path canonicalization over a single separator character.
///
/// Nothing here touches the filesystem; the working directory and home
/// directory are plain configuration captured at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathNormalizer {
    home: String,
    separator: char,
    cwd: String,
}

impl PathNormalizer {
    pub fn new(home: impl Into<String>, separator: char, cwd: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            separator,
            cwd: cwd.into(),
        }
    }

    /// Home from the environment, the platform separator and the process cwd.
    pub fn from_env() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| FsError::from_io(".", e))?;
        Ok(Self::new(
            home_dir(),
            MAIN_SEPARATOR,
            cwd.to_string_lossy().into_owned(),
        ))
    }

    #[must_use]
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = home.into();
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    #[must_use]
    pub fn with_cwd(mut self, cwd: impl Into<String>) -> Self {
        self.cwd = cwd.into();
        self
    }

    #[inline]
    pub fn separator(&self) -> char {
        self.separator
    }

    #[inline]
    pub fn home(&self) -> &str {
        &self.home
    }

    #[inline]
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Expand a leading `~`, resolve against the cwd, and collapse `.`,
    /// `..` and repeated separators. The result never ends in a separator
    /// unless it is the root itself.
    pub fn normalize(&self, input: &str) -> String {
        let sep = self.separator;

        let expanded: Cow<'_, str> = match input.strip_prefix('~') {
            Some(rest) => Cow::Owned(format!("{}{rest}", self.home)),
            None => Cow::Borrowed(input),
        };

        let absolute: Cow<'_, str> = if expanded.starts_with(sep) {
            expanded
        } else {
            Cow::Owned(format!("{}{sep}{expanded}", self.cwd))
        };

        let mut segments: Vec<&str> = Vec::new();
        for segment in absolute.split(sep) {
            match segment {
                "" | "." => {}
                // `..` at the root stays at the root
                ".." => {
                    segments.pop();
                }
                s => segments.push(s),
            }
        }

        if segments.is_empty() {
            return sep.to_string();
        }

        let mut out = String::with_capacity(absolute.len());
        for segment in segments {
            out.push(sep);
            out.push_str(segment);
        }
        out
    }

    /// Append the separator unless `path` already ends with one.
    pub fn ensure_trailing_separator(&self, path: &str) -> Result<String> {
        if path.is_empty() {
            return Err(FsError::empty_path());
        }

        let mut out = path.to_owned();
        if !out.ends_with(self.separator) {
            out.push(self.separator);
        }
        Ok(out)
    }

    /// Parent directory of `full_path`, separator-terminated.
    ///
    /// A bare name yields `./`; trailing separators on the input are ignored.
    pub fn directory_of(&self, full_path: &str) -> Result<String> {
        if full_path.is_empty() {
            return Err(FsError::empty_path());
        }

        let sep = self.separator;
        let trimmed = full_path.trim_end_matches(sep);
        if trimmed.is_empty() {
            return Ok(sep.to_string());
        }

        let parent = match trimmed.rfind(sep) {
            None => ".",
            Some(idx) => {
                let parent = trimmed[..idx].trim_end_matches(sep);
                if parent.is_empty() {
                    return Ok(sep.to_string());
                }
                parent
            }
        };

        self.ensure_trailing_separator(parent)
    }

    /// Last segment of `path`, ignoring trailing separators. Empty for the root.
    pub fn base_name<'a>(&self, path: &'a str) -> &'a str {
        let trimmed = path.trim_end_matches(self.separator);
        match trimmed.rfind(self.separator) {
            Some(idx) => &trimmed[idx + self.separator.len_utf8()..],
            None => trimmed,
        }
    }

    /// Strip trailing separators, keeping a lone root separator.
    pub fn trim_trailing_separator<'a>(&self, path: &'a str) -> &'a str {
        let trimmed = path.trim_end_matches(self.separator);
        if trimmed.is_empty() && !path.is_empty() {
            &path[..self.separator.len_utf8()]
        } else {
            trimmed
        }
    }
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
