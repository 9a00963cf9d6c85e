//! # Result File Merging
//!
//! The result file is treated as a set of lines. Rendering the same graph
//! twice must not duplicate anything, so new content is filtered against the
//! lines already on disk and only the survivors are appended.

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::DebGraphError;

/// Membership view over the lines of an existing document
#[derive(Debug, Clone, Default)]
pub struct LineSet {
    lines: HashSet<String>,
}

impl LineSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the lines of `path`; a missing file yields an empty set
    pub fn load(path: &Path) -> Result<Self, DebGraphError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(content.lines().collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(DebGraphError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.contains(line)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines of `content` not present in this set, in their original order.
    ///
    /// Repeated lines within `content` are all kept.
    pub fn missing_from<'a>(&self, content: &'a str) -> Vec<&'a str> {
        content
            .lines()
            .filter(|line| !self.contains(line))
            .collect()
    }
}

impl<'a> FromIterator<&'a str> for LineSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(str::to_string).collect(),
        }
    }
}

/// Appends rendered documents to the configured result file
#[derive(Debug, Clone)]
pub struct ResultWriter {
    path: PathBuf,
}

impl ResultWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Merge `content` into the result file and return the appended lines.
    ///
    /// The file is never rewritten and is left untouched when every line is
    /// already present. Reading and appending are not atomic with respect to
    /// other processes writing the same file. If the existing file does not end
    /// with a newline, the first appended line continues its last line.
    pub fn save<'a>(&self, content: &'a str) -> Result<Vec<&'a str>, DebGraphError> {
        let existing = LineSet::load(&self.path)?;
        let unique = existing.missing_from(content);

        if unique.is_empty() {
            return Ok(unique);
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);
        for line in &unique {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;

        Ok(unique)
    }
}
