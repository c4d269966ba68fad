//! Loading a record corpus from discovered db/template files.

use std::path::{Path, PathBuf};

use edb_model::Record;
use edb_parse::parse_db;
use tracing::{debug, warn};

use crate::discovery::list_db_files;
use crate::error::Result;

/// Extensions searched when none are given explicitly.
pub const DEFAULT_EXTENSIONS: &[&str] = &["db", "template"];

/// Accumulates discovered files across roots, then parses them all into
/// one flat corpus. Discovery order is preserved through to the corpus.
#[derive(Debug, Default)]
pub struct DbLoader {
    files: Vec<PathBuf>,
}

impl DbLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover matching files under `root` and remember them.
    /// Returns how many files this call added.
    pub fn load_files(&mut self, root: &Path, extension: &str) -> Result<usize> {
        let found = list_db_files(root, extension)?;
        let count = found.len();
        debug!(root = %root.display(), extension, count, "discovered db files");
        self.files.extend(found);
        Ok(count)
    }

    /// Discover files under `root` for every default extension.
    pub fn load_defaults(&mut self, root: &Path) -> Result<usize> {
        let mut count = 0;
        for extension in DEFAULT_EXTENSIONS {
            count += self.load_files(root, extension)?;
        }
        Ok(count)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Parse every accumulated file and flatten the records into one corpus.
    ///
    /// Unreadable files are skipped with a warning rather than aborting the
    /// run; the point of the tool is exhaustive linting across a corpus.
    pub fn parse_files(&self) -> Vec<Record> {
        let mut records = Vec::new();
        for path in &self.files {
            let text = match std::fs::read(path) {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(error) => {
                    warn!(path = %path.display(), %error, "skipping unreadable file");
                    continue;
                }
            };
            let directory = directory_label(path);
            records.extend(parse_db(&directory, &text));
        }
        records
    }
}

/// Name of the file's parent directory, used to tag records for diagnostics.
fn directory_label(path: &Path) -> String {
    path.parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string()
}
