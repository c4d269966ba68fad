//! Recursive discovery of db/template files under root directories.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists every file under `root` (recursively) whose extension matches.
///
/// The extension comparison is case-insensitive and a leading dot on
/// `extension` is tolerated. Results are sorted by path so the corpus
/// order is deterministic across runs.
pub fn list_db_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let wanted = extension.trim_start_matches('.');
    let mut files = Vec::new();
    collect_files(root, wanted, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_files(dir: &Path, wanted: &str, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let file_type = entry.file_type().map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        // Symlinks are skipped: following them can loop back into an
        // ancestor and recurse forever.
        if file_type.is_symlink() {
            continue;
        }

        let path = entry.path();
        if file_type.is_dir() {
            collect_files(&path, wanted, files)?;
            continue;
        }

        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(wanted))
            .unwrap_or(false);

        if matches {
            files.push(path);
        }
    }

    Ok(())
}
