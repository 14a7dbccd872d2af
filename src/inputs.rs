//! Input path resolution.
//!
//! A run takes either one image path or a directory. Directories are listed one level deep
//! and only regular files are kept; anything else is passed through untouched so that
//! missing or unreadable files surface when the transformer opens them.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{ProduceError, ProduceResult};

/// Resolve `path` into the ordered list of files to process.
///
/// Directory entries come back in the order the filesystem lists them, joined onto `path`.
/// Symlinks are followed when deciding whether an entry is a file.
pub fn resolve_inputs(path: &Path) -> ProduceResult<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let entries = fs::read_dir(path).map_err(|e| ProduceError::io("list input directory", path, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ProduceError::io("list input directory", path, e))?;
        let entry_path = entry.path();
        if entry_path.is_file() {
            files.push(entry_path);
        } else {
            debug!("Skipping non-file entry {}", entry_path.display());
        }
    }

    debug!("Resolved {} input file(s) in {}", files.len(), path.display());
    Ok(files)
}
