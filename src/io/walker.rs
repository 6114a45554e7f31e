use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively list every regular file under `root`, as absolute paths.
///
/// Directories and symlinked directories are traversed but excluded from
/// the result. Order is filesystem traversal order. Fails if `root` does
/// not exist or a directory in the tree cannot be read.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let root = fs::canonicalize(root)
        .with_context(|| format!("failed to resolve input directory {}", root.display()))?;

    let mut files = Vec::new();
    for entry in WalkDir::new(&root).follow_links(true) {
        let entry =
            entry.with_context(|| format!("failed to walk directory {}", root.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Names of the regular files directly under `dir`, for log listings.
///
/// Best effort: an unreadable directory yields an empty list.
pub fn top_level_file_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    entries
        .flatten()
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect()
}
