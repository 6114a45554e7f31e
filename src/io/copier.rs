use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Copy every top-level entry of `src` into `dst`.
///
/// Directories are copied recursively with structure, symlinks, and
/// permissions preserved where possible; regular files keep their
/// permissions and modification time. One bulk operation: the first
/// entry that fails to copy fails the whole step, with no rollback of
/// entries already copied.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    let entries = fs::read_dir(src)
        .with_context(|| format!("failed to read input directory {}", src.display()))?;
    fs::create_dir_all(dst)
        .with_context(|| format!("failed to create output directory {}", dst.display()))?;

    for entry in entries {
        let entry = entry?;
        copy_entry(&entry.path(), &dst.join(entry.file_name()), entry.file_type()?)?;
    }
    Ok(())
}

fn copy_entry(src: &Path, dst: &Path, file_type: fs::FileType) -> Result<()> {
    if file_type.is_symlink() {
        copy_symlink(src, dst)
    } else if file_type.is_dir() {
        copy_dir_recursive(src, dst)
    } else {
        copy_file(src, dst)
    }
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)
        .with_context(|| format!("failed to create directory {}", dst.display()))?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        copy_entry(&entry.path(), &dst.join(entry.file_name()), entry.file_type()?)?;
    }

    let permissions = fs::metadata(src)?.permissions();
    fs::set_permissions(dst, permissions)?;
    Ok(())
}

fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    // fs::copy carries contents and permissions; the modification time
    // is restored separately.
    fs::copy(src, dst)
        .with_context(|| format!("failed to copy {} to {}", src.display(), dst.display()))?;
    let modified = fs::metadata(src)?.modified()?;
    fs::OpenOptions::new()
        .write(true)
        .open(dst)?
        .set_modified(modified)?;
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
    let target = fs::read_link(src)
        .with_context(|| format!("failed to read symlink {}", src.display()))?;
    std::os::unix::fs::symlink(&target, dst)
        .with_context(|| format!("failed to create symlink {}", dst.display()))?;
    Ok(())
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
    // No portable symlink creation; copy what the link points at.
    let resolved = fs::canonicalize(src)
        .with_context(|| format!("failed to resolve symlink {}", src.display()))?;
    if resolved.is_dir() {
        copy_dir_recursive(&resolved, dst)
    } else {
        copy_file(&resolved, dst)
    }
}
