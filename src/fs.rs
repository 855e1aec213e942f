//! Filesystem helpers.

use eyre::{Result, WrapErr};
use std::{fs, path::Path};

/// Writes a file atomically (using a tempfile + atomic rename).
///
/// Missing parent directories are created.
pub fn write_atomically(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("mkdir_p {}", parent.display()))?;
    }

    let mut tmp_path = path.to_path_buf();
    tmp_path.set_extension("part");

    fs::write(&tmp_path, data)
        .with_context(|| format!("write {}", tmp_path.display()))?;

    fs::rename(&tmp_path, path)
        .with_context(|| format!("rename to {}", path.display()))
}
