//! Destination path resolution
//!
//! Maps a source path to its output path: destination directory + the source
//! path made relative to a base directory. The base controls how much of the
//! source directory structure is preserved under the destination.

use globcp_types::{Error, Result};
use std::path::{Path, PathBuf};

/// Resolve `path` against `cwd` when it is relative
pub(crate) fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    if path.as_os_str().is_empty() {
        cwd.to_path_buf()
    } else if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Compute the destination path for `source` under `dir`
///
/// The result is `dir` joined with `source` made relative to `base`. When
/// `base` is not an ancestor of `source`, only the file name is kept and
/// directory structure is dropped.
pub fn resolve_dest(dir: &Path, source: &Path, base: &Path) -> Result<PathBuf> {
    let relative = match source.strip_prefix(base) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
        _ => source
            .file_name()
            .map(PathBuf::from)
            .ok_or_else(|| {
                Error::invalid_arguments(format!(
                    "source path '{}' has no file name",
                    source.display()
                ))
            })?,
    };
    Ok(dir.join(relative))
}
