//! Per-file copy primitive
//!
//! Duplicates one source file to its resolved destination, creating parent
//! directories as needed. On-disk sources go through `tokio::fs::copy`
//! (contents plus permissions); virtual sources are written from their
//! in-memory contents. Timestamps are passed through when requested.

use crate::options::CopyOptions;
use globcp_types::{CopiedFile, Error, Result, SourceFile};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Copy one file to `dest`, returning a descriptor of the created file
pub(crate) async fn copy_file(
    file: &SourceFile,
    dest: &Path,
    options: &CopyOptions,
) -> Result<CopiedFile> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::from_io_path(e, parent))?;
    }

    let bytes_copied = match file.contents() {
        Some(contents) => {
            fs::write(dest, contents)
                .await
                .map_err(|e| Error::from_io_path(e, dest))?;
            contents.len() as u64
        }
        None => fs::copy(file.path(), dest)
            .await
            .map_err(|e| Error::from_io_path(e, file.path()))?,
    };

    // Virtual files have no on-disk source to take timestamps from.
    if options.preserve_timestamps && file.contents().is_none() {
        preserve_timestamps(file.path(), dest).await?;
    }

    debug!(
        "copied '{}' -> '{}' ({} bytes)",
        file.path().display(),
        dest.display(),
        bytes_copied
    );
    Ok(CopiedFile::new(dest, file.clone(), bytes_copied))
}

/// Pass source access and modification times through to the destination
async fn preserve_timestamps(source: &Path, dest: &Path) -> Result<()> {
    let metadata = fs::metadata(source)
        .await
        .map_err(|e| Error::from_io_path(e, source))?;

    let accessed = metadata
        .accessed()
        .unwrap_or_else(|_| std::time::SystemTime::now());
    let modified = metadata
        .modified()
        .unwrap_or_else(|_| std::time::SystemTime::now());

    filetime::set_file_times(
        dest,
        filetime::FileTime::from_system_time(accessed),
        filetime::FileTime::from_system_time(modified),
    )
    .map_err(|e| Error::from_io_path(e, dest))
}
