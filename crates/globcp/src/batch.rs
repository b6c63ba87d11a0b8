//! Batch driver for copy operations
//!
//! Applies the destination resolver and per-file copier across all resolved
//! inputs with bounded concurrency. Completion order is whatever the runtime
//! gives us, but results come back in input order and the first error aborts
//! the batch; files already copied are not rolled back.

use crate::copier;
use crate::dest;
use crate::options::CopyOptions;
use futures::stream::{self, StreamExt, TryStreamExt};
use globcp_types::{CopiedFile, CopyStats, Error, Result, SourceFile};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Copy `files` into `dir`, at most `options.max_concurrency` at a time
///
/// Every descriptor is expected to carry a base; `cwd` is the fallback for
/// any that do not.
pub(crate) async fn copy_all(
    files: Vec<SourceFile>,
    dir: &Path,
    cwd: &Path,
    options: &CopyOptions,
) -> Result<Vec<CopiedFile>> {
    if options.max_concurrency == 0 {
        return Err(Error::invalid_arguments(
            "max_concurrency must be at least 1",
        ));
    }

    let start = Instant::now();
    let results: Vec<CopiedFile> = stream::iter(files)
        .map(|file| copy_entry(file, dir, cwd, options))
        .buffered(options.max_concurrency)
        .try_collect()
        .await?;

    let stats = CopyStats::summarize(&results, start.elapsed());
    info!(
        "copied {} file(s), {} bytes in {:?}",
        stats.files_copied, stats.bytes_copied, stats.duration
    );
    Ok(results)
}

async fn copy_entry(
    file: SourceFile,
    dir: &Path,
    cwd: &Path,
    options: &CopyOptions,
) -> Result<CopiedFile> {
    let base = file.base().unwrap_or(cwd).to_path_buf();
    let dest = dest::resolve_dest(dir, file.path(), &base)?;
    copier::copy_file(&file, &dest, options).await
}
