//! Copy files, globs, or in-memory files into a directory
//!
//! globcp copies one or more sources into a destination directory,
//! preserving relative path structure and returning descriptors of the files
//! it created. Sources can be literal paths, glob patterns expanded against a
//! working directory, or pre-resolved [`SourceFile`] descriptors carrying
//! in-memory contents.
//!
//! # Features
//!
//! - **Uniform inputs**: a single path, a pattern, a descriptor, or a list
//! - **Structure preservation**: a configurable source base decides how much
//!   of the source path survives under the destination
//! - **Bounded fan-out**: copies run concurrently up to a limit, results come
//!   back in input order, and the first error aborts the batch
//!
//! # Examples
//!
//! ```rust,no_run
//! use globcp::{copy, CopyOptions};
//!
//! # async fn example() -> globcp::Result<()> {
//! let files = copy("src/**/*.rs", "dist", CopyOptions::default()).await?;
//! for file in &files {
//!     println!("created {}", file.path().display());
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use std::path::{Path, PathBuf};

mod batch;
mod copier;
mod expand;

pub mod dest;
pub mod input;
pub mod options;

pub use dest::resolve_dest;
pub use input::{CopyInput, CopyInputs};
pub use options::{CopyOptions, GlobOptions};

// Re-export the shared type system at the crate root
pub use globcp_types::{CopiedFile, CopyStats, Error, ErrorKind, Result, SourceFile};

/// Copy paths, glob patterns, or pre-resolved files into `dir`
///
/// When any entry contains glob syntax, pattern entries are expanded against
/// the working directory and the source base defaults to their common
/// non-glob parent. Otherwise every entry is treated as a literal path
/// resolved against the working directory.
///
/// Returns descriptors of the created files, in input order.
///
/// ```rust,no_run
/// # async fn example() -> globcp::Result<()> {
/// let files = globcp::copy("foo.txt", "dist", globcp::CopyOptions::default()).await?;
/// assert_eq!(files.len(), 1);
/// # Ok(())
/// # }
/// ```
pub async fn copy<I, P>(sources: I, dir: P, options: CopyOptions) -> Result<Vec<CopiedFile>>
where
    I: Into<CopyInputs>,
    P: AsRef<Path>,
{
    let inputs = sources.into();
    let (dir, cwd) = prepare(dir.as_ref(), &inputs, &options)?;

    if !inputs.has_glob() {
        return copy_literal(inputs, &dir, &cwd, &options).await;
    }

    // Split out the patterns for expansion, remembering where each entry sat
    // so the result list keeps input order.
    enum Slot {
        Pattern(usize),
        File(SourceFile),
    }

    let mut patterns = Vec::new();
    let mut slots = Vec::with_capacity(inputs.len());
    for entry in inputs {
        match entry {
            CopyInput::Pattern(pattern) => {
                slots.push(Slot::Pattern(patterns.len()));
                patterns.push(pattern);
            }
            CopyInput::File(file) => slots.push(Slot::File(file)),
        }
    }

    let mut expansion = expand::expand(&patterns, &cwd, &options)?;
    let mut files = Vec::new();
    for slot in slots {
        match slot {
            Slot::Pattern(index) => files.append(&mut expansion.matches[index]),
            Slot::File(file) => files.push(finalize(file, &cwd, &options, Some(&expansion.base))),
        }
    }

    batch::copy_all(files, &dir, &cwd, &options).await
}

/// Copy a pre-resolved list of files into `dir`, without glob expansion
///
/// Every entry is treated as a literal path (or descriptor) resolved against
/// the working directory, even if it contains glob metacharacters.
pub async fn copy_each<I, P>(files: I, dir: P, options: CopyOptions) -> Result<Vec<CopiedFile>>
where
    I: Into<CopyInputs>,
    P: AsRef<Path>,
{
    let inputs = files.into();
    let (dir, cwd) = prepare(dir.as_ref(), &inputs, &options)?;
    copy_literal(inputs, &dir, &cwd, &options).await
}

/// Copy a single file into `dir`
pub async fn copy_one<F, P>(file: F, dir: P, options: CopyOptions) -> Result<CopiedFile>
where
    F: Into<CopyInput>,
    P: AsRef<Path>,
{
    let inputs = CopyInputs::from(vec![file.into()]);
    let (dir, cwd) = prepare(dir.as_ref(), &inputs, &options)?;
    let mut results = copy_literal(inputs, &dir, &cwd, &options).await?;
    results
        .pop()
        .ok_or_else(|| Error::other("copy produced no result"))
}

/// Validate the invocation and resolve the destination and working directory
fn prepare(dir: &Path, inputs: &CopyInputs, options: &CopyOptions) -> Result<(PathBuf, PathBuf)> {
    if inputs.is_empty() {
        return Err(Error::invalid_arguments("no source files or patterns given"));
    }
    if dir.as_os_str().is_empty() {
        return Err(Error::invalid_arguments("destination directory is empty"));
    }
    if options.max_concurrency == 0 {
        return Err(Error::invalid_arguments(
            "max_concurrency must be at least 1",
        ));
    }

    let process_cwd = std::env::current_dir()?;
    let cwd = options
        .cwd
        .as_deref()
        .map_or_else(|| process_cwd.clone(), |c| dest::absolutize(&process_cwd, c));
    let dir = dest::absolutize(&cwd, dir);
    Ok((dir, cwd))
}

async fn copy_literal(
    inputs: CopyInputs,
    dir: &Path,
    cwd: &Path,
    options: &CopyOptions,
) -> Result<Vec<CopiedFile>> {
    let files = inputs
        .into_iter()
        .map(|entry| {
            let file = match entry {
                CopyInput::Pattern(path) => SourceFile::new(path),
                CopyInput::File(file) => file,
            };
            finalize(file, cwd, options, None)
        })
        .collect();
    batch::copy_all(files, dir, cwd, options).await
}

/// Resolve a descriptor's path against `cwd` and settle its base
///
/// Base precedence: explicit `src_base` override, then a base already on the
/// descriptor, then `default_base` (the computed glob parent), then `cwd`.
fn finalize(
    file: SourceFile,
    cwd: &Path,
    options: &CopyOptions,
    default_base: Option<&Path>,
) -> SourceFile {
    let file = file.resolved_against(cwd);
    if let Some(base) = options.src_base.as_deref() {
        file.with_base(dest::absolutize(cwd, base))
    } else if file.base().is_some() {
        file
    } else if let Some(base) = default_base {
        file.with_base(base)
    } else {
        file.with_base(cwd)
    }
}
