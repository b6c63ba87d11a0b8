//! Glob expansion against a working directory
//!
//! Patterns are compiled into a [`globset::GlobSet`] and matched against
//! paths relative to the working directory while it is walked with
//! [`walkdir`]. Only regular files are yielded; matched directories are
//! skipped. Output order is sorted by path so batch results are stable.

use crate::dest::absolutize;
use crate::input::has_glob_meta;
use crate::options::CopyOptions;
use globcp_types::{Error, Result, SourceFile};
use globset::{GlobBuilder, GlobSetBuilder};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Result of expanding a set of patterns
#[derive(Debug)]
pub(crate) struct Expansion {
    /// Matched files grouped per input pattern, each carrying the computed
    /// source base; a file matched by several patterns is attributed to the
    /// first one
    pub matches: Vec<Vec<SourceFile>>,
    /// The source base the matches were resolved against
    pub base: PathBuf,
}

/// Expand `patterns` against `cwd`, yielding matched regular files
///
/// The source base is `options.src_base` when set, otherwise the deepest
/// common non-glob parent of the patterns resolved against `cwd`.
pub(crate) fn expand(patterns: &[String], cwd: &Path, options: &CopyOptions) -> Result<Expansion> {
    let base = options
        .src_base
        .as_deref()
        .map_or_else(|| glob_parent(patterns, cwd), |b| absolutize(cwd, b));

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .case_insensitive(options.glob.case_insensitive)
            .literal_separator(true)
            .build()
            .map_err(|e| Error::glob(format!("invalid pattern '{}': {}", pattern, e)))?;
        builder.add(glob);
    }
    let set = builder
        .build()
        .map_err(|e| Error::glob(format!("failed to compile patterns: {}", e)))?;

    let mut walk = WalkDir::new(cwd).follow_links(options.glob.follow_links);
    if let Some(depth) = options.glob.max_depth {
        walk = walk.max_depth(depth);
    }

    let mut matches: Vec<Vec<SourceFile>> = vec![Vec::new(); patterns.len()];
    for entry in walk {
        let entry = entry
            .map_err(|e| Error::glob(format!("walk failed under '{}': {}", cwd.display(), e)))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(cwd).unwrap_or_else(|_| entry.path());
        if !options.glob.include_hidden && is_hidden(relative) {
            continue;
        }
        if let Some(&first) = set.matches(relative).first() {
            matches[first].push(SourceFile::new(entry.path()).with_base(&base));
        }
    }
    for group in &mut matches {
        group.sort_by(|a, b| a.path().cmp(b.path()));
    }

    debug!(
        "expanded {} pattern(s) into {} file(s) under '{}'",
        patterns.len(),
        matches.iter().map(Vec::len).sum::<usize>(),
        base.display()
    );
    Ok(Expansion { matches, base })
}

/// The deepest common non-glob parent of `patterns`, resolved against `cwd`
///
/// This decides how much source structure a glob copy preserves: for
/// `a/b/*.txt` the base is `a/b`, for a literal `a/b.txt` it is `a`, and for
/// `*.txt` it is `cwd` itself. With several patterns the bases are reduced to
/// their common ancestor.
pub(crate) fn glob_parent(patterns: &[String], cwd: &Path) -> PathBuf {
    let mut common: Option<PathBuf> = None;
    for pattern in patterns {
        let parent = absolutize(cwd, &non_glob_parent(pattern));
        common = Some(match common {
            None => parent,
            Some(current) => common_ancestor(&current, &parent),
        });
    }
    common.unwrap_or_else(|| cwd.to_path_buf())
}

/// The leading components of `pattern` up to the first glob component,
/// excluding a trailing literal file name
fn non_glob_parent(pattern: &str) -> PathBuf {
    let mut parent = PathBuf::new();
    for component in Path::new(pattern).components() {
        if has_glob_meta(&component.as_os_str().to_string_lossy()) {
            return parent;
        }
        parent.push(component);
    }
    // Fully literal pattern: the last component names a file.
    parent.pop();
    parent
}

fn common_ancestor(a: &Path, b: &Path) -> PathBuf {
    a.components()
        .zip(b.components())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x)
        .collect()
}

fn is_hidden(relative: &Path) -> bool {
    relative.components().any(|c| {
        c.as_os_str()
            .to_string_lossy()
            .starts_with('.')
    })
}
