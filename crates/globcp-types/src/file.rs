//! File descriptors for copy operations
//!
//! A [`SourceFile`] describes one input to a copy batch: where it lives, the
//! base directory that decides how much of its path structure is preserved,
//! and optionally its contents held in memory instead of on disk. A
//! [`CopiedFile`] describes one output. Descriptors are immutable for the
//! duration of a copy operation.

use bytes::Bytes;
use std::path::{Path, PathBuf};

/// Descriptor for a single source file taking part in a copy operation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceFile {
    path: PathBuf,
    base: Option<PathBuf>,
    contents: Option<Bytes>,
}

impl SourceFile {
    /// Create a descriptor for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            base: None,
            contents: None,
        }
    }

    /// Set the base directory used to compute the preserved relative path
    pub fn with_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Attach in-memory contents, making this a pre-resolved virtual file
    ///
    /// A file with contents is written directly to its destination; the
    /// source path is never read from disk.
    pub fn with_contents(mut self, contents: impl Into<Bytes>) -> Self {
        self.contents = Some(contents.into());
        self
    }

    /// Resolve a relative source path against `cwd`
    pub fn resolved_against(mut self, cwd: &Path) -> Self {
        if !self.path.is_absolute() {
            self.path = cwd.join(&self.path);
        }
        self
    }

    /// The source path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The base directory, if one has been set
    pub fn base(&self) -> Option<&Path> {
        self.base.as_deref()
    }

    /// The in-memory contents, if this is a virtual file
    pub fn contents(&self) -> Option<&Bytes> {
        self.contents.as_ref()
    }

    /// The path made relative to the base directory
    ///
    /// When no base is set, or the base is not an ancestor of the path, only
    /// the file name survives and directory structure is dropped.
    pub fn relative_path(&self) -> PathBuf {
        match &self.base {
            Some(base) => match self.path.strip_prefix(base) {
                Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
                _ => self.file_name(),
            },
            None => self.file_name(),
        }
    }

    fn file_name(&self) -> PathBuf {
        self.path
            .file_name()
            .map_or_else(|| self.path.clone(), PathBuf::from)
    }
}

/// Descriptor for a file created by a copy operation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CopiedFile {
    path: PathBuf,
    source: SourceFile,
    bytes_copied: u64,
}

impl CopiedFile {
    /// Create a descriptor for the file written at `path`
    pub fn new(path: impl Into<PathBuf>, source: SourceFile, bytes_copied: u64) -> Self {
        Self {
            path: path.into(),
            source,
            bytes_copied,
        }
    }

    /// The absolute output path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The originating source descriptor
    pub fn source(&self) -> &SourceFile {
        &self.source
    }

    /// Number of bytes written to the destination
    pub fn bytes_copied(&self) -> u64 {
        self.bytes_copied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/work/src/a.txt", "/work/src", "a.txt")]
    #[case("/work/src/sub/a.txt", "/work/src", "sub/a.txt")]
    #[case("/work/src/a.txt", "/work", "src/a.txt")]
    // Base not an ancestor: structure is dropped, file name survives.
    #[case("/work/src/a.txt", "/elsewhere", "a.txt")]
    #[case("/work/src/sub/a.txt", "/elsewhere/deep", "a.txt")]
    fn test_relative_path(#[case] path: &str, #[case] base: &str, #[case] expected: &str) {
        let file = SourceFile::new(path).with_base(base);
        assert_eq!(file.relative_path(), PathBuf::from(expected));
    }

    #[test]
    fn test_relative_path_without_base() {
        let file = SourceFile::new("/work/src/a.txt");
        assert_eq!(file.relative_path(), PathBuf::from("a.txt"));
    }

    #[test]
    fn test_relative_path_base_equals_path() {
        // Degenerate case: stripping yields an empty path, fall back to the
        // file name.
        let file = SourceFile::new("/work/a.txt").with_base("/work/a.txt");
        assert_eq!(file.relative_path(), PathBuf::from("a.txt"));
    }

    #[test]
    fn test_resolved_against() {
        let cwd = Path::new("/work");
        let file = SourceFile::new("src/a.txt").resolved_against(cwd);
        assert_eq!(file.path(), Path::new("/work/src/a.txt"));

        let absolute = SourceFile::new("/other/b.txt").resolved_against(cwd);
        assert_eq!(absolute.path(), Path::new("/other/b.txt"));
    }

    #[test]
    fn test_virtual_file_contents() {
        let file = SourceFile::new("virtual.txt").with_contents("hello");
        assert_eq!(file.contents().unwrap().as_ref(), b"hello");
    }
}
