//! Input normalization for copy invocations
//!
//! The public API accepts a single path, a glob pattern, a pre-resolved
//! [`SourceFile`], or a list of any of these. [`CopyInputs`] coerces all of
//! those shapes into one uniform list and answers the single question the
//! pipeline cares about up front: does any entry contain glob syntax?

use globcp_types::SourceFile;
use std::path::{Path, PathBuf};

/// A single copy input: a literal path or glob pattern, or a pre-resolved file
#[derive(Debug, Clone)]
pub enum CopyInput {
    /// A path or glob pattern, interpreted relative to the working directory
    Pattern(String),
    /// A pre-resolved file descriptor, possibly carrying in-memory contents
    File(SourceFile),
}

impl CopyInput {
    /// Whether this entry contains glob syntax
    pub fn is_glob(&self) -> bool {
        matches!(self, Self::Pattern(p) if has_glob_meta(p))
    }
}

impl From<&str> for CopyInput {
    fn from(pattern: &str) -> Self {
        Self::Pattern(pattern.to_string())
    }
}

impl From<String> for CopyInput {
    fn from(pattern: String) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<&Path> for CopyInput {
    fn from(path: &Path) -> Self {
        Self::Pattern(path.to_string_lossy().into_owned())
    }
}

impl From<PathBuf> for CopyInput {
    fn from(path: PathBuf) -> Self {
        Self::from(path.as_path())
    }
}

impl From<SourceFile> for CopyInput {
    fn from(file: SourceFile) -> Self {
        Self::File(file)
    }
}

/// A normalized, ordered list of copy inputs
#[derive(Debug, Clone, Default)]
pub struct CopyInputs(Vec<CopyInput>);

impl CopyInputs {
    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any entry contains glob syntax
    pub fn has_glob(&self) -> bool {
        self.0.iter().any(CopyInput::is_glob)
    }

    /// Iterate over the entries
    pub fn iter(&self) -> std::slice::Iter<'_, CopyInput> {
        self.0.iter()
    }

    /// Consume the list, yielding its entries
    pub fn into_vec(self) -> Vec<CopyInput> {
        self.0
    }
}

impl IntoIterator for CopyInputs {
    type Item = CopyInput;
    type IntoIter = std::vec::IntoIter<CopyInput>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<&str> for CopyInputs {
    fn from(pattern: &str) -> Self {
        Self(vec![pattern.into()])
    }
}

impl From<String> for CopyInputs {
    fn from(pattern: String) -> Self {
        Self(vec![pattern.into()])
    }
}

impl From<&Path> for CopyInputs {
    fn from(path: &Path) -> Self {
        Self(vec![path.into()])
    }
}

impl From<PathBuf> for CopyInputs {
    fn from(path: PathBuf) -> Self {
        Self(vec![path.into()])
    }
}

impl From<SourceFile> for CopyInputs {
    fn from(file: SourceFile) -> Self {
        Self(vec![file.into()])
    }
}

impl<T: Into<CopyInput>> From<Vec<T>> for CopyInputs {
    fn from(entries: Vec<T>) -> Self {
        Self(entries.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<CopyInput>, const N: usize> From<[T; N]> for CopyInputs {
    fn from(entries: [T; N]) -> Self {
        Self(entries.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<CopyInput> + Clone> From<&[T]> for CopyInputs {
    fn from(entries: &[T]) -> Self {
        Self(entries.iter().cloned().map(Into::into).collect())
    }
}

/// Whether `pattern` contains glob metacharacters
pub(crate) fn has_glob_meta(pattern: &str) -> bool {
    pattern.contains(['*', '?', '[', '{'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_glob_meta() {
        assert!(has_glob_meta("*.txt"));
        assert!(has_glob_meta("src/**/*.rs"));
        assert!(has_glob_meta("file?.log"));
        assert!(has_glob_meta("[ab].txt"));
        assert!(has_glob_meta("{a,b}.txt"));
        assert!(!has_glob_meta("plain/path.txt"));
    }

    #[test]
    fn test_single_pattern_coercion() {
        let inputs = CopyInputs::from("*.txt");
        assert_eq!(inputs.len(), 1);
        assert!(inputs.has_glob());
    }

    #[test]
    fn test_list_coercion() {
        let inputs = CopyInputs::from(vec!["a.txt", "b.txt"]);
        assert_eq!(inputs.len(), 2);
        assert!(!inputs.has_glob());

        let inputs = CopyInputs::from(["a.txt", "b/*.txt"]);
        assert!(inputs.has_glob());
    }

    #[test]
    fn test_file_coercion() {
        let inputs = CopyInputs::from(SourceFile::new("/work/a.txt"));
        assert_eq!(inputs.len(), 1);
        assert!(!inputs.has_glob());
    }

    #[test]
    fn test_empty_list() {
        let inputs = CopyInputs::from(Vec::<String>::new());
        assert!(inputs.is_empty());
    }
}
