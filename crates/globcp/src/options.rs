//! Options for copy operations

use std::path::PathBuf;

/// Options passed through to the glob expander
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GlobOptions {
    /// Match patterns case-insensitively
    pub case_insensitive: bool,
    /// Include hidden files (dotfiles) in expansion results
    pub include_hidden: bool,
    /// Follow symbolic links while walking the working directory
    pub follow_links: bool,
    /// Maximum directory depth to walk, unlimited when `None`
    pub max_depth: Option<usize>,
}

impl GlobOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Match patterns case-insensitively
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Include hidden files (dotfiles) in expansion results
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.include_hidden = yes;
        self
    }

    /// Follow symbolic links while walking
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    /// Limit the walk to `depth` directory levels
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}

/// Configuration for one copy invocation
///
/// All fields have working defaults; `CopyOptions::default()` copies relative
/// to the process working directory with structure preserved and a
/// CPU-count concurrency bound.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CopyOptions {
    /// Working directory that relative paths and patterns resolve against;
    /// defaults to the process current directory
    pub cwd: Option<PathBuf>,
    /// Override for the source base stripped from source paths; defaults to
    /// the common non-glob parent of the patterns
    pub src_base: Option<PathBuf>,
    /// Pass-through options for the glob expander
    pub glob: GlobOptions,
    /// Copy access and modification times to the destination
    pub preserve_timestamps: bool,
    /// Maximum number of file copies in flight at once
    pub max_concurrency: usize,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            cwd: None,
            src_base: None,
            glob: GlobOptions::default(),
            preserve_timestamps: true,
            max_concurrency: num_cpus::get(),
        }
    }
}

impl CopyOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the working directory
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Override the source base
    pub fn with_src_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.src_base = Some(base.into());
        self
    }

    /// Set the glob pass-through options
    pub fn with_glob(mut self, glob: GlobOptions) -> Self {
        self.glob = glob;
        self
    }

    /// Enable or disable timestamp preservation
    pub fn preserve_timestamps(mut self, yes: bool) -> Self {
        self.preserve_timestamps = yes;
        self
    }

    /// Bound the number of concurrent file copies
    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = CopyOptions::default();
        assert!(options.cwd.is_none());
        assert!(options.src_base.is_none());
        assert!(options.preserve_timestamps);
        assert!(options.max_concurrency >= 1);
    }

    #[test]
    fn test_builder_methods() {
        let options = CopyOptions::new()
            .with_cwd("/work")
            .with_src_base("src")
            .with_glob(GlobOptions::new().include_hidden(true).max_depth(3))
            .preserve_timestamps(false)
            .with_max_concurrency(2);

        assert_eq!(options.cwd.as_deref(), Some(std::path::Path::new("/work")));
        assert_eq!(
            options.src_base.as_deref(),
            Some(std::path::Path::new("src"))
        );
        assert!(options.glob.include_hidden);
        assert_eq!(options.glob.max_depth, Some(3));
        assert!(!options.preserve_timestamps);
        assert_eq!(options.max_concurrency, 2);
    }
}
