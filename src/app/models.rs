use std::collections::HashSet;
use std::path::PathBuf;

/// Settings parsed from the configuration file. Built once at startup and
/// passed by reference to every stage.
#[derive(Debug, Clone)]
pub struct Config {
    /// Local checkout of the site, also the working directory for git.
    pub git_root: PathBuf,
    /// Git executable to invoke for history lookups.
    pub git_exec: PathBuf,
    /// Public base URL substituted for the local root in page URLs.
    pub page_root: String,
    /// File extensions to include, stored lowercased.
    pub include_ext: HashSet<String>,
    /// Directory names whose subtrees are skipped entirely.
    pub exclude_dirs: HashSet<String>,
    /// Substrings that exclude a file when found anywhere in its path.
    pub exclude_files: Vec<String>,
}

/// One sitemap entry: a page URL and, when git history yielded one, its
/// last-modified timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    pub loc: String,
    pub lastmod: Option<String>,
}
