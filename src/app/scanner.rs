use crate::app::models::Config;
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Recursive directory walker applying the configured exclusion and
/// extension rules. Traversal order is whatever the filesystem yields; the
/// final sitemap order is imposed later by sorting.
pub struct Scanner {
    root: PathBuf,
    include_ext: HashSet<String>,
    exclude_dirs: HashSet<String>,
    exclude_files: Vec<String>,
}

impl Scanner {
    pub fn new(config: &Config) -> Self {
        Self {
            root: config.git_root.clone(),
            include_ext: config.include_ext.clone(),
            exclude_dirs: config.exclude_dirs.clone(),
            exclude_files: config.exclude_files.clone(),
        }
    }

    /// Enumerates every file under the root that passes the filters.
    /// Excluded directories are pruned with their whole subtree.
    pub fn scan(&self) -> Vec<PathBuf> {
        let exclude_dirs = self.exclude_dirs.clone();
        // Standard filters off: hidden files and gitignore rules do not
        // apply here, only the configured exclusions do.
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .filter_entry(move |entry| {
                if entry.depth() == 0 {
                    return true;
                }
                let is_dir = entry.file_type().map_or(false, |t| t.is_dir());
                !(is_dir
                    && entry
                        .file_name()
                        .to_str()
                        .map_or(false, |name| exclude_dirs.contains(name)))
            })
            .build();

        let mut files = Vec::new();
        for result in walker {
            match result {
                Ok(entry) => {
                    if entry.file_type().map_or(false, |t| t.is_file()) {
                        if let Some(path) = self.process_file(entry.path()) {
                            files.push(path);
                        }
                    }
                }
                Err(err) => log::warn!("Error walking entry: {}", err),
            }
        }
        files
    }

    fn process_file(&self, path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        if self
            .exclude_files
            .iter()
            .any(|substring| path_str.contains(substring.as_str()))
        {
            return None;
        }
        let ext = extension(&path_str).to_ascii_lowercase();
        if !self.include_ext.contains(&ext) {
            return None;
        }
        Some(path.to_path_buf())
    }
}

/// Extension of a path string: the text after the final '.', empty when
/// there is no dot or the dot sits at position 0.
pub fn extension(path: &str) -> &str {
    match path.rfind('.') {
        Some(i) if i > 0 => &path[i + 1..],
        _ => "",
    }
}
