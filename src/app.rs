// Declare modules
pub mod cli;
pub mod config;
pub mod history;
pub mod models;
pub mod scanner;
pub mod sitemap;

use anyhow::{ensure, Result};
use clap::Parser;
use std::path::PathBuf;

use self::cli::Cli;
use self::history::{GitLog, LastModified};
use self::models::{Config, UrlEntry};
use self::scanner::Scanner;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Load Configuration (fatal if the file is missing or incomplete)
    let config = config::load(&args.config)?;
    ensure!(
        config.git_root.is_dir(),
        "GIT_ROOT {} is not a directory",
        config.git_root.display()
    );

    println!(
        "Generating sitemap for {}. This may take a while depending on the size of the site...",
        config.git_root.display()
    );

    // 3. Walk the tree
    let scanner = Scanner::new(&config);
    let files = scanner.scan();

    // 4. Look up last commit dates and build URL entries
    let git = GitLog::new(config.git_exec.clone(), config.git_root.clone());
    let mut entries = collect_entries(&files, &git, &config);
    entries.sort_by(|a, b| a.loc.cmp(&b.loc));

    // 5. Serialize and write the sitemap
    let output = sitemap::render(&entries);
    let path = sitemap::write(&config.git_root, &output)?;

    println!("Complete! Wrote {} URLs to {}", entries.len(), path.display());
    Ok(())
}

/// Pairs every scanned file with its public URL and, when git history yields
/// one, a last-modified timestamp. Files whose root-relative path cannot be
/// computed are skipped.
fn collect_entries(files: &[PathBuf], lookup: &dyn LastModified, config: &Config) -> Vec<UrlEntry> {
    let mut entries = Vec::with_capacity(files.len());
    for file in files {
        let Some(loc) = sitemap::public_url(file, &config.git_root, &config.page_root) else {
            continue;
        };
        let lastmod = lookup.last_modified(file);
        entries.push(UrlEntry { loc, lastmod });
    }
    entries
}
