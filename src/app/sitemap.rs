use crate::app::models::UrlEntry;
use anyhow::{Context, Result};
use pathdiff::diff_paths;
use std::fs;
use std::path::{Path, PathBuf};

pub const SITEMAP_FILE: &str = "sitemap.xml";

const URLSET_OPEN: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
    "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n"
);

/// Maps a local file path to its public URL: the root prefix becomes the
/// configured base URL, separators are normalized to forward slashes, and a
/// trailing `index.html` segment is stripped so directory index pages map to
/// their directory URL.
pub fn public_url(file: &Path, root: &Path, page_root: &str) -> Option<String> {
    let relative = diff_paths(file, root)?;
    let relative = relative.to_string_lossy().replace('\\', "/");
    let base = page_root.trim_end_matches('/');
    let url = format!("{base}/{relative}");
    match url.strip_suffix("index.html") {
        Some(stripped) => Some(stripped.to_string()),
        None => Some(url),
    }
}

/// Serializes the entries, already sorted by the caller, into the sitemap
/// document. `lastmod` is omitted for entries without a captured timestamp.
pub fn render(entries: &[UrlEntry]) -> String {
    let mut out = String::from(URLSET_OPEN);
    for entry in entries {
        let loc = escape(&entry.loc);
        match &entry.lastmod {
            Some(lastmod) => out.push_str(&format!(
                "  <url><loc>{loc}</loc><lastmod>{lastmod}</lastmod></url>\n"
            )),
            None => out.push_str(&format!("  <url><loc>{loc}</loc></url>\n")),
        }
    }
    out.push_str("</urlset>\n");
    out
}

/// Writes the document to `sitemap.xml` inside the root directory,
/// overwriting any existing file. Failure here is fatal to the run.
pub fn write(root: &Path, document: &str) -> Result<PathBuf> {
    let path = root.join(SITEMAP_FILE);
    fs::write(&path, document)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
