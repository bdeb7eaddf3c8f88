use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate an XML sitemap for a git-tracked website"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = "config.txt")]
    pub config: PathBuf,
}
